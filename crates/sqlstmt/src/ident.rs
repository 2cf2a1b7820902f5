//! SQL identifier escaping.
//!
//! This module provides [`Escaper`] which wraps column/table names in an
//! escape character (backtick by default), supporting dotted notation
//! (`table.column`) and `AS` aliases.
//!
//! A segment part is only wrapped when it matches `[A-Za-z0-9_]*`. What
//! happens to a part that does not match depends on [`EscapeMode`]:
//! [`EscapeMode::Lenient`] passes it through untouched, which keeps
//! expressions like `*` or `COUNT(*)` intact but also lets malformed input
//! reach the SQL text unquoted; [`EscapeMode::Strict`] rejects it with
//! [`StmtError::InvalidIdentifier`].
//!
//! # Example
//! ```ignore
//! use sqlstmt::Escaper;
//!
//! let esc = Escaper::default();
//! assert_eq!(esc.escape("users.id")?, "`users`.`id`");
//! assert_eq!(esc.escape("uid AS user_id")?, "`uid` AS `user_id`");
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

use crate::error::{StmtError, StmtResult};

/// How the escaper treats identifier parts that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Pass unescapable parts through verbatim.
    #[default]
    Lenient,
    /// Reject unescapable parts with [`StmtError::InvalidIdentifier`].
    Strict,
}

/// Escapes identifiers for embedding into SQL text.
///
/// The escape character and mode are fixed at construction; there is no
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaper {
    quote: char,
    mode: EscapeMode,
}

impl Default for Escaper {
    fn default() -> Self {
        Self {
            quote: '`',
            mode: EscapeMode::Lenient,
        }
    }
}

impl Escaper {
    /// Create an escaper with a custom escape character.
    pub fn new(quote: char) -> Self {
        Self {
            quote,
            mode: EscapeMode::Lenient,
        }
    }

    /// Switch the validation mode.
    pub fn with_mode(mut self, mode: EscapeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a strict backtick escaper.
    pub fn strict() -> Self {
        Self::default().with_mode(EscapeMode::Strict)
    }

    /// The configured escape character.
    pub fn quote(&self) -> char {
        self.quote
    }

    /// The configured validation mode.
    pub fn mode(&self) -> EscapeMode {
        self.mode
    }

    /// Escape an identifier, alias expression, or qualified reference.
    ///
    /// Whitespace-separated tokens are escaped independently; a literal `as`
    /// token (any case) is re-emitted as uppercase `AS`, unescaped. Within a
    /// token, period-delimited parts are escaped one by one so qualified
    /// references keep their shape: `users.id` becomes `` `users`.`id` ``.
    ///
    /// Empty input renders as an empty wrapped pair and never errors.
    pub fn escape(&self, raw: &str) -> StmtResult<String> {
        if raw.is_empty() {
            return Ok(self.wrap(""));
        }

        let mut tokens = Vec::new();
        for token in raw.split_whitespace() {
            if token.eq_ignore_ascii_case("as") {
                tokens.push("AS".to_string());
            } else {
                tokens.push(self.escape_token(token)?);
            }
        }
        Ok(tokens.join(" "))
    }

    /// Escape with drop-on-invalid semantics.
    ///
    /// Field-list statements (FROM, ORDER BY, GROUP BY) filter out entries
    /// that fail identifier validation instead of passing them through or
    /// erroring. Returns `None` for empty input or when any non-`AS` part
    /// fails validation, regardless of mode.
    pub fn try_escape(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return None;
        }

        let mut tokens = Vec::new();
        for token in raw.split_whitespace() {
            if token.eq_ignore_ascii_case("as") {
                tokens.push("AS".to_string());
                continue;
            }
            let mut parts = Vec::new();
            for part in token.split('.') {
                if !is_plain(part) {
                    return None;
                }
                parts.push(self.wrap(part));
            }
            tokens.push(parts.join("."));
        }
        if tokens.is_empty() {
            return None;
        }
        Some(tokens.join(" "))
    }

    fn escape_token(&self, token: &str) -> StmtResult<String> {
        let mut parts = Vec::new();
        for part in token.split('.') {
            if is_plain(part) {
                parts.push(self.wrap(part));
            } else {
                match self.mode {
                    EscapeMode::Lenient => parts.push(part.to_string()),
                    EscapeMode::Strict => {
                        return Err(StmtError::invalid_identifier(token));
                    }
                }
            }
        }
        Ok(parts.join("."))
    }

    fn wrap(&self, part: &str) -> String {
        format!("{q}{part}{q}", q = self.quote)
    }
}

/// Whether a part matches `[A-Za-z0-9_]*` and is safe to wrap.
fn is_plain(part: &str) -> bool {
    part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
