//! SELECT field-list statement.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::stmt::Clause;
use crate::value::Value;

/// Field-list statement rendering `SELECT a,b,...`.
///
/// Zero fields defaults to `*` — the default is applied at render time and
/// reflected by [`SelectStatement::fields`], never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectStatement {
    fields: Vec<String>,
    escaper: Escaper,
}

impl SelectStatement {
    /// Create an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier escaper.
    pub fn set_escaper(&mut self, escaper: Escaper) -> &mut Self {
        self.escaper = escaper;
        self
    }

    /// Add fields from a comma-separated spec string: `"id, name"`.
    pub fn add_fields(&mut self, spec: &str) -> &mut Self {
        for token in spec.split(',') {
            let token = token.trim();
            if !token.is_empty() {
                self.fields.push(token.to_string());
            }
        }
        self
    }

    /// Add a single field.
    pub fn add_field(&mut self, field: &str) -> &mut Self {
        self.add_fields(field)
    }

    /// Add fields from a slice.
    pub fn add_field_list(&mut self, fields: &[&str]) -> &mut Self {
        for field in fields {
            self.add_fields(field);
        }
        self
    }

    /// The stored fields, or `["*"]` when none were added.
    pub fn fields(&self) -> Vec<String> {
        if self.fields.is_empty() {
            vec!["*".to_string()]
        } else {
            self.fields.clone()
        }
    }
}

impl Clause for SelectStatement {
    fn build(&mut self) -> StmtResult<String> {
        let mut parts = Vec::new();
        for field in self.fields() {
            // `*` is a projection, not an identifier; emit it untouched.
            if field == "*" {
                parts.push(field);
            } else {
                let escaped = self.escaper.escape(&field)?;
                if !escaped.is_empty() {
                    parts.push(escaped);
                }
            }
        }
        Ok(format!("SELECT {}", parts.join(",")))
    }

    fn values(&self) -> &[Value] {
        &[]
    }

    fn is_empty(&self) -> bool {
        // Never empty: zero fields still renders `SELECT *`.
        false
    }
}
