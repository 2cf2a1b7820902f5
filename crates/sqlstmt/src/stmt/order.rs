//! ORDER BY / GROUP BY statement.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::stmt::Clause;
use crate::value::Value;

/// One sort/group entry: a field with an optional direction token.
///
/// An absent direction is omitted from the output, never defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEntry {
    field: String,
    direction: Option<String>,
}

impl OrderEntry {
    /// The field name as stored.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The direction token as stored, if any.
    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }
}

/// Field-list statement rendering `ORDER BY ...` or `GROUP BY ...`.
///
/// Entries whose field fails identifier validation, or whose direction is
/// not `asc`/`desc` case-insensitively, are dropped at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStatement {
    group: bool,
    entries: Vec<OrderEntry>,
    escaper: Escaper,
}

impl OrderStatement {
    /// Create an ORDER BY statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GROUP BY statement.
    pub fn group_by() -> Self {
        Self {
            group: true,
            ..Self::default()
        }
    }

    /// Replace the identifier escaper.
    pub fn set_escaper(&mut self, escaper: Escaper) -> &mut Self {
        self.escaper = escaper;
        self
    }

    /// Add entries from a comma-separated spec string: `"a ASC, b"`.
    ///
    /// Within each chunk the first whitespace-separated token is the field
    /// and the second, when present, the direction.
    pub fn add(&mut self, spec: &str) -> &mut Self {
        for chunk in spec.split(',') {
            let mut tokens = chunk.split_whitespace();
            let Some(field) = tokens.next() else {
                continue;
            };
            let direction = tokens.next().map(str::to_string);
            self.entries.push(OrderEntry {
                field: field.to_string(),
                direction,
            });
        }
        self
    }

    /// Add a single field with no direction.
    pub fn add_field(&mut self, field: &str) -> &mut Self {
        self.entries.push(OrderEntry {
            field: field.to_string(),
            direction: None,
        });
        self
    }

    /// Add a single field with an explicit direction.
    pub fn add_field_dir(&mut self, field: &str, direction: &str) -> &mut Self {
        self.entries.push(OrderEntry {
            field: field.to_string(),
            direction: Some(direction.to_string()),
        });
        self
    }

    /// Add `(field, direction)` pairs.
    pub fn add_pairs(&mut self, pairs: &[(&str, &str)]) -> &mut Self {
        for (field, direction) in pairs {
            self.add_field_dir(field, direction);
        }
        self
    }

    /// Add multiple fields, applying one direction to every entry that does
    /// not carry its own: `add_all(&["a DESC", "b"], "ASC")` sorts `a`
    /// descending and `b` ascending.
    pub fn add_all(&mut self, fields: &[&str], direction: &str) -> &mut Self {
        for spec in fields {
            let before = self.entries.len();
            self.add(spec);
            for entry in &mut self.entries[before..] {
                if entry.direction.is_none() {
                    entry.direction = Some(direction.to_string());
                }
            }
        }
        self
    }

    /// The stored entries in insertion order.
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    fn render_entry(&self, entry: &OrderEntry) -> Option<String> {
        let field = self.escaper.try_escape(&entry.field)?;
        match &entry.direction {
            None => Some(field),
            Some(dir) => {
                let dir = dir.to_ascii_uppercase();
                if dir == "ASC" || dir == "DESC" {
                    Some(format!("{field} {dir}"))
                } else {
                    None
                }
            }
        }
    }
}

impl Clause for OrderStatement {
    fn build(&mut self) -> StmtResult<String> {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| self.render_entry(e))
            .collect();
        if parts.is_empty() {
            return Ok(String::new());
        }
        let keyword = if self.group { "GROUP BY" } else { "ORDER BY" };
        Ok(format!("{keyword} {}", parts.join(",")))
    }

    fn values(&self) -> &[Value] {
        &[]
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        let mut o = OrderStatement::new();
        assert_eq!(o.build().unwrap(), "");
    }

    #[test]
    fn spec_string_with_mixed_directions() {
        let mut o = OrderStatement::new();
        o.add("a ASC, b");
        assert_eq!(o.build().unwrap(), "ORDER BY `a` ASC,`b`");
    }

    #[test]
    fn direction_case_normalized() {
        let mut o = OrderStatement::new();
        o.add_field_dir("uid", "desc");
        assert_eq!(o.build().unwrap(), "ORDER BY `uid` DESC");
    }

    #[test]
    fn invalid_direction_drops_entry() {
        let mut o = OrderStatement::new();
        o.add_field_dir("a", "sideways").add_field("b");
        assert_eq!(o.build().unwrap(), "ORDER BY `b`");
    }

    #[test]
    fn invalid_field_drops_entry() {
        let mut o = OrderStatement::new();
        o.add_field(r#"bad"field"#).add_field("good");
        assert_eq!(o.build().unwrap(), "ORDER BY `good`");
    }

    #[test]
    fn shared_direction_fills_missing_only() {
        let mut o = OrderStatement::new();
        o.add_all(&["a DESC", "b"], "ASC");
        assert_eq!(o.build().unwrap(), "ORDER BY `a` DESC,`b` ASC");
    }

    #[test]
    fn pair_list() {
        let mut o = OrderStatement::new();
        o.add_pairs(&[("a", "ASC"), ("b", "DESC")]);
        assert_eq!(o.build().unwrap(), "ORDER BY `a` ASC,`b` DESC");
    }

    #[test]
    fn group_by_keyword() {
        let mut g = OrderStatement::group_by();
        g.add_field("category");
        assert_eq!(g.build().unwrap(), "GROUP BY `category`");
    }

    #[test]
    fn qualified_field() {
        let mut o = OrderStatement::new();
        o.add("u.created_at DESC");
        assert_eq!(o.build().unwrap(), "ORDER BY `u`.`created_at` DESC");
    }
}
