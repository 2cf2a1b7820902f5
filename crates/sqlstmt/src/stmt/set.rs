//! SET assignment statement for UPDATE.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::param::Params;
use crate::stmt::Clause;
use crate::value::Value;

/// Assignment statement rendering `SET c1=?,c2=?`.
///
/// Assignments are keyed by column: a later write to an existing column
/// replaces its value in place, keeping the original position. Values are
/// bound as placeholders in entry order during build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetStatement {
    assignments: Vec<(String, Value)>,
    escaper: Escaper,
    params: Params,
}

impl SetStatement {
    /// Create an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier escaper.
    pub fn set_escaper(&mut self, escaper: Escaper) -> &mut Self {
        self.escaper = escaper;
        self
    }

    /// Assign one column. Last write wins.
    pub fn add_value(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.assignments.iter_mut().find(|(f, _)| f == field) {
            entry.1 = value;
        } else {
            self.assignments.push((field.to_string(), value));
        }
        self
    }

    /// Assign multiple columns, merging into the existing set.
    pub fn add_values<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (field, value) in pairs {
            self.add_value(field.as_ref(), value);
        }
        self
    }

    /// Assign a column from any `serde::Serialize` value as JSON.
    pub fn add_json<T: serde::Serialize>(
        &mut self,
        field: &str,
        value: &T,
    ) -> serde_json::Result<&mut Self> {
        let json = Value::json(value)?;
        Ok(self.add_value(field, json))
    }

    /// The assignments in entry order.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.assignments
    }
}

impl Clause for SetStatement {
    fn build(&mut self) -> StmtResult<String> {
        self.params.clear();
        if self.assignments.is_empty() {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(self.assignments.len());
        for (field, value) in &self.assignments {
            let field = self.escaper.escape(field)?;
            let placeholder = self.params.bind(value.clone());
            parts.push(format!("{field}={placeholder}"));
        }
        Ok(format!("SET {}", parts.join(",")))
    }

    fn values(&self) -> &[Value] {
        self.params.as_slice()
    }

    fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        let mut s = SetStatement::new();
        assert_eq!(s.build().unwrap(), "");
        assert!(s.values().is_empty());
    }

    #[test]
    fn chained_adds_merge() {
        let mut s = SetStatement::new();
        s.add_values([("test", 1i64)]);
        s.add_values([("test2", 2i64)]);
        assert_eq!(s.build().unwrap(), "SET `test`=?,`test2`=?");
        assert_eq!(s.values(), &[Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn last_write_wins_keeps_position() {
        let mut s = SetStatement::new();
        s.add_value("a", 1i64).add_value("b", 2i64).add_value("a", 9i64);
        assert_eq!(s.build().unwrap(), "SET `a`=?,`b`=?");
        assert_eq!(s.values(), &[Value::Int(9), Value::Int(2)]);
    }

    #[test]
    fn json_assignment() {
        let mut s = SetStatement::new();
        s.add_json("meta", &serde_json::json!({ "k": 1 })).unwrap();
        assert_eq!(s.build().unwrap(), "SET `meta`=?");
        assert_eq!(
            s.values(),
            &[Value::Json(serde_json::json!({ "k": 1 }))]
        );
    }
}
