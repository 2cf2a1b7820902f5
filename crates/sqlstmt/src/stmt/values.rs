//! Column/value statement for INSERT.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::param::Params;
use crate::stmt::Clause;
use crate::value::Value;

/// Assignment statement rendering `(c1,c2) VALUES (?,?)`.
///
/// Shares the [`SetStatement`](crate::SetStatement) storage discipline:
/// keyed by column, last write wins, position preserved, values bound in
/// entry order during build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuesStatement {
    assignments: Vec<(String, Value)>,
    escaper: Escaper,
    params: Params,
}

impl ValuesStatement {
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

impl Clause for ValuesStatement {
    fn build(&mut self) -> StmtResult<String> {
        self.params.clear();
        if self.assignments.is_empty() {
            return Ok(String::new());
        }
        let mut columns = Vec::with_capacity(self.assignments.len());
        let mut placeholders = Vec::with_capacity(self.assignments.len());
        for (field, value) in &self.assignments {
            columns.push(self.escaper.escape(field)?);
            placeholders.push(self.params.bind(value.clone()));
        }
        Ok(format!(
            "({}) VALUES ({})",
            columns.join(","),
            placeholders.join(",")
        ))
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
        let mut v = ValuesStatement::new();
        assert_eq!(v.build().unwrap(), "");
    }

    #[test]
    fn columns_and_placeholders_align() {
        let mut v = ValuesStatement::new();
        v.add_value("username", "alice").add_value("age", 30i64);
        assert_eq!(
            v.build().unwrap(),
            "(`username`,`age`) VALUES (?,?)"
        );
        assert_eq!(
            v.values(),
            &[Value::Text("alice".to_string()), Value::Int(30)]
        );
    }

    #[test]
    fn merge_replaces_in_place() {
        let mut v = ValuesStatement::new();
        v.add_values([("a", 1i64), ("b", 2i64)]);
        v.add_values([("a", 3i64)]);
        assert_eq!(v.build().unwrap(), "(`a`,`b`) VALUES (?,?)");
        assert_eq!(v.values(), &[Value::Int(3), Value::Int(2)]);
    }
}
