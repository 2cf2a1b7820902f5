//! WHERE/HAVING clause statement.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::param::Params;
use crate::stmt::cond::{Condition, IntoConditions, join_and};
use crate::stmt::Clause;
use crate::value::Value;

/// Condition-list statement rendering `WHERE c1 AND c2 ...` or `HAVING ...`.
///
/// Conditions are stored in insertion order and AND-joined; an empty list
/// renders to an empty string so the composing query omits the clause.
///
/// # Example
/// ```ignore
/// let mut w = WhereStatement::new();
/// w.condition("uid", 10).condition_op("age", ">", 18);
/// assert_eq!(w.build()?, "WHERE `uid`=? AND `age`>?");
/// # Ok::<(), sqlstmt::StmtError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereStatement {
    having: bool,
    conditions: Vec<Condition>,
    escaper: Escaper,
    params: Params,
}

impl WhereStatement {
    /// Create a WHERE statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a HAVING statement.
    pub fn having() -> Self {
        Self {
            having: true,
            ..Self::default()
        }
    }

    /// Replace the identifier escaper.
    pub fn set_escaper(&mut self, escaper: Escaper) -> &mut Self {
        self.escaper = escaper;
        self
    }

    /// Add an equality condition: `field=?`
    pub fn condition(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.conditions.push(Condition::eq(field, value));
        self
    }

    /// Add a comparison with an explicit operator, emitted verbatim.
    pub fn condition_op(
        &mut self,
        field: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.conditions.push(Condition::cmp(field, op, value));
        self
    }

    /// Add a raw SQL condition with no placeholder.
    pub fn raw(&mut self, sql: &str) -> &mut Self {
        self.conditions.push(Condition::raw(sql));
        self
    }

    /// Add a parenthesized group of conditions.
    pub fn group(&mut self, conditions: Vec<Condition>) -> &mut Self {
        self.conditions.push(Condition::group(conditions));
        self
    }

    /// Add any condition input shape: a raw string, a list of raw strings,
    /// a list of `(field, value)` pairs, a list of `(field, op, value)`
    /// triples, or pre-built [`Condition`]s. List forms expand to multiple
    /// top-level conditions in input order (flattened AND, not nested).
    pub fn extend(&mut self, input: impl IntoConditions) -> &mut Self {
        self.conditions.extend(input.into_conditions());
        self
    }

    /// The normalized conditions in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn render(&mut self) -> StmtResult<String> {
        self.params.clear();
        if self.conditions.is_empty() {
            return Ok(String::new());
        }
        let body = join_and(&self.conditions, &self.escaper, &mut self.params)?;
        if body.is_empty() {
            return Ok(String::new());
        }
        let keyword = if self.having { "HAVING" } else { "WHERE" };
        Ok(format!("{keyword} {body}"))
    }
}

impl Clause for WhereStatement {
    fn build(&mut self) -> StmtResult<String> {
        self.render()
    }

    fn values(&self) -> &[Value] {
        self.params.as_slice()
    }

    fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        let mut w = WhereStatement::new();
        assert_eq!(w.build().unwrap(), "");
        assert!(w.values().is_empty());
    }

    #[test]
    fn single_equality() {
        let mut w = WhereStatement::new();
        w.condition("uid", 10i64);
        assert_eq!(w.build().unwrap(), "WHERE `uid`=?");
        assert_eq!(w.values(), &[Value::Int(10)]);
    }

    #[test]
    fn having_keyword() {
        let mut h = WhereStatement::having();
        h.condition_op("cnt", ">", 5i64);
        assert_eq!(h.build().unwrap(), "HAVING `cnt`>?");
    }

    #[test]
    fn tuple_list_input() {
        let mut w = WhereStatement::new();
        w.extend(vec![
            Condition::eq("field", "value"),
            Condition::cmp("field2", "like", "value2"),
        ]);
        assert_eq!(w.build().unwrap(), "WHERE `field`=? AND `field2`like?");
        assert_eq!(
            w.values(),
            &[
                Value::Text("value".to_string()),
                Value::Text("value2".to_string()),
            ]
        );
    }

    #[test]
    fn mapping_input_preserves_order() {
        let mut w = WhereStatement::new();
        w.extend(vec![("user_id", 10i64), ("status", 1i64)]);
        assert_eq!(w.build().unwrap(), "WHERE `user_id`=? AND `status`=?");
        assert_eq!(w.values(), &[Value::Int(10), Value::Int(1)]);
    }

    #[test]
    fn mapping_input_equals_chained_calls() {
        let mut a = WhereStatement::new();
        a.extend(vec![("user_id", 10i64), ("status", 1i64)]);

        let mut b = WhereStatement::new();
        b.condition("user_id", 10i64).condition("status", 1i64);

        assert_eq!(a.build().unwrap(), b.build().unwrap());
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn raw_string_list_input() {
        let mut w = WhereStatement::new();
        w.extend(vec!["a=1", "b=2"]);
        assert_eq!(w.build().unwrap(), "WHERE a=1 AND b=2");
        assert!(w.values().is_empty());
    }

    #[test]
    fn nested_group() {
        let mut w = WhereStatement::new();
        w.condition("tenant", 7i64).group(vec![
            Condition::eq("a", 1i64),
            Condition::eq("b", 2i64),
        ]);
        assert_eq!(
            w.build().unwrap(),
            "WHERE `tenant`=? AND (`a`=? AND `b`=?)"
        );
        assert_eq!(
            w.values(),
            &[Value::Int(7), Value::Int(1), Value::Int(2)]
        );
    }

    #[test]
    fn rebuild_refreshes_values() {
        let mut w = WhereStatement::new();
        w.condition("uid", 10i64);
        w.build().unwrap();
        w.build().unwrap();
        assert_eq!(w.values().len(), 1);
    }
}
