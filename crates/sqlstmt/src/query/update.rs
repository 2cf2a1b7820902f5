//! UPDATE query composition.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::query::{append_clause, Query};
use crate::stmt::{IntoConditions, OrderStatement, SetStatement, WhereStatement};
use crate::value::Value;
use tracing::debug;

/// UPDATE query builder.
///
/// Clause order: `UPDATE table [SET ...] [WHERE] [ORDER BY] [LIMIT limit]`.
/// SET values bind before WHERE values, matching fragment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuery {
    table: String,
    set_stmt: SetStatement,
    where_stmt: WhereStatement,
    order_stmt: OrderStatement,
    limit: Option<u64>,
    escaper: Escaper,
    values: Vec<Value>,
}

impl UpdateQuery {
    /// Create an empty UPDATE query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one escaper configuration for the table and every clause.
    pub fn escaper(mut self, escaper: Escaper) -> Self {
        self.escaper = escaper;
        self.set_stmt.set_escaper(escaper);
        self.where_stmt.set_escaper(escaper);
        self.order_stmt.set_escaper(escaper);
        self
    }

    /// Set the target table.
    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    /// Assign a column value. Last write wins.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set_stmt.add_value(field, value);
        self
    }

    /// Assign multiple column values, merging into the existing set.
    pub fn set_many<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.set_stmt.add_values(pairs);
        self
    }

    /// Assign a column from any `serde::Serialize` value as JSON.
    pub fn set_json<T: serde::Serialize>(
        mut self,
        field: &str,
        value: &T,
    ) -> serde_json::Result<Self> {
        self.set_stmt.add_json(field, value)?;
        Ok(self)
    }

    /// Add WHERE: `field=?`
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.where_stmt.condition(field, value);
        self
    }

    /// Add WHERE with an explicit operator, emitted verbatim.
    pub fn cmp(mut self, field: &str, op: &str, value: impl Into<Value>) -> Self {
        self.where_stmt.condition_op(field, op, value);
        self
    }

    /// Add a raw WHERE condition with no placeholder.
    pub fn raw(mut self, sql: &str) -> Self {
        self.where_stmt.raw(sql);
        self
    }

    /// Add WHERE conditions from any accepted input shape.
    pub fn conditions(mut self, input: impl IntoConditions) -> Self {
        self.where_stmt.extend(input);
        self
    }

    /// Add ORDER BY entries from a comma-separated spec.
    pub fn order_by(mut self, spec: &str) -> Self {
        self.order_stmt.add(spec);
        self
    }

    /// Set the row limit. Without it no LIMIT fragment renders.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The owned SET statement.
    pub fn set_stmt(&mut self) -> &mut SetStatement {
        &mut self.set_stmt
    }

    /// The owned WHERE statement.
    pub fn where_stmt(&mut self) -> &mut WhereStatement {
        &mut self.where_stmt
    }

    /// The owned ORDER BY statement.
    pub fn order_by_stmt(&mut self) -> &mut OrderStatement {
        &mut self.order_stmt
    }

    fn render(&mut self) -> StmtResult<String> {
        let mut fragments = vec!["UPDATE".to_string()];
        let mut values = Vec::new();

        if !self.table.is_empty() {
            fragments.push(self.escaper.escape(&self.table)?);
        }
        append_clause(&mut fragments, &mut values, &mut self.set_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.where_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.order_stmt)?;
        if let Some(limit) = self.limit {
            fragments.push(format!("LIMIT {limit}"));
        }

        let sql = fragments.join(" ");
        self.values = values;
        debug!(sql = %sql, values = self.values.len(), "built UPDATE statement");
        Ok(sql)
    }
}

impl Query for UpdateQuery {
    fn build(&mut self) -> StmtResult<String> {
        self.render()
    }

    fn values(&self) -> &[Value] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_update() {
        let mut q = UpdateQuery::new()
            .table("users")
            .set("status", "inactive")
            .eq("id", 7i64);
        assert_eq!(
            q.build().unwrap(),
            "UPDATE `users` SET `status`=? WHERE `id`=?"
        );
        assert_eq!(
            q.values(),
            &[Value::Text("inactive".to_string()), Value::Int(7)]
        );
    }

    #[test]
    fn set_values_bind_before_where_values() {
        let mut q = UpdateQuery::new()
            .table("users")
            .set("a", 1i64)
            .set("b", 2i64)
            .eq("id", 3i64);
        q.build().unwrap();
        assert_eq!(
            q.values(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn order_and_limit() {
        let mut q = UpdateQuery::new()
            .table("jobs")
            .set("claimed", 1i64)
            .order_by("queued_at ASC")
            .limit(1);
        assert_eq!(
            q.build().unwrap(),
            "UPDATE `jobs` SET `claimed`=? ORDER BY `queued_at` ASC LIMIT 1"
        );
    }

    #[test]
    fn empty_set_renders_no_set_fragment() {
        let mut q = UpdateQuery::new().table("users").eq("id", 1i64);
        assert_eq!(q.build().unwrap(), "UPDATE `users` WHERE `id`=?");
    }
}
