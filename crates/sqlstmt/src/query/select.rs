//! SELECT query composition.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::query::{append_clause, Query};
use crate::stmt::{
    Clause, FromStatement, IntoConditions, OrderStatement, SelectStatement, WhereStatement,
};
use crate::value::Value;
use tracing::debug;

/// SELECT query builder.
///
/// Clause order: `SELECT fields FROM tables [WHERE] [GROUP BY] [HAVING]
/// [ORDER BY] [LIMIT offset,limit]`. The LIMIT fragment renders only when an
/// explicit limit was set; offset defaults to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    select: SelectStatement,
    from: FromStatement,
    where_stmt: WhereStatement,
    group_stmt: OrderStatement,
    having_stmt: WhereStatement,
    order_stmt: OrderStatement,
    limit: Option<u64>,
    offset: u64,
    values: Vec<Value>,
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectQuery {
    /// Create an empty SELECT query.
    pub fn new() -> Self {
        Self {
            select: SelectStatement::new(),
            from: FromStatement::new(),
            where_stmt: WhereStatement::new(),
            group_stmt: OrderStatement::group_by(),
            having_stmt: WhereStatement::having(),
            order_stmt: OrderStatement::new(),
            limit: None,
            offset: 0,
            values: Vec::new(),
        }
    }

    /// Use one escaper configuration for every clause.
    pub fn escaper(mut self, escaper: Escaper) -> Self {
        self.select.set_escaper(escaper);
        self.from.set_escaper(escaper);
        self.where_stmt.set_escaper(escaper);
        self.group_stmt.set_escaper(escaper);
        self.having_stmt.set_escaper(escaper);
        self.order_stmt.set_escaper(escaper);
        self
    }

    // ==================== Projection & source ====================

    /// Add SELECT fields from a comma-separated spec or single name.
    pub fn fields(mut self, spec: &str) -> Self {
        self.select.add_fields(spec);
        self
    }

    /// Add SELECT fields from a slice.
    pub fn field_list(mut self, fields: &[&str]) -> Self {
        self.select.add_field_list(fields);
        self
    }

    /// Add FROM tables from a comma-separated spec or single name.
    pub fn from(mut self, table: &str) -> Self {
        self.from.add_table(table);
        self
    }

    // ==================== WHERE conditions ====================

    /// Add WHERE: `field=?`
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.where_stmt.condition(field, value);
        self
    }

    /// Add WHERE with an explicit operator, emitted verbatim: `field<op>?`
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

    // ==================== Grouping & HAVING ====================

    /// Add GROUP BY fields from a comma-separated spec.
    pub fn group_by(mut self, spec: &str) -> Self {
        self.group_stmt.add(spec);
        self
    }

    /// Add HAVING: `field=?`
    pub fn having_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.having_stmt.condition(field, value);
        self
    }

    /// Add HAVING with an explicit operator.
    pub fn having_cmp(mut self, field: &str, op: &str, value: impl Into<Value>) -> Self {
        self.having_stmt.condition_op(field, op, value);
        self
    }

    /// Add HAVING conditions from any accepted input shape.
    pub fn having(mut self, input: impl IntoConditions) -> Self {
        self.having_stmt.extend(input);
        self
    }

    // ==================== Ordering & window ====================

    /// Add ORDER BY entries from a comma-separated spec: `"a ASC, b"`.
    pub fn order_by(mut self, spec: &str) -> Self {
        self.order_stmt.add(spec);
        self
    }

    /// Add ORDER BY `field` ASC.
    pub fn order_by_asc(mut self, field: &str) -> Self {
        self.order_stmt.add_field_dir(field, "ASC");
        self
    }

    /// Add ORDER BY `field` DESC.
    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.order_stmt.add_field_dir(field, "DESC");
        self
    }

    /// Set the row limit. Without it no LIMIT fragment renders.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the row offset (defaults to 0; rendered only with a limit).
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    // ==================== Owned statement access ====================

    /// The owned SELECT field statement.
    pub fn select_stmt(&mut self) -> &mut SelectStatement {
        &mut self.select
    }

    /// The owned FROM statement.
    pub fn from_stmt(&mut self) -> &mut FromStatement {
        &mut self.from
    }

    /// The owned WHERE statement.
    pub fn where_stmt(&mut self) -> &mut WhereStatement {
        &mut self.where_stmt
    }

    /// The owned GROUP BY statement.
    pub fn group_by_stmt(&mut self) -> &mut OrderStatement {
        &mut self.group_stmt
    }

    /// The owned HAVING statement.
    pub fn having_stmt(&mut self) -> &mut WhereStatement {
        &mut self.having_stmt
    }

    /// The owned ORDER BY statement.
    pub fn order_by_stmt(&mut self) -> &mut OrderStatement {
        &mut self.order_stmt
    }

    fn render(&mut self) -> StmtResult<String> {
        let mut fragments = Vec::new();
        let mut values = Vec::new();

        fragments.push(self.select.build()?);
        append_clause(&mut fragments, &mut values, &mut self.from)?;
        append_clause(&mut fragments, &mut values, &mut self.where_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.group_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.having_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.order_stmt)?;
        if let Some(limit) = self.limit {
            fragments.push(format!("LIMIT {},{}", self.offset, limit));
        }

        let sql = fragments.join(" ");
        self.values = values;
        debug!(sql = %sql, values = self.values.len(), "built SELECT statement");
        Ok(sql)
    }
}

impl Query for SelectQuery {
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
    fn bare_query_is_select_star() {
        let mut q = SelectQuery::new();
        assert_eq!(q.build().unwrap(), "SELECT *");
        assert!(q.values().is_empty());
    }

    #[test]
    fn full_clause_order() {
        let mut q = SelectQuery::new()
            .fields("category, COUNT(*)")
            .from("products")
            .eq("active", 1i64)
            .group_by("category")
            .having_cmp("COUNT(*)", ">", 5i64)
            .order_by_desc("category")
            .limit(10)
            .offset(20);
        assert_eq!(
            q.build().unwrap(),
            "SELECT `category`,COUNT(*) FROM `products` WHERE `active`=? \
             GROUP BY `category` HAVING COUNT(*)>? ORDER BY `category` DESC LIMIT 20,10"
        );
        assert_eq!(q.values(), &[Value::Int(1), Value::Int(5)]);
    }

    #[test]
    fn limit_omitted_without_explicit_value() {
        let mut q = SelectQuery::new().from("users").offset(5);
        assert_eq!(q.build().unwrap(), "SELECT * FROM `users`");
    }

    #[test]
    fn offset_defaults_to_zero() {
        let mut q = SelectQuery::new().from("users").limit(100);
        assert_eq!(q.build().unwrap(), "SELECT * FROM `users` LIMIT 0,100");
    }

    #[test]
    fn statement_getters_expose_owned_state() {
        let mut q = SelectQuery::new().from("users");
        q.where_stmt().condition("id", 1i64);
        assert_eq!(q.build().unwrap(), "SELECT * FROM `users` WHERE `id`=?");
        assert_eq!(q.from_stmt().tables(), &["users".to_string()]);
        assert_eq!(q.select_stmt().fields(), vec!["*".to_string()]);
    }

    #[test]
    fn values_empty_before_first_build() {
        let q = SelectQuery::new().from("users").eq("id", 1i64);
        assert!(q.values().is_empty());
    }
}
