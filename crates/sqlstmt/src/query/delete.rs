//! DELETE query composition.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::query::{append_clause, Query};
use crate::stmt::{FromStatement, IntoConditions, OrderStatement, WhereStatement};
use crate::value::Value;
use tracing::debug;

/// DELETE query builder.
///
/// Clause order: `DELETE FROM tables [WHERE] [ORDER BY] [LIMIT limit]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteQuery {
    from: FromStatement,
    where_stmt: WhereStatement,
    order_stmt: OrderStatement,
    limit: Option<u64>,
    values: Vec<Value>,
}

impl DeleteQuery {
    /// Create an empty DELETE query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one escaper configuration for every clause.
    pub fn escaper(mut self, escaper: Escaper) -> Self {
        self.from.set_escaper(escaper);
        self.where_stmt.set_escaper(escaper);
        self.order_stmt.set_escaper(escaper);
        self
    }

    /// Add target tables from a comma-separated spec or single name.
    pub fn from(mut self, table: &str) -> Self {
        self.from.add_table(table);
        self
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

    /// The owned FROM statement.
    pub fn from_stmt(&mut self) -> &mut FromStatement {
        &mut self.from
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
        let mut fragments = vec!["DELETE".to_string()];
        let mut values = Vec::new();

        append_clause(&mut fragments, &mut values, &mut self.from)?;
        append_clause(&mut fragments, &mut values, &mut self.where_stmt)?;
        append_clause(&mut fragments, &mut values, &mut self.order_stmt)?;
        if let Some(limit) = self.limit {
            fragments.push(format!("LIMIT {limit}"));
        }

        let sql = fragments.join(" ");
        self.values = values;
        debug!(sql = %sql, values = self.values.len(), "built DELETE statement");
        Ok(sql)
    }
}

impl Query for DeleteQuery {
    fn build(&mut self) -> StmtResult<String> {
        self.render()
    }

    fn values(&self) -> &[Value] {
        &self.values
    }
}
