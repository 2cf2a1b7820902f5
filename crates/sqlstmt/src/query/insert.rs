//! INSERT query composition.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::query::{append_clause, Query};
use crate::stmt::ValuesStatement;
use crate::value::Value;
use tracing::debug;

/// INSERT query builder.
///
/// Clause order: `INSERT INTO table (cols) VALUES (placeholders)`. The
/// column/value fragment renders through the owned [`ValuesStatement`] and
/// is omitted when no values were set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertQuery {
    table: String,
    values_stmt: ValuesStatement,
    escaper: Escaper,
    values: Vec<Value>,
}

impl InsertQuery {
    /// Create an empty INSERT query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one escaper configuration for the table and every column.
    pub fn escaper(mut self, escaper: Escaper) -> Self {
        self.escaper = escaper;
        self.values_stmt.set_escaper(escaper);
        self
    }

    /// Set the target table.
    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    /// Set a column value. Last write wins.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values_stmt.add_value(field, value);
        self
    }

    /// Set multiple column values, merging into the existing set.
    pub fn set_many<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.values_stmt.add_values(pairs);
        self
    }

    /// Set a column from any `serde::Serialize` value as JSON.
    pub fn set_json<T: serde::Serialize>(
        mut self,
        field: &str,
        value: &T,
    ) -> serde_json::Result<Self> {
        self.values_stmt.add_json(field, value)?;
        Ok(self)
    }

    /// The owned column/value statement.
    pub fn values_stmt(&mut self) -> &mut ValuesStatement {
        &mut self.values_stmt
    }

    fn render(&mut self) -> StmtResult<String> {
        let mut fragments = vec!["INSERT INTO".to_string()];
        let mut values = Vec::new();

        if !self.table.is_empty() {
            fragments.push(self.escaper.escape(&self.table)?);
        }
        append_clause(&mut fragments, &mut values, &mut self.values_stmt)?;

        let sql = fragments.join(" ");
        self.values = values;
        debug!(sql = %sql, values = self.values.len(), "built INSERT statement");
        Ok(sql)
    }
}

impl Query for InsertQuery {
    fn build(&mut self) -> StmtResult<String> {
        self.render()
    }

    fn values(&self) -> &[Value] {
        &self.values
    }
}
