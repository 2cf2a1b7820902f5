//! FROM table-list statement.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::stmt::Clause;
use crate::value::Value;

/// Table-list statement rendering `FROM t1,t2,...`.
///
/// There is no default table: zero tables renders an empty string. Tables
/// that fail identifier validation are dropped from the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FromStatement {
    tables: Vec<String>,
    escaper: Escaper,
}

impl FromStatement {
    /// Create an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier escaper.
    pub fn set_escaper(&mut self, escaper: Escaper) -> &mut Self {
        self.escaper = escaper;
        self
    }

    /// Add tables from a comma-separated spec string: `"users, orders"`.
    pub fn add_table(&mut self, spec: &str) -> &mut Self {
        for token in spec.split(',') {
            let token = token.trim();
            if !token.is_empty() {
                self.tables.push(token.to_string());
            }
        }
        self
    }

    /// Add tables from a slice.
    pub fn add_table_list(&mut self, tables: &[&str]) -> &mut Self {
        for table in tables {
            self.add_table(table);
        }
        self
    }

    /// The stored tables in insertion order.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }
}

impl Clause for FromStatement {
    fn build(&mut self) -> StmtResult<String> {
        let parts: Vec<String> = self
            .tables
            .iter()
            .filter_map(|t| self.escaper.try_escape(t))
            .collect();
        if parts.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("FROM {}", parts.join(",")))
    }

    fn values(&self) -> &[Value] {
        &[]
    }

    fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
