//! Statement composition — one executable SQL string per query.
//!
//! Each query type owns its clause statements, fixes a clause order, and
//! concatenates the non-empty fragments with single spaces while merging
//! each clause's bound values in the same left-to-right order.
//!
//! # Usage
//!
//! ```ignore
//! use sqlstmt::{select, insert, update, delete, Query};
//!
//! // SELECT
//! let mut q = select("users").eq("status", "active").limit(20);
//! let sql = q.build()?;           // SELECT * FROM `users` WHERE `status`=? LIMIT 0,20
//! let values = q.values();        // [Text("active")]
//!
//! // INSERT
//! let mut q = insert("users")
//!     .set("username", "alice")
//!     .set("email", "alice@example.com");
//! q.build()?;                     // INSERT INTO `users` (`username`,`email`) VALUES (?,?)
//!
//! // UPDATE
//! let mut q = update("users").set("status", "inactive").eq("id", 7);
//! q.build()?;                     // UPDATE `users` SET `status`=? WHERE `id`=?
//!
//! // DELETE
//! let mut q = delete("users").eq("id", 7);
//! q.build()?;                     // DELETE FROM `users` WHERE `id`=?
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

mod delete;
mod insert;
mod select;
mod update;

pub use delete::DeleteQuery;
pub use insert::InsertQuery;
pub use select::SelectQuery;
pub use update::UpdateQuery;

use crate::error::StmtResult;
use crate::stmt::Clause;
use crate::value::Value;

/// Shared surface of every query type.
pub trait Query {
    /// Render the full SQL string and refresh the bound-value list.
    fn build(&mut self) -> StmtResult<String>;

    /// The values bound by the most recent build, in placeholder order.
    ///
    /// Before the first build this is empty.
    fn values(&self) -> &[Value];

    /// Alias for [`Query::build`].
    fn sql(&mut self) -> StmtResult<String> {
        self.build()
    }
}

/// Build a clause and, when it renders something, append its fragment and
/// merge its values.
pub(crate) fn append_clause(
    fragments: &mut Vec<String>,
    values: &mut Vec<Value>,
    clause: &mut impl Clause,
) -> StmtResult<()> {
    let sql = clause.build()?;
    if !sql.is_empty() {
        fragments.push(sql);
        values.extend_from_slice(clause.values());
    }
    Ok(())
}

/// Create a SELECT query for the given table.
///
/// # Example
/// ```ignore
/// let q = sqlstmt::select("users").eq("id", 1);
/// ```
pub fn select(table: &str) -> SelectQuery {
    SelectQuery::new().from(table)
}

/// Create an INSERT query for the given table.
pub fn insert(table: &str) -> InsertQuery {
    InsertQuery::new().table(table)
}

/// Create an UPDATE query for the given table.
pub fn update(table: &str) -> UpdateQuery {
    UpdateQuery::new().table(table)
}

/// Create a DELETE query for the given table.
pub fn delete(table: &str) -> DeleteQuery {
    DeleteQuery::new().from(table)
}
