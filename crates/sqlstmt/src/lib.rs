//! # sqlstmt
//!
//! Composable parameterized SQL statement builders.
//!
//! ## Features
//!
//! - **Placeholder safety**: every literal binds through an ordered value
//!   list paired with positional `?` placeholders; values never touch the
//!   SQL text
//! - **Identifier escaping**: backtick-wrapped (configurable) column and
//!   table names, with qualified `table.column` references and `AS` aliases
//! - **Flexible inputs**: comma-separated specs, slices, pair lists, and
//!   condition tuples all normalize to one internal representation
//! - **Fixed clause order**: each query type concatenates its non-empty
//!   clauses deterministically and merges their values left to right
//! - **No execution**: the output is a `(sql, values)` pair for whatever
//!   driver runs it
//!
//! ## Queries
//!
//! ```ignore
//! use sqlstmt::{select, Query};
//!
//! let mut q = select("Users")
//!     .eq("uid", 10)
//!     .order_by("uid ASC")
//!     .limit(100);
//!
//! assert_eq!(
//!     q.build()?,
//!     "SELECT * FROM `Users` WHERE `uid`=? ORDER BY `uid` ASC LIMIT 0,100"
//! );
//! assert_eq!(q.values().len(), 1);
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```
//!
//! ## Statements
//!
//! Clause statements can be used standalone; each renders its keyword and
//! body, or an empty string when it holds nothing:
//!
//! ```ignore
//! use sqlstmt::{Clause, WhereStatement};
//!
//! let mut w = WhereStatement::new();
//! w.condition("user_id", 10).condition_op("age", ">", 18);
//! assert_eq!(w.build()?, "WHERE `user_id`=? AND `age`>?");
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

pub mod error;
pub mod ident;
pub mod param;
pub mod query;
pub mod stmt;
pub mod value;

pub use error::{StmtError, StmtResult};
pub use ident::{EscapeMode, Escaper};
pub use param::{Params, PLACEHOLDER};
pub use value::Value;

pub use stmt::{
    Clause, Condition, FromStatement, IntoConditions, OrderEntry, OrderStatement,
    SelectStatement, SetStatement, ValuesStatement, WhereStatement,
};

pub use query::{
    delete, insert, select, update, DeleteQuery, InsertQuery, Query, SelectQuery, UpdateQuery,
};
