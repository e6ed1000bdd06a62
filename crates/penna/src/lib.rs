//! Typed SQL statement construction and rendering.
//!
//! Describe tables, columns, predicates, joins and statements as typed
//! values, then render them deterministically into a parameterized SQL
//! string plus an ordered list of bound values. Values are never
//! interpolated into statement text; every one travels through an `@pN`
//! placeholder.
//!
//! Table shapes are declared as public, column-only structs and synthesized
//! with [`derive@Table`]:
//!
//! ```
//! use penna::{Column, Insert, Table, render};
//!
//! #[derive(Table)]
//! #[table(name = "users")]
//! pub struct Users {
//!     pub name: Column<String>,
//!     pub age: Column<i32>,
//! }
//!
//! let u = Users::shared();
//! let built = render(&Insert::into(u).values(&u.name, "name").values(&u.age, 10));
//! assert_eq!(built.sql, "INSERT INTO users (name, age) VALUES (@p1, @p2)");
//! ```

mod clause;
mod expr;
mod predicate;
mod render;
mod stmt;
mod table;
mod value;

pub use clause::*;
pub use expr::*;
pub use predicate::*;
pub use render::*;
pub use stmt::*;
pub use table::*;
pub use value::*;

pub use penna_macros::Table;

/// Result of rendering a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSql {
    /// The SQL string with @p1, @p2, etc. placeholders.
    pub sql: String,
    /// Bound values in placeholder order: `params[i]` corresponds to the
    /// i-th placeholder encountered in `sql`, left to right.
    pub params: Vec<Value>,
}
