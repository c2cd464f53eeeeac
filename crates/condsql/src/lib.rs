//! # condsql
//!
//! Dialect-aware SQL condition trees, statement building and placeholder binding.
//!
//! ## Features
//!
//! - **Condition trees**: compose WHERE/HAVING/ON predicates as immutable `Cond` values
//! - **Statement builder**: SELECT / INSERT / UPDATE / DELETE with joins, grouping and paging
//! - **Dialects**: MySQL, SQLite (`?`), Postgres (`$N`), Oracle (`:pN`) and MsSQL (`@pN`) markers
//! - **Placeholder conversion**: rewrite bare `?` markers in hand-written SQL, quote-aware
//! - **Bound SQL**: inline arguments as escaped literals for logs and debugging
//! - **Tracing**: optional `tracing` events for rendered SQL
//!
//! ## Example
//!
//! ```
//! use condsql::{eq, in_list, select, Dialect, SqlBuilder};
//!
//! let stmt = select(["id"])
//!     .from("table")
//!     .and_where(in_list("a", [1, 2]).unwrap());
//!
//! let (sql, args) = stmt.to_sql().unwrap();
//! assert_eq!(sql, "SELECT id FROM table WHERE a IN (?,?)");
//! assert_eq!(args.len(), 2);
//!
//! assert_eq!(stmt.to_bound_sql().unwrap(), "SELECT id FROM table WHERE a IN (1,2)");
//!
//! let (sql, _) = eq("a", 1).to_sql_with(Dialect::Postgres).unwrap();
//! assert_eq!(sql, "a=$1");
//! ```

pub mod bound;
pub mod builder;
pub mod cond;
pub mod dialect;
pub mod error;
pub mod render;
pub mod scan;
pub mod value;

#[cfg(feature = "tracing")]
pub mod trace;

pub use bound::{convert_to_bound_sql, format_literal};
pub use builder::{Builder, Join, JoinKind, StatementKind};
pub use cond::{
    and, between, eq, expr, gt, gte, in_list, is_not_null, is_null, like, lt, lte, neq, not,
    not_in, not_like, or, CompareOp, Cond, InSource, Operand, RawExpr,
};
pub use dialect::{Dialect, DialectSpec, LimitStyle, Marker, Placeholder};
pub use error::{Error, Result};
pub use render::{render_with_dialect, SqlBuilder, SqlWriter};
pub use scan::{convert_placeholder, count_placeholders};
pub use value::{named, Arg, Value};

#[cfg(feature = "tracing")]
pub use trace::{TraceConfig, TracingSqlLogger};

/// Start a builder for `dialect`.
pub fn dialect(dialect: Dialect) -> Builder {
    Builder::for_dialect(dialect)
}

/// Start a SELECT of `columns` (`*` when empty).
pub fn select<I, S>(columns: I) -> Builder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Builder::new().select(columns)
}

/// Start an INSERT into `table`.
pub fn insert_into(table: impl Into<String>) -> Builder {
    Builder::new().insert().into_table(table)
}

/// Start an UPDATE of `table`.
pub fn update(table: impl Into<String>) -> Builder {
    Builder::new().update().table(table)
}

/// Start a DELETE from `table`.
pub fn delete_from(table: impl Into<String>) -> Builder {
    Builder::new().delete().from(table)
}

/// Render `value` for its own dialect.
pub fn to_sql<B: SqlBuilder + ?Sized>(value: &B) -> Result<(String, Vec<Arg>)> {
    value.to_sql()
}

/// Render `value` with every argument inlined as a literal.
pub fn to_bound_sql<B: SqlBuilder + ?Sized>(value: &B) -> Result<String> {
    value.to_bound_sql()
}
