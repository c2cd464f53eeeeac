//! `tracing` output for rendered SQL.
//!
//! [`TracingSqlLogger`] renders a condition or statement and emits the result
//! as a single event on the `condsql.sql` target before handing it back.
//!
//! ```
//! use condsql::trace::{TraceConfig, TracingSqlLogger};
//! use condsql::{eq, Dialect};
//!
//! let logger = TracingSqlLogger::new(TraceConfig::new().with_max_sql_length(120));
//! let (sql, _args) = logger.render_with(&eq("a", 1), Dialect::Postgres).unwrap();
//! assert_eq!(sql, "a=$1");
//! ```

mod config;
mod logger;

#[cfg(test)]
mod tests;

pub use config::TraceConfig;
pub use logger::TracingSqlLogger;

/// Event target used for every SQL event.
pub const TARGET: &str = "condsql.sql";

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
