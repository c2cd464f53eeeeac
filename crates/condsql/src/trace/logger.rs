use super::{TARGET, TraceConfig, truncate_sql_bytes};
use crate::bound::convert_to_bound_sql;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::render::{SqlBuilder, SqlWriter};
use crate::value::Arg;
use tracing::Level;

/// Renders SQL and emits it as a `tracing` event.
///
/// Enable via the crate feature: `condsql = { features = ["tracing"] }` (on by default).
#[derive(Debug, Clone, Default)]
pub struct TracingSqlLogger {
    config: TraceConfig,
}

impl TracingSqlLogger {
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Render `value` for its own dialect and log the result.
    pub fn render<B: SqlBuilder + ?Sized>(&self, value: &B) -> Result<(String, Vec<Arg>)> {
        self.render_with(value, value.dialect())
    }

    /// Render `value` for `dialect` and log the result.
    ///
    /// Errors are returned unlogged.
    pub fn render_with<B: SqlBuilder + ?Sized>(
        &self,
        value: &B,
        dialect: Dialect,
    ) -> Result<(String, Vec<Arg>)> {
        let (sql, args) = value.to_sql_with(dialect)?;
        let bound = if self.config.include_bound {
            let mut w = SqlWriter::positional(dialect);
            value.write_sql(&mut w)?;
            let (positional, plain) = w.finish();
            convert_to_bound_sql(&positional, &plain).ok()
        } else {
            None
        };
        self.emit(dialect.name(), &sql, args.len(), bound.as_deref());
        Ok((sql, args))
    }

    /// Log raw `?`-marker SQL with its arguments.
    ///
    /// `bound_sql` is omitted when the arguments do not fit the markers.
    pub fn log_raw(&self, sql: &str, args: &[Arg]) {
        let bound = if self.config.include_bound {
            convert_to_bound_sql(sql, args).ok()
        } else {
            None
        };
        self.emit("raw", sql, args.len(), bound.as_deref());
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.config.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    fn emit(&self, dialect: &str, sql: &str, param_count: usize, bound: Option<&str>) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(sql);
        match bound.map(|b| self.truncate_sql(b)) {
            Some(bound_sql) => emit_at_level!(
                self.config.level,
                target: TARGET,
                dialect,
                param_count,
                sql = %sql,
                bound_sql = %bound_sql,
            ),
            None => emit_at_level!(
                self.config.level,
                target: TARGET,
                dialect,
                param_count,
                sql = %sql,
            ),
        }
    }
}
