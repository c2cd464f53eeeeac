use super::*;
use crate::builder::Builder;
use crate::cond::{eq, neq};
use crate::dialect::Dialect;
use crate::render::SqlBuilder;
use tracing::Level;

#[test]
fn test_truncate_respects_char_boundary() {
    assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
    assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
    // 'é' is two bytes; cutting inside it backs off to the previous boundary.
    assert_eq!(truncate_sql_bytes("aé", 2), "a");
}

#[test]
fn test_config_builder() {
    let config = TraceConfig::new()
        .with_level(Level::INFO)
        .with_max_sql_length(50)
        .without_bound();
    assert_eq!(config.level, Level::INFO);
    assert_eq!(config.max_sql_length, Some(50));
    assert!(!config.include_bound);
    assert_eq!(TraceConfig::new().no_truncate().max_sql_length, None);
}

#[test]
fn test_logger_returns_rendered_sql() {
    let logger = TracingSqlLogger::default();
    let stmt = Builder::for_dialect(Dialect::Postgres)
        .select(["*"])
        .from("t")
        .and_where(eq("a", 1).and(neq("b", "x")));
    assert_eq!(logger.render(&stmt).unwrap(), stmt.to_sql().unwrap());
}

#[test]
fn test_logger_propagates_errors() {
    let logger = TracingSqlLogger::new(TraceConfig::new());
    assert!(logger.render(&Builder::new()).is_err());
}

#[test]
fn test_log_raw_tolerates_mismatch() {
    let logger = TracingSqlLogger::default();
    logger.log_raw("a=? AND b=?", &[1.into()]);
    logger.log_raw("a=?", &[1.into()]);
}
