//! Inline arguments into SQL text for inspection.
//!
//! Bound SQL is meant for logs and debugging output. It is never executed, so
//! literal formatting favours readability; strings are still quoted with the
//! standard `''` doubling so the output is unambiguous.

use crate::error::{Error, Result};
use crate::scan::split_placeholders;
use crate::value::{Arg, Value};
use std::fmt::Write as _;

/// Replace every bare `?` in `sql` with the literal text of the matching argument.
///
/// The argument count must equal the placeholder count; any mismatch fails
/// with [`Error::NeedMoreArguments`].
///
/// ```
/// use condsql::convert_to_bound_sql;
///
/// let sql = convert_to_bound_sql("SELECT * FROM t WHERE a=? AND b=?", &[1.into(), "x".into()]).unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE a=1 AND b='x'");
/// ```
pub fn convert_to_bound_sql(sql: &str, args: &[Arg]) -> Result<String> {
    let segments = split_placeholders(sql)?;
    let placeholders = segments.len() - 1;
    if placeholders != args.len() {
        return Err(Error::NeedMoreArguments {
            placeholders,
            args: args.len(),
        });
    }

    let mut out = String::with_capacity(sql.len() + args.len() * 8);
    for (segment, arg) in segments.iter().zip(args) {
        out.push_str(segment);
        write_literal(arg.value(), &mut out);
    }
    if let Some(tail) = segments.last() {
        out.push_str(tail);
    }
    Ok(out)
}

/// Format a single value as an SQL literal.
pub fn format_literal(value: &Value) -> String {
    let mut out = String::new();
    write_literal(value, &mut out);
    out
}

/// Append the SQL literal form of `value` to `out`.
pub fn write_literal(value: &Value, out: &mut String) {
    // Writing into a String cannot fail.
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::Int(v) => {
            let _ = write!(out, "{v}");
        }
        Value::UInt(v) => {
            let _ = write!(out, "{v}");
        }
        Value::Float(v) if v.is_nan() => push_quoted("NaN", out),
        Value::Float(v) if v.is_infinite() => {
            push_quoted(if *v > 0.0 { "Infinity" } else { "-Infinity" }, out)
        }
        Value::Float(v) => {
            let _ = write!(out, "{v}");
        }
        Value::Text(v) => push_quoted(v, out),
        Value::Bytes(v) => push_quoted(&String::from_utf8_lossy(v), out),
        Value::Timestamp(v) => {
            push_quoted(&v.format("%Y-%m-%d %H:%M:%S%.f").to_string(), out)
        }
        Value::Uuid(v) => push_quoted(&v.hyphenated().to_string(), out),
        Value::Json(v) => push_quoted(&v.to_string(), out),
    }
}

fn push_quoted(text: &str, out: &mut String) {
    out.reserve(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::named;
    use chrono::{TimeZone, Utc};

    #[test]
    fn binds_mixed_values() {
        let sql = "SELECT a, b FROM table_a WHERE b_id=(SELECT id FROM table_b WHERE b=?) AND id=? AND c=? AND d=? AND e=? AND f=?";
        let args: Vec<Arg> = vec![
            1i32.into(),
            2.1f64.into(),
            "3".into(),
            4u32.into(),
            "5".into(),
            true.into(),
        ];
        let bound = convert_to_bound_sql(sql, &args).unwrap();
        assert_eq!(
            bound,
            "SELECT a, b FROM table_a WHERE b_id=(SELECT id FROM table_b WHERE b=1) AND id=2.1 AND c='3' AND d=4 AND e='5' AND f=true"
        );
    }

    #[test]
    fn named_arg_uses_its_value() {
        let sql = "SELECT a FROM t WHERE id=? AND c=?";
        let args = vec![Arg::from(2.1f64), named("any", "3")];
        assert_eq!(
            convert_to_bound_sql(sql, &args).unwrap(),
            "SELECT a FROM t WHERE id=2.1 AND c='3'"
        );
    }

    #[test]
    fn too_few_args() {
        let err = convert_to_bound_sql("a=? AND b=?", &[1.into()]).unwrap_err();
        assert_eq!(err, Error::NeedMoreArguments { placeholders: 2, args: 1 });
    }

    #[test]
    fn too_many_args() {
        let err = convert_to_bound_sql("a=?", &[1.into(), 2.into()]).unwrap_err();
        assert!(err.is_need_more_arguments());
    }

    #[test]
    fn quotes_are_doubled() {
        let bound = convert_to_bound_sql("name=?", &["cat';truncate table table1;".into()]).unwrap();
        assert_eq!(bound, "name='cat'';truncate table table1;'");
    }

    #[test]
    fn quoted_marker_is_not_bound() {
        let bound = convert_to_bound_sql("a='?' AND b=?", &[7.into()]).unwrap();
        assert_eq!(bound, "a='?' AND b=7");
    }

    #[test]
    fn literal_forms() {
        assert_eq!(format_literal(&Value::Null), "null");
        assert_eq!(format_literal(&Value::Bool(false)), "false");
        assert_eq!(format_literal(&Value::Int(-3)), "-3");
        assert_eq!(format_literal(&Value::Bytes(b"o'k".to_vec())), "'o''k'");
        assert_eq!(
            format_literal(&Value::Json(serde_json::json!({"k": "it's"}))),
            r#"'{"k":"it''s"}'"#
        );
    }

    #[test]
    fn non_finite_floats_are_quoted() {
        assert_eq!(format_literal(&Value::Float(f64::NAN)), "'NaN'");
        assert_eq!(format_literal(&Value::Float(f64::INFINITY)), "'Infinity'");
        assert_eq!(format_literal(&Value::Float(f64::NEG_INFINITY)), "'-Infinity'");
        assert_eq!(format_literal(&Value::Float(-0.5)), "-0.5");

        let bound = convert_to_bound_sql("a=?", &[f64::NAN.into()]).unwrap();
        assert_eq!(bound, "a='NaN'");
    }

    #[test]
    fn timestamp_literal() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_literal(&Value::Timestamp(ts)), "'2024-01-02 03:04:05'");
    }

    #[test]
    fn uuid_literal_is_hyphenated() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            format_literal(&Value::Uuid(id)),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }
}
