use crate::cli::{BindArg, BindArgs};
use condsql::{Arg, Value, convert_to_bound_sql};

/// Read a command-line token as the most specific value it spells.
fn parse_value(raw: &str) -> Value {
    match raw {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Value::Int(v);
    }
    if let Ok(v) = raw.parse::<u64>() {
        return Value::UInt(v);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Value::Float(v),
        _ => Value::Text(raw.to_string()),
    }
}

pub fn run(args: &BindArgs) -> anyhow::Result<String> {
    let values: Vec<Arg> = args
        .args
        .iter()
        .map(|arg| match arg {
            BindArg::Auto(raw) => Arg::Value(parse_value(raw)),
            BindArg::Str(raw) => Arg::Value(Value::Text(raw.clone())),
        })
        .collect();
    Ok(convert_to_bound_sql(&args.sql, &values)?)
}
