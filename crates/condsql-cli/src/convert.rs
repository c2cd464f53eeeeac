use crate::cli::ConvertArgs;
use crate::config::ProjectConfig;
use condsql::{Dialect, Marker, convert_placeholder};

/// Pick the target marker: `--marker`, then `--dialect`, then the config file.
fn resolve_marker(args: &ConvertArgs) -> anyhow::Result<Marker> {
    if let Some(prefix) = &args.marker {
        return Ok(match prefix.as_str() {
            "?" => Marker::Question,
            _ => Marker::prefix(prefix.as_str()),
        });
    }
    if let Some(name) = &args.dialect {
        return Ok(name.parse::<Dialect>()?.marker());
    }

    match ProjectConfig::discover(args.config.as_deref())? {
        Some(config) => match config.file.dialect()? {
            Some(dialect) => Ok(dialect.marker()),
            None => anyhow::bail!(
                "{} does not set `dialect`: pass --dialect or --marker",
                config.config_path.display()
            ),
        },
        None => anyhow::bail!(
            "no target dialect: pass --dialect or --marker, or set `dialect` in condsql.toml"
        ),
    }
}

pub fn run(args: &ConvertArgs, sql: &str) -> anyhow::Result<String> {
    let marker = resolve_marker(args)?;
    Ok(convert_placeholder(sql, &marker)?)
}
