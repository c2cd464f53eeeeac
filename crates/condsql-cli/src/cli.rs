use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Convert,
    Bind,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Convert(ConvertArgs),
    Bind(BindArgs),
}

#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Explicit config path; `condsql.toml` is used when present otherwise.
    pub config: Option<PathBuf>,
    pub dialect: Option<String>,
    pub marker: Option<String>,
    /// SQL text; read from stdin when absent.
    pub sql: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindArg {
    /// Parsed as null, bool, integer or float, falling back to a string.
    Auto(String),
    /// Always a string (`--str`).
    Str(String),
}

#[derive(Debug, Clone)]
pub struct BindArgs {
    pub sql: String,
    pub args: Vec<BindArg>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "convert" => parse_convert(it.map(|s| s.as_str())),
        "bind" => parse_bind(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_convert<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut out = ConvertArgs::default();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Convert)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                out.config = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--config=") => {
                out.config = Some(PathBuf::from(token.trim_start_matches("--config=")));
            }
            "--dialect" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--dialect requires a value");
                };
                out.dialect = Some(v.to_string());
            }
            _ if token.starts_with("--dialect=") => {
                out.dialect = Some(token.trim_start_matches("--dialect=").to_string());
            }
            "--marker" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--marker requires a value");
                };
                out.marker = Some(v.to_string());
            }
            _ if token.starts_with("--marker=") => {
                out.marker = Some(token.trim_start_matches("--marker=").to_string());
            }
            other if other.starts_with("--") => anyhow::bail!("unknown argument: {other}"),
            other => {
                if out.sql.is_some() {
                    anyhow::bail!("unexpected argument: {other} (quote the SQL as one argument)");
                }
                out.sql = Some(other.to_string());
            }
        }
    }

    if out.dialect.is_some() && out.marker.is_some() {
        anyhow::bail!("--dialect and --marker are mutually exclusive");
    }

    Ok(Command::Convert(out))
}

fn parse_bind<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut sql: Option<String> = None;
    let mut args: Vec<BindArg> = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Bind)),
            "--str" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--str requires a value");
                };
                if sql.is_none() {
                    anyhow::bail!("--str must follow the SQL argument");
                }
                args.push(BindArg::Str(v.to_string()));
            }
            _ if token.starts_with("--str=") => {
                if sql.is_none() {
                    anyhow::bail!("--str must follow the SQL argument");
                }
                args.push(BindArg::Str(token.trim_start_matches("--str=").to_string()));
            }
            other if other.starts_with("--") => anyhow::bail!("unknown argument: {other}"),
            other if sql.is_none() => sql = Some(other.to_string()),
            other => args.push(BindArg::Auto(other.to_string())),
        }
    }

    let Some(sql) = sql else {
        return Ok(Command::Help(HelpTopic::Bind));
    };
    Ok(Command::Bind(BindArgs { sql, args }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
condsql - placeholder conversion and SQL binding

USAGE:
  condsql <COMMAND> [OPTIONS]

COMMANDS:
  convert       Rewrite `?` placeholders into a dialect's markers
  bind          Inline arguments into `?` placeholders

Run `condsql <command> --help` for more."
            );
        }
        HelpTopic::Convert => {
            println!(
                "\
USAGE:
  condsql convert [OPTIONS] [SQL]

Reads SQL from stdin when no SQL argument is given.

OPTIONS:
  --dialect <NAME>      Target dialect: mysql, postgres, sqlite, mssql, oracle
  --marker <PREFIX>     Target marker prefix, e.g. `$` or `:p`
  --config <FILE>       Config file path (default: condsql.toml, if present)
  -h, --help            Print help"
            );
        }
        HelpTopic::Bind => {
            println!(
                "\
USAGE:
  condsql bind SQL [ARG...]

Each ARG is read as null, true/false, an integer or a float, and as a
string otherwise.

OPTIONS:
  --str <VALUE>         Bind VALUE as a string as-is
  -h, --help            Print help"
            );
        }
    }
}
