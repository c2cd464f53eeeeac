//! Per-dialect rendering rules.
//!
//! Every supported database family has one [`DialectSpec`] entry in a static,
//! read-only table. The table decides which placeholder marker the renderer
//! writes and how LIMIT/OFFSET is spelled.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A database family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql = 0,
    Postgres = 1,
    Sqlite = 2,
    MsSql = 3,
    Oracle = 4,
}

/// How the renderer spells the Nth placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `?` for every position.
    Question,
    /// Prefix followed by the 1-based index: `$1`, `$2`, ...
    Indexed(&'static str),
    /// Prefix followed by a parameter name: `@p1`, `:p2`, or the caller's own name.
    Named(&'static str),
}

/// How LIMIT/OFFSET is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT n OFFSET m`. `offset_only_limit` is the LIMIT written when only
    /// an offset is set (`None` means OFFSET may stand alone).
    LimitOffset {
        offset_only_limit: Option<&'static str>,
    },
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
    OffsetFetch { requires_order_by: bool },
}

/// Static rules for one dialect.
#[derive(Debug)]
pub struct DialectSpec {
    pub dialect: Dialect,
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Extra names accepted by [`Dialect::from_str`].
    pub aliases: &'static [&'static str],
    pub placeholder: Placeholder,
    pub limit: LimitStyle,
}

/// Indexed by `Dialect as usize`.
static DIALECTS: [DialectSpec; 5] = [
    DialectSpec {
        dialect: Dialect::MySql,
        name: "mysql",
        aliases: &["mariadb"],
        placeholder: Placeholder::Question,
        limit: LimitStyle::LimitOffset {
            offset_only_limit: Some("18446744073709551615"),
        },
    },
    DialectSpec {
        dialect: Dialect::Postgres,
        name: "postgres",
        aliases: &["postgresql", "pg"],
        placeholder: Placeholder::Indexed("$"),
        limit: LimitStyle::LimitOffset {
            offset_only_limit: None,
        },
    },
    DialectSpec {
        dialect: Dialect::Sqlite,
        name: "sqlite",
        aliases: &["sqlite3"],
        placeholder: Placeholder::Question,
        limit: LimitStyle::LimitOffset {
            offset_only_limit: Some("-1"),
        },
    },
    DialectSpec {
        dialect: Dialect::MsSql,
        name: "mssql",
        aliases: &["sqlserver"],
        placeholder: Placeholder::Named("@"),
        limit: LimitStyle::OffsetFetch {
            requires_order_by: true,
        },
    },
    DialectSpec {
        dialect: Dialect::Oracle,
        name: "oracle",
        aliases: &[],
        placeholder: Placeholder::Named(":"),
        limit: LimitStyle::OffsetFetch {
            requires_order_by: false,
        },
    },
];

impl Dialect {
    /// All dialects, in table order.
    pub fn all() -> impl Iterator<Item = Dialect> {
        DIALECTS.iter().map(|spec| spec.dialect)
    }

    /// The static rules for this dialect.
    pub fn spec(self) -> &'static DialectSpec {
        &DIALECTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn placeholder(self) -> Placeholder {
        self.spec().placeholder
    }

    pub fn limit_style(self) -> LimitStyle {
        self.spec().limit
    }

    /// The converter marker matching this dialect's placeholders.
    pub fn marker(self) -> Marker {
        Marker::from(self.placeholder())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        DIALECTS
            .iter()
            .find(|spec| spec.name == needle || spec.aliases.contains(&needle.as_str()))
            .map(|spec| spec.dialect)
            .ok_or_else(|| Error::UnsupportedDialect(s.to_string()))
    }
}

/// Target marker scheme for [`convert_placeholder`](crate::convert_placeholder).
///
/// `Prefix("$")` turns the Nth bare `?` into `$N`; `Prefix(":p")` into `:pN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Question,
    Prefix(String),
}

impl Marker {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Marker::Prefix(prefix.into())
    }

    pub(crate) fn write(&self, index: usize, out: &mut String) {
        match self {
            Marker::Question => out.push('?'),
            Marker::Prefix(prefix) => {
                out.push_str(prefix);
                out.push_str(&index.to_string());
            }
        }
    }
}

impl From<Placeholder> for Marker {
    fn from(placeholder: Placeholder) -> Self {
        match placeholder {
            Placeholder::Question => Marker::Question,
            Placeholder::Indexed(prefix) => Marker::prefix(prefix),
            Placeholder::Named(prefix) => Marker::Prefix(format!("{prefix}p")),
        }
    }
}

impl From<Dialect> for Marker {
    fn from(dialect: Dialect) -> Self {
        dialect.marker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for dialect in Dialect::all() {
            assert_eq!(dialect.spec().dialect, dialect);
        }
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("pg".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("sqlite3".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("sqlserver".parse::<Dialect>().unwrap(), Dialect::MsSql);
        assert_eq!(" oracle ".parse::<Dialect>().unwrap(), Dialect::Oracle);
    }

    #[test]
    fn parse_unknown_dialect() {
        let err = "db2".parse::<Dialect>().unwrap_err();
        assert_eq!(err, Error::UnsupportedDialect("db2".to_string()));
    }

    #[test]
    fn markers_follow_placeholder_style() {
        assert_eq!(Dialect::MySql.marker(), Marker::Question);
        assert_eq!(Dialect::Sqlite.marker(), Marker::Question);
        assert_eq!(Dialect::Postgres.marker(), Marker::prefix("$"));
        assert_eq!(Dialect::Oracle.marker(), Marker::prefix(":p"));
        assert_eq!(Dialect::MsSql.marker(), Marker::prefix("@p"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Dialect::MsSql).unwrap(), "\"mssql\"");
        let parsed: Dialect = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(parsed, Dialect::Postgres);
        for dialect in Dialect::all() {
            assert_eq!(serde_json::to_string(&dialect).unwrap(), format!("\"{}\"", dialect.name()));
        }
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Dialect::MsSql.to_string(), "mssql");
        assert_eq!(Dialect::Postgres.to_string(), "postgres");
    }
}
