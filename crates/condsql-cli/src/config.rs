use condsql::Dialect;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "condsql.toml";

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!(
                "failed to parse config file {}: {e:#}",
                config_path.display()
            )
        })?;

        Ok(Self { config_path, file })
    }

    /// Load `explicit`, or `condsql.toml` when it exists. An explicit path must exist.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Option<Self>> {
        match explicit {
            Some(path) => Self::load(path.to_path_buf()).map(Some),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                if path.is_file() {
                    Self::load(path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default target dialect for `convert`.
    pub dialect: Option<String>,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    pub fn dialect(&self) -> anyhow::Result<Option<Dialect>> {
        self.dialect
            .as_deref()
            .map(|name| name.parse::<Dialect>())
            .transpose()
            .map_err(Into::into)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.dialect()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dialect() {
        let file = ConfigFile::parse("dialect = \"postgres\"\n").unwrap();
        assert_eq!(file.dialect().unwrap(), Some(Dialect::Postgres));
    }

    #[test]
    fn parse_empty() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(file.dialect().unwrap(), None);
    }

    #[test]
    fn unknown_dialect_uses_library_message() {
        let err = ConfigFile::parse("dialect = \"db2\"").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported dialect: db2");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("dialct = \"mysql\"").is_err());
    }

    #[test]
    fn explicit_missing_file_fails() {
        let err = ProjectConfig::discover(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
