use serde::Deserialize;
use sqlrpn::{BuilderConfig, Dialect, QuoteStyle};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "sqlrpn.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Where the config came from; `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub file: ConfigFile,
}

impl ProjectConfig {
    /// Load `explicit`, or `sqlrpn.toml` when it exists, or fall back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self {
                        config_path: None,
                        file: ConfigFile::default(),
                    });
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!("failed to read config file {}: {e}", config_path.display())
        })?;
        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!("invalid config file {}: {e:#}", config_path.display())
        })?;

        Ok(Self {
            config_path: Some(config_path),
            file,
        })
    }

    /// The file's `[builder]` table with command-line overrides applied.
    pub fn builder_config(
        &self,
        dialect: Option<Dialect>,
        quote_style: Option<QuoteStyle>,
    ) -> BuilderConfig {
        let mut config = self.file.builder.clone();
        if let Some(d) = dialect {
            config = config.with_dialect(d);
        }
        if let Some(s) = quote_style {
            config = config.with_quote_style(s);
        }
        config
    }

    pub fn log_filter(&self) -> &str {
        self.file
            .logging
            .filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,

    #[serde(default)]
    pub builder: BuilderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            builder: BuilderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {} (expected \"1\")", self.version);
        }
        if self.builder.max_logged_sql == Some(0) {
            anyhow::bail!("builder.max_logged_sql must be greater than 0");
        }
        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                anyhow::bail!("logging.filter must not be empty");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_file() {
        let file = ConfigFile::parse(
            r#"
version = "1"

[builder]
dialect = "mysql"
quote_style = "minimal"
max_logged_sql = 80

[logging]
filter = "sqlrpn.sql=debug"
"#,
        )
        .unwrap();
        assert_eq!(file.builder.dialect, Dialect::MySql);
        assert_eq!(file.builder.quote_style, QuoteStyle::Minimal);
        assert_eq!(file.builder.max_logged_sql, Some(80));
        assert_eq!(file.logging.filter.as_deref(), Some("sqlrpn.sql=debug"));
    }

    #[test]
    fn tables_are_optional() {
        let file = ConfigFile::parse("version = \"1\"").unwrap();
        assert_eq!(file.builder, BuilderConfig::default());
        assert!(file.logging.filter.is_none());
    }

    #[test]
    fn rejects_bad_files() {
        assert!(ConfigFile::parse("").is_err());
        assert!(ConfigFile::parse("version = \"2\"").is_err());
        assert!(ConfigFile::parse("version = \"1\"\n[builder]\ndialect = \"oracle\"").is_err());
        assert!(ConfigFile::parse("version = \"1\"\n[builder]\nmax_logged_sql = 0").is_err());
        assert!(ConfigFile::parse("version = \"1\"\n[logging]\nfilter = \" \"").is_err());
    }

    #[test]
    fn overrides_win() {
        let project = ProjectConfig {
            config_path: None,
            file: ConfigFile::parse("version = \"1\"\n[builder]\ndialect = \"mysql\"").unwrap(),
        };
        let config = project.builder_config(Some(Dialect::Sqlite), Some(QuoteStyle::Minimal));
        assert_eq!(config.dialect, Dialect::Sqlite);
        assert_eq!(config.quote_style, QuoteStyle::Minimal);

        let config = project.builder_config(None, None);
        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(project.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ProjectConfig::load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
