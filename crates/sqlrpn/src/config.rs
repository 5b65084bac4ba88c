use crate::ident::{Dialect, QuoteStyle, Quoter};
use serde::{Deserialize, Serialize};

/// Default byte budget for SQL text in log events.
pub const DEFAULT_MAX_LOGGED_SQL: usize = 200;

/// Configuration shared by every builder.
///
/// Deserializes from a table where every field is optional:
///
/// ```toml
/// dialect = "mysql"        # sqlite | mysql
/// quote_style = "minimal"  # always | minimal
/// max_logged_sql = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Identifier quoting dialect.
    pub dialect: Dialect,
    /// Which identifier parts get quoted.
    pub quote_style: QuoteStyle,
    /// Truncate SQL in log events to this many bytes. `None` means no truncation.
    pub max_logged_sql: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            quote_style: QuoteStyle::default(),
            max_logged_sql: Some(DEFAULT_MAX_LOGGED_SQL),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults (SQLite, always quoted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the quote style.
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_logged_sql(mut self, len: usize) -> Self {
        self.max_logged_sql = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_log_truncation(mut self) -> Self {
        self.max_logged_sql = None;
        self
    }

    pub fn quoter(&self) -> Quoter {
        Quoter::new(self.dialect, self.quote_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial() {
        let cfg: BuilderConfig = serde_json::from_str(r#"{"dialect": "mysql"}"#).unwrap();
        assert_eq!(cfg.dialect, Dialect::MySql);
        assert_eq!(cfg.quote_style, QuoteStyle::Always);
        assert_eq!(cfg.max_logged_sql, Some(DEFAULT_MAX_LOGGED_SQL));
    }

    #[test]
    fn deserialize_quote_style() {
        let cfg: BuilderConfig =
            serde_json::from_str(r#"{"quote_style": "minimal", "max_logged_sql": null}"#).unwrap();
        assert_eq!(cfg.quote_style, QuoteStyle::Minimal);
        assert_eq!(cfg.max_logged_sql, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = BuilderConfig::new()
            .with_dialect(Dialect::MySql)
            .with_quote_style(QuoteStyle::Minimal)
            .no_log_truncation();
        assert_eq!(cfg.quoter(), Quoter::new(Dialect::MySql, QuoteStyle::Minimal));
        assert_eq!(cfg.max_logged_sql, None);
    }
}
