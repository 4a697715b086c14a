use anyhow::Context;
use receipt_core::ReceiptStore;
use receipt_query::{Rule, YearMonth, default_rules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_DIR_NAME: &str = "receipt_memory";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// JSON array of receipts. The bundled sample is used when unset.
    #[serde(default)]
    pub receipts_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Month reported by the "spend this month" rule.
    #[serde(default)]
    pub spend_month: YearMonth,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Config {
    /// `~/receipt_memory/config.json`
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Read a config file. A missing file yields the defaults so the demo
    /// runs without any setup.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Read a config file the user named explicitly. Unlike [`Self::load_from`]
    /// a missing file is an error.
    pub fn load_required(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let path = Self::default_path()?;
        Self::create_at(&path)?;
        Ok(path)
    }

    /// Write the default config as a template. Refuses to overwrite.
    pub fn create_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!("Created config file at {}", path.display());
        Ok(())
    }

    /// Receipts from `data.receipts_file`, or the bundled sample.
    pub fn load_store(&self) -> anyhow::Result<ReceiptStore> {
        match &self.data.receipts_file {
            Some(path) => {
                info!("Loading receipts from {}", path.display());
                ReceiptStore::from_path(path)
                    .with_context(|| format!("Failed to load receipts from {}", path.display()))
            }
            None => Ok(ReceiptStore::sample()),
        }
    }

    /// Built-in rule table with the configured reference month.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        default_rules(self.query.spend_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_query::{DEFAULT_SPEND_MONTH, Responder};

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_means_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.query.spend_month, DEFAULT_SPEND_MONTH);
        assert!(config.data.receipts_file.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_sections_fill_in() {
        let config: Config = serde_json::from_str(r#"{"query": {"spend_month": "2024-10"}}"#)
            .expect("partial config should parse");
        assert_eq!(config.query.spend_month.month, 10);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn invalid_month_rejected() {
        let parsed = serde_json::from_str::<Config>(r#"{"query": {"spend_month": "October"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn rules_use_configured_month() {
        let mut config = Config::default();
        config.query.spend_month = YearMonth {
            year: 2024,
            month: 10,
        };
        let rules = config.rules();
        assert_eq!(
            rules.last().map(|r| &r.responder),
            Some(&Responder::MonthlySpend(config.query.spend_month))
        );
    }

    #[test]
    fn default_store_is_sample() {
        let store = Config::default().load_store();
        assert!(matches!(store, Ok(s) if s == ReceiptStore::sample()));
    }
}
