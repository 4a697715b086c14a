use receipt_config::Config;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    pub config: Config,
    /// Where the config was looked up.
    pub path: Option<PathBuf>,
}

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        print!("{}", render_info(&input.config, input.path.as_deref()));
        Ok(())
    }
}

fn render_info(config: &Config, path: Option<&Path>) -> String {
    let mut out = String::from("=== receipt-memory Configuration ===\n\nConfig File:\n");
    match path {
        Some(path) if path.exists() => out.push_str(&format!("  Path: {}\n", path.display())),
        Some(path) => out.push_str(&format!(
            "  Path: {} (not found, using defaults)\n",
            path.display()
        )),
        None => out.push_str("  Path: (unknown)\n"),
    }

    out.push_str("\nReceipts:\n");
    match &config.data.receipts_file {
        Some(file) => out.push_str(&format!("  Source: {}\n", file.display())),
        None => out.push_str("  Source: bundled sample\n"),
    }
    match config.load_store() {
        Ok(store) => out.push_str(&format!("  Count: {}\n", store.len())),
        Err(e) => {
            warn!("Receipt data failed to load: {e:#}");
            out.push_str(&format!("  Status: Failed to load\n  Error: {e:#}\n"));
        }
    }

    out.push_str(&format!(
        "\nQuery:\n  Spend Month: {} ({})\n  Rules: {}\n",
        config.query.spend_month,
        config.query.spend_month.month_name(),
        config.rules().len()
    ));
    out.push_str(&format!("\nLogging:\n  Level: {}\n", config.logging.level));
    out
}
