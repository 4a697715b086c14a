use receipt_config::Config;
use std::path::PathBuf;

/// Strategy for writing the default configuration file.
///
/// Writes to `--config` when given, otherwise `~/receipt_memory/config.json`.
/// An existing file is never overwritten.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, path: Self::Input) -> anyhow::Result<()> {
        let path = match path {
            Some(path) => {
                Config::create_at(&path)?;
                path
            }
            None => Config::create_config()?,
        };

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - data.receipts_file: JSON array of receipts (bundled sample when null)");
        println!("   - query.spend_month: YYYY-MM month used by \"spend this month\"");
        println!("   - logging.level: default log filter (RUST_LOG overrides)");
        Ok(())
    }
}
