//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use receipt_config::Config;
use receipt_core::ReceiptStore;
use receipt_query::RuleBasedAnswerer;
use tracing::info;

mod ask;
mod demo;
mod info;
mod init;
mod list;
mod rules;
mod show;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use demo::DemoStrategy;
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use list::ListStrategy;
pub use rules::RulesStrategy;
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Load the configured receipts and wire them to the configured rule table.
fn build_answerer(config: &Config) -> anyhow::Result<RuleBasedAnswerer<ReceiptStore>> {
    let store = config.load_store()?;
    info!(
        "Answering over {} receipts (spend month {})",
        store.len(),
        config.query.spend_month
    );
    Ok(RuleBasedAnswerer::with_rules(store, config.rules()))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type, so parameters are passed
/// without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
