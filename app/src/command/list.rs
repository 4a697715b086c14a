use receipt_config::Config;
use receipt_core::{Receipt, ReceiptRepo};

/// Strategy for listing every receipt, one summary line each, in store order.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        let answerer = super::build_answerer(&config)?;
        print!("{}", render_list(answerer.store().all_receipts()));
        Ok(())
    }
}

fn render_list(receipts: &[Receipt]) -> String {
    if receipts.is_empty() {
        return "No receipts loaded.\n".to_string();
    }
    receipts.iter().map(|receipt| format!("{receipt}\n")).collect()
}
