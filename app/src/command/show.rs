use receipt_config::Config;
use receipt_core::Receipt;
use receipt_core::util::{format_kg, format_money};

/// Input parameters for the Show command strategy.
#[derive(Debug, Clone)]
pub struct ShowInput {
    pub config: Config,
    pub receipt_id: String,
    pub json: bool,
}

/// Strategy for printing one receipt in full.
///
/// An unknown id surfaces as the store's `NotFound` error.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        print!("{}", render_show(&input.config, &input.receipt_id, input.json)?);
        Ok(())
    }
}

fn render_show(config: &Config, receipt_id: &str, json: bool) -> anyhow::Result<String> {
    let answerer = super::build_answerer(config)?;
    let receipt = answerer.get_by_id(receipt_id)?;

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(receipt)?))
    } else {
        Ok(render_receipt(receipt))
    }
}

fn render_receipt(receipt: &Receipt) -> String {
    let mut out = format!(
        "Receipt {}\n  Date:     {}\n  Merchant: {} ({})\n  Payment:  {}\n  Items:\n",
        receipt.receipt_id,
        receipt.timestamp,
        receipt.merchant,
        receipt.location,
        receipt.payment_method
    );
    for item in &receipt.items {
        out.push_str(&format!(
            "    {} x {} [{}] @ {}\n",
            item.quantity,
            item.name,
            item.category,
            format_money(item.unit_price)
        ));
    }
    out.push_str(&format!("  Total:    {}\n", format_money(receipt.total)));
    out.push_str(&format!("  Carbon:   {}\n", format_kg(receipt.carbon_footprint)));
    if !receipt.tags.is_empty() {
        let tags: Vec<&str> = receipt.tags.iter().map(String::as_str).collect();
        out.push_str(&format!("  Tags:     {}\n", tags.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::sample_receipts;

    #[test]
    fn renders_all_fields() {
        let receipts = sample_receipts();
        let out = render_receipt(&receipts[1]);
        assert!(out.starts_with("Receipt rec_002\n  Date:     2024-11-12T19:45:00Z\n"));
        assert!(out.contains("  Merchant: The Kitchen (Boulder, CO)\n"));
        assert!(out.contains("    2 x House Wine [Drinks - Alcohol] @ $12.00\n"));
        assert!(out.contains("  Total:    $67.50\n"));
        assert!(out.contains("  Carbon:   8.7kg\n"));
        assert!(out.ends_with("  Tags:     date night, dining, restaurant\n"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn unknown_id_is_not_found() {
        let err = render_show(&Config::default(), "rec_999", false)
            .expect_err("rec_999 is not in the sample");
        assert_eq!(err.to_string(), "Receipt 'rec_999' not found");
        assert!(
            err.downcast_ref::<receipt_core::Error>()
                .is_some_and(receipt_core::Error::is_not_found)
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn json_output_round_trips() {
        let out = render_show(&Config::default(), "rec_004", true).expect("rec_004 exists");
        let receipt: Receipt = serde_json::from_str(&out).expect("valid receipt JSON");
        assert_eq!(receipt, sample_receipts()[3]);
    }
}
