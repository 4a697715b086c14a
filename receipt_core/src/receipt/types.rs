use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// One purchased product or service within a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub category: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A single purchase transaction.
///
/// `total` is carried as recorded and is not required to match the sum of
/// `items`; the sample data itself disagrees on several receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: String,
    /// RFC 3339 date-time, e.g. `2024-11-10T10:15:00Z`.
    pub timestamp: String,
    pub merchant: String,
    pub location: String,
    pub total: f64,
    pub items: Vec<LineItem>,
    pub payment_method: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Estimated kg CO2e.
    pub carbon_footprint: f64,
}

impl Receipt {
    /// Parsed timestamp, keeping the offset it was recorded with.
    #[must_use]
    pub fn happened_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }

    /// Whether the receipt was recorded in the given calendar month, judged
    /// by the wall-clock date written in the timestamp.
    #[must_use]
    pub fn falls_in_month(&self, year: i32, month: u32) -> bool {
        self.happened_at()
            .is_some_and(|at| at.year() == year && at.month() == month)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Sum of line item subtotals. Informational only.
    #[must_use]
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Checks the per-record invariants. The items/total mismatch is
    /// deliberately not one of them.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidReceipt {
            id: self.receipt_id.clone(),
            reason,
        };

        if self.receipt_id.trim().is_empty() {
            return Err(invalid("receipt_id is empty".to_string()));
        }
        if self.happened_at().is_none() {
            return Err(invalid(format!(
                "timestamp '{}' is not RFC 3339",
                self.timestamp
            )));
        }
        if !is_non_negative(self.total) {
            return Err(invalid(format!("total {} is negative", self.total)));
        }
        if !is_non_negative(self.carbon_footprint) {
            return Err(invalid(format!(
                "carbon_footprint {} is negative",
                self.carbon_footprint
            )));
        }
        for item in &self.items {
            if !is_non_negative(item.unit_price) {
                return Err(invalid(format!(
                    "item '{}' has negative price {}",
                    item.name, item.unit_price
                )));
            }
            if item.quantity == 0 {
                return Err(invalid(format!("item '{}' has zero quantity", item.name)));
            }
        }

        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let date = self
            .happened_at()
            .map_or_else(|| self.timestamp.clone(), |at| at.date_naive().to_string());
        write!(
            f,
            "{}  {}  {} ({})  {}",
            self.receipt_id,
            date,
            self.merchant,
            self.location,
            crate::util::format_money(self.total)
        )
    }
}
