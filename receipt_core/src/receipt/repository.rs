use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use super::sample::sample_receipts;
use super::types::Receipt;
use crate::error::{Error, Result};

/// Read-only access to an ordered set of receipts.
pub trait ReceiptRepo: Send + Sync {
    /// Every receipt, in load order.
    fn all_receipts(&self) -> &[Receipt];

    /// Linear scan by id. An absent id is `Error::NotFound`, never a panic.
    fn get_by_id(&self, receipt_id: &str) -> Result<&Receipt> {
        let found = self
            .all_receipts()
            .iter()
            .find(|r| r.receipt_id == receipt_id);
        debug!(receipt_id, found = found.is_some(), "Receipt lookup");
        found.ok_or_else(|| Error::NotFound(receipt_id.to_string()))
    }
}

impl<R: ReceiptRepo + ?Sized> ReceiptRepo for Arc<R> {
    fn all_receipts(&self) -> &[Receipt] {
        (**self).all_receipts()
    }
}

/// Immutable in-memory receipt store, built once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptStore {
    receipts: Vec<Receipt>,
}

impl ReceiptStore {
    /// Build a store, rejecting duplicate ids and invalid records.
    pub fn new(receipts: Vec<Receipt>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(receipts.len());
        for receipt in &receipts {
            receipt.validate()?;
            if !seen.insert(receipt.receipt_id.as_str()) {
                return Err(Error::DuplicateId(receipt.receipt_id.clone()));
            }
        }

        info!("Receipt store loaded with {} receipts", receipts.len());
        Ok(Self { receipts })
    }

    /// The bundled five-receipt demo data set.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            receipts: sample_receipts(),
        }
    }

    /// Parse a JSON array of receipts.
    pub fn from_json(json: &str) -> Result<Self> {
        let receipts: Vec<Receipt> = serde_json::from_str(json)?;
        Self::new(receipts)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

impl ReceiptRepo for ReceiptStore {
    fn all_receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}
