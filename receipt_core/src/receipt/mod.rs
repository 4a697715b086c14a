mod repository;
mod sample;
mod types;

pub use repository::{ReceiptRepo, ReceiptStore};
pub use sample::sample_receipts;
pub use types::{LineItem, Receipt};
