use serde::{Deserialize, Serialize};

/// Returned when no rule matches the question.
pub const HELP_TEXT: &str = "I can help you with questions like:\n\
    • When did I buy that jacket?\n\
    • How much did I spend on restaurants?\n\
    • What's my carbon footprint?\n\
    • Show me my outdoor gear purchases";

/// Answer text plus the receipts it was drawn from, in citation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub source_receipt_ids: Vec<String>,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>, source_receipt_ids: Vec<String>) -> Self {
        Self {
            text: text.into(),
            source_receipt_ids,
        }
    }

    #[must_use]
    pub fn help() -> Self {
        Self::new(HELP_TEXT, Vec::new())
    }

    #[must_use]
    pub fn has_sources(&self) -> bool {
        !self.source_receipt_ids.is_empty()
    }

    /// Sources as a single comma-separated line.
    #[must_use]
    pub fn sources_line(&self) -> String {
        self.source_receipt_ids.join(", ")
    }
}
