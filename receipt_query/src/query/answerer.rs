use receipt_core::{Receipt, ReceiptRepo};
use tracing::debug;

use super::month::DEFAULT_SPEND_MONTH;
use super::rules::{Rule, default_rules};
use crate::answer::Answer;

/// Answers questions by running them through an ordered rule table.
///
/// Holds no mutable state; share it behind an `Arc` across threads freely.
pub struct RuleBasedAnswerer<R: ReceiptRepo> {
    store: R,
    rules: Vec<Rule>,
}

impl<R: ReceiptRepo> RuleBasedAnswerer<R> {
    /// Answerer over `store` with the built-in rules.
    #[must_use]
    pub fn new(store: R) -> Self {
        Self::with_rules(store, default_rules(DEFAULT_SPEND_MONTH))
    }

    /// Answerer with a caller-supplied rule table, evaluated in order.
    #[must_use]
    pub const fn with_rules(store: R, rules: Vec<Rule>) -> Self {
        Self { store, rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub const fn store(&self) -> &R {
        &self.store
    }

    /// First rule whose trigger matches the question, if any.
    #[must_use]
    pub fn matching_rule(&self, question: &str) -> Option<&Rule> {
        let normalized = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.trigger.matches(&normalized))
    }

    /// Answer a question. Never fails: unmatched input gets the help text.
    #[must_use]
    pub fn answer(&self, question: &str) -> Answer {
        match self.matching_rule(question) {
            Some(rule) => {
                debug!(rule = %rule.name, "Question matched rule");
                rule.responder.respond(self.store.all_receipts())
            }
            None => {
                debug!("No rule matched, returning help text");
                Answer::help()
            }
        }
    }

    pub fn get_by_id(&self, receipt_id: &str) -> receipt_core::Result<&Receipt> {
        self.store.get_by_id(receipt_id)
    }
}
