#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod answer;
pub mod query;

pub use answer::{Answer, HELP_TEXT};
pub use query::answerer::RuleBasedAnswerer;
pub use query::month::{DEFAULT_SPEND_MONTH, YearMonth};
pub use query::rules::{Responder, Rule, Trigger, default_rules};
