//! Keyword trigger rules for routing questions to answers.
//!
//! A rule pairs a [`Trigger`] (a keyword test over the case-folded question)
//! with a [`Responder`] (how the answer is produced from the receipts).
//! Rules are evaluated in list order and the first match wins, so the order
//! of [`default_rules`] is part of its behavior.

use receipt_core::Receipt;
use receipt_core::util::{format_kg, format_money, join_names};

use super::month::YearMonth;
use crate::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    All,
    Any,
}

/// Keyword test over a case-folded question.
///
/// Keywords are lowercased once when the trigger is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    combine: Combine,
    keywords: Vec<String>,
}

impl Trigger {
    fn new(combine: Combine, keywords: &[&str]) -> Self {
        Self {
            combine,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Every keyword must appear. Vacuously true when empty.
    #[must_use]
    pub fn all_of(keywords: &[&str]) -> Self {
        Self::new(Combine::All, keywords)
    }

    /// At least one keyword must appear.
    #[must_use]
    pub fn any_of(keywords: &[&str]) -> Self {
        Self::new(Combine::Any, keywords)
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Substring test. `normalized` is expected to be lowercased already.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        let contains = |keyword: &String| normalized.contains(keyword.as_str());
        match self.combine {
            Combine::All => self.keywords.iter().all(contains),
            Combine::Any => self.keywords.iter().any(contains),
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joiner = match self.combine {
            Combine::All => " AND ",
            Combine::Any => " OR ",
        };
        let quoted: Vec<String> = self.keywords.iter().map(|k| format!("\"{k}\"")).collect();
        write!(f, "{}", quoted.join(joiner))
    }
}

/// How a matched rule produces its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Responder {
    /// Canned text with fixed citations.
    Static { text: String, sources: Vec<String> },
    /// Total carbon footprint across all receipts, citing the largest
    /// contributor.
    CarbonTotal,
    /// Total spend for one calendar month, citing every receipt counted.
    MonthlySpend(YearMonth),
}

impl Responder {
    #[must_use]
    pub fn fixed(text: impl Into<String>, sources: &[&str]) -> Self {
        Self::Static {
            text: text.into(),
            sources: sources.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn respond(&self, receipts: &[Receipt]) -> Answer {
        match self {
            Self::Static { text, sources } => Answer::new(text.clone(), sources.clone()),
            Self::CarbonTotal => carbon_total(receipts),
            Self::MonthlySpend(month) => monthly_spend(receipts, *month),
        }
    }
}

fn carbon_total(receipts: &[Receipt]) -> Answer {
    let total: f64 = receipts.iter().map(|r| r.carbon_footprint).sum();
    let mut text = format!(
        "Your total carbon footprint from tracked purchases is {} of CO2.",
        format_kg(total)
    );

    // First receipt wins on ties.
    let biggest = receipts
        .iter()
        .reduce(|best, r| if r.carbon_footprint > best.carbon_footprint { r } else { best });

    let sources = match biggest {
        Some(receipt) => {
            text.push_str(&format!(
                " Your biggest contributor was the {} at {}.",
                contributor_label(receipt),
                format_kg(receipt.carbon_footprint)
            ));
            vec![receipt.receipt_id.clone()]
        }
        None => Vec::new(),
    };

    Answer::new(text, sources)
}

/// Gear is named by the activity it was tagged for ("REI hiking gear"),
/// anything else as "<merchant> purchase".
fn contributor_label(receipt: &Receipt) -> String {
    let is_gear = receipt
        .items
        .iter()
        .any(|item| item.category.to_lowercase().ends_with("gear"));
    if !is_gear {
        return format!("{} purchase", receipt.merchant);
    }
    match receipt.tags.iter().find(|tag| !tag.ends_with("gear")) {
        Some(activity) => format!("{} {activity} gear", receipt.merchant),
        None => format!("{} gear", receipt.merchant),
    }
}

fn monthly_spend(receipts: &[Receipt], month: YearMonth) -> Answer {
    let in_month: Vec<&Receipt> = receipts
        .iter()
        .filter(|r| r.falls_in_month(month.year, month.month))
        .collect();

    if in_month.is_empty() {
        return Answer::new(
            format!(
                "You haven't recorded any purchases in {}.",
                month.month_name()
            ),
            Vec::new(),
        );
    }

    let total: f64 = in_month.iter().map(|r| r.total).sum();

    let mut merchants: Vec<&str> = Vec::with_capacity(in_month.len());
    for receipt in &in_month {
        if !merchants.contains(&receipt.merchant.as_str()) {
            merchants.push(&receipt.merchant);
        }
    }

    let purchases = if in_month.len() == 1 {
        "1 purchase".to_string()
    } else {
        format!("{} purchases", in_month.len())
    };

    let text = format!(
        "You've spent {} in {} across {purchases} ({}).",
        format_money(total),
        month.month_name(),
        join_names(&merchants)
    );
    let sources = in_month.iter().map(|r| r.receipt_id.clone()).collect();

    Answer::new(text, sources)
}

/// A named (trigger, responder) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub trigger: Trigger,
    pub responder: Responder,
}

impl Rule {
    #[must_use]
    pub fn new(name: impl Into<String>, trigger: Trigger, responder: Responder) -> Self {
        Self {
            name: name.into(),
            trigger,
            responder,
        }
    }
}

/// The built-in rule table, highest priority first.
#[must_use]
pub fn default_rules(spend_month: YearMonth) -> Vec<Rule> {
    vec![
        Rule::new(
            "jacket_purchase",
            Trigger::all_of(&["when", "jacket"]),
            Responder::fixed(
                "You bought a Better Sweater Jacket from Patagonia on November 10th for $89.99 at their Boulder location.",
                &["rec_001"],
            ),
        ),
        Rule::new(
            "restaurant_spending",
            Trigger::any_of(&["restaurant", "dining"]),
            Responder::fixed(
                "You've spent $67.50 on restaurants in November. You visited The Kitchen on November 12th for dinner.",
                &["rec_002"],
            ),
        ),
        Rule::new(
            "outdoor_gear",
            Trigger::any_of(&["outdoor", "hiking"]),
            Responder::fixed(
                "You've made 2 outdoor gear purchases recently:\n\
                 • REI on October 28: Hiking Boots ($129.99), Wool Socks ($18.99), Water Bottle ($24.99) - Total: $156.78\n\
                 • Patagonia on November 10: Better Sweater Jacket ($89.99)",
                &["rec_001", "rec_003"],
            ),
        ),
        Rule::new(
            "carbon_footprint",
            Trigger::any_of(&["carbon", "footprint"]),
            Responder::CarbonTotal,
        ),
        Rule::new(
            "monthly_spend",
            Trigger::all_of(&["spend", "month"]),
            Responder::MonthlySpend(spend_month),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::month::DEFAULT_SPEND_MONTH;
    use receipt_core::sample_receipts;

    #[test]
    fn all_of_needs_every_keyword() {
        let trigger = Trigger::all_of(&["when", "jacket"]);
        assert!(trigger.matches("when did i buy that jacket?"));
        assert!(!trigger.matches("show me the jacket"));
        assert!(Trigger::all_of(&[]).matches("anything"));
    }

    #[test]
    fn any_of_needs_one_keyword() {
        let trigger = Trigger::any_of(&["restaurant", "dining"]);
        assert!(trigger.matches("fine dining"));
        assert!(trigger.matches("restaurants"));
        assert!(!trigger.matches("groceries"));
        assert!(!Trigger::any_of(&[]).matches("anything"));
    }

    #[test]
    fn keywords_are_case_folded() {
        let trigger = Trigger::any_of(&["Carbon", "FootPrint"]);
        assert_eq!(trigger.keywords(), ["carbon", "footprint"]);
        assert!(trigger.matches("my carbon"));
        assert!(trigger.matches("what's my footprint?"));
        assert_eq!(Trigger::any_of(&["CARBON"]), Trigger::any_of(&["carbon"]));
        assert_ne!(Trigger::any_of(&["carbon"]), Trigger::all_of(&["carbon"]));
    }

    #[test]
    fn spent_is_not_spend() {
        let trigger = Trigger::all_of(&["spend", "month"]);
        assert!(!trigger.matches("how much have i spent this month?"));
        assert!(trigger.matches("how much did i spend this month?"));
    }

    #[test]
    fn trigger_display() {
        assert_eq!(
            Trigger::all_of(&["when", "jacket"]).to_string(),
            "\"when\" AND \"jacket\""
        );
        assert_eq!(
            Trigger::any_of(&["carbon", "footprint"]).to_string(),
            "\"carbon\" OR \"footprint\""
        );
    }

    #[test]
    fn default_rule_order() {
        let names: Vec<_> = default_rules(DEFAULT_SPEND_MONTH)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            [
                "jacket_purchase",
                "restaurant_spending",
                "outdoor_gear",
                "carbon_footprint",
                "monthly_spend"
            ]
        );
    }

    #[test]
    fn carbon_total_sums_everything() {
        let answer = Responder::CarbonTotal.respond(&sample_receipts());
        assert!(answer.text.contains("94.1kg"));
        assert_eq!(
            answer.text,
            "Your total carbon footprint from tracked purchases is 94.1kg of CO2. \
             Your biggest contributor was the REI hiking gear at 45.2kg."
        );
        assert_eq!(answer.source_receipt_ids, ["rec_003"]);
    }

    #[test]
    fn contributor_label_by_category_and_tags() {
        let mut receipts = sample_receipts();
        assert_eq!(contributor_label(&receipts[2]), "REI hiking gear");
        assert_eq!(contributor_label(&receipts[1]), "The Kitchen purchase");

        receipts[2].tags.retain(|tag| tag.ends_with("gear"));
        assert_eq!(contributor_label(&receipts[2]), "REI gear");
    }

    #[test]
    fn carbon_total_on_empty_store() {
        let answer = Responder::CarbonTotal.respond(&[]);
        assert!(answer.text.contains("0.0kg"));
        assert!(answer.source_receipt_ids.is_empty());
    }

    #[test]
    fn carbon_tie_cites_first() {
        let mut receipts = sample_receipts();
        receipts[4].carbon_footprint = 45.2;
        let answer = Responder::CarbonTotal.respond(&receipts);
        assert_eq!(answer.source_receipt_ids, ["rec_003"]);
    }

    #[test]
    fn monthly_spend_for_november() {
        let answer = Responder::MonthlySpend(DEFAULT_SPEND_MONTH).respond(&sample_receipts());
        assert_eq!(
            answer.text,
            "You've spent $405.01 in November across 4 purchases (Patagonia, The Kitchen, Starbucks, and Target)."
        );
        assert_eq!(
            answer.source_receipt_ids,
            ["rec_001", "rec_002", "rec_004", "rec_005"]
        );
    }

    #[test]
    fn monthly_spend_for_october() {
        let october = YearMonth {
            year: 2024,
            month: 10,
        };
        let answer = Responder::MonthlySpend(october).respond(&sample_receipts());
        assert_eq!(
            answer.text,
            "You've spent $156.78 in October across 1 purchase (REI)."
        );
        assert_eq!(answer.source_receipt_ids, ["rec_003"]);
    }

    #[test]
    fn monthly_spend_with_no_purchases() {
        let answer = Responder::MonthlySpend(YearMonth {
            year: 2023,
            month: 1,
        })
        .respond(&sample_receipts());
        assert_eq!(answer.text, "You haven't recorded any purchases in January.");
        assert!(answer.source_receipt_ids.is_empty());
    }

    #[test]
    fn static_responder_ignores_receipts() {
        let responder = Responder::fixed("canned", &["rec_009"]);
        let answer = responder.respond(&[]);
        assert_eq!(answer, Answer::new("canned", vec!["rec_009".to_string()]));
    }
}
