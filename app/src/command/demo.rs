use receipt_config::Config;
use receipt_core::ReceiptRepo;
use receipt_query::RuleBasedAnswerer;

/// Questions fed through the answerer by `demo`.
pub const DEMO_QUESTIONS: [&str; 4] = [
    "When did I buy that jacket?",
    "How much have I spent this month?",
    "What's my carbon footprint?",
    "Show me restaurant spending",
];

/// Strategy for the scripted demo run.
///
/// Prints each demo question with its answer and, when the answer cites
/// receipts, the comma-joined source ids.
#[derive(Debug, Clone, Copy)]
pub struct DemoStrategy;

impl super::CommandStrategy for DemoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        let answerer = super::build_answerer(&config)?;
        print!("{}", render_demo(&answerer, &DEMO_QUESTIONS));
        Ok(())
    }
}

pub fn render_demo<R: ReceiptRepo>(answerer: &RuleBasedAnswerer<R>, questions: &[&str]) -> String {
    let mut out = format!("Receipt Memory - Test Queries\n{}\n\n", "=".repeat(50));

    for question in questions {
        let answer = answerer.answer(question);
        out.push_str(&format!("Q: {question}\nA: {}\n", answer.text));
        if answer.has_sources() {
            out.push_str(&format!("   Sources: {}\n", answer.sources_line()));
        }
        out.push('\n');
    }

    out
}
