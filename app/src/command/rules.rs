use receipt_config::Config;
use receipt_query::Rule;

/// Strategy for printing the rule table in the order it is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct RulesStrategy;

impl super::CommandStrategy for RulesStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        print!("{}", render_rules(&config.rules()));
        Ok(())
    }
}

fn render_rules(rules: &[Rule]) -> String {
    let mut out: String = rules
        .iter()
        .enumerate()
        .map(|(position, rule)| format!("{}. {:<20} {}\n", position + 1, rule.name, rule.trigger))
        .collect();
    out.push_str(&format!("-. {:<20} (no match: help text)\n", "default"));
    out
}
