use receipt_config::Config;
use receipt_query::Answer;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub config: Config,
    /// Question words, joined with single spaces.
    pub question: Vec<String>,
    /// Print the answer as JSON
    pub json: bool,
}

/// Strategy for answering a single question.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let answerer = super::build_answerer(&input.config)?;
        let question = input.question.join(" ");
        let answer = answerer.answer(&question);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&answer)?);
        } else {
            print!("{}", render_answer(&answer));
        }
        Ok(())
    }
}

fn render_answer(answer: &Answer) -> String {
    if answer.has_sources() {
        format!("{}\n   Sources: {}\n", answer.text, answer.sources_line())
    } else {
        format!("{}\n", answer.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_line_only_when_cited() {
        let cited = Answer::new("Found it.", vec!["rec_001".to_string()]);
        assert_eq!(render_answer(&cited), "Found it.\n   Sources: rec_001\n");
        assert_eq!(render_answer(&Answer::help()).matches("Sources").count(), 0);
    }
}
