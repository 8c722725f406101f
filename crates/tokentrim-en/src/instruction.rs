// Output-instruction optimizer: asks the model for a shorter answer

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the instruction goes relative to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Start,
    #[default]
    End,
    Both,
}

/// Requested answer shape for `OutputStrategy::Format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    Bullets,
    List,
    Summary,
    #[default]
    Brief,
    Outline,
    Table,
}

impl ResponseFormat {
    pub fn instruction(self) -> &'static str {
        match self {
            ResponseFormat::Bullets => "Respond with concise bullet points only. No paragraphs.",
            ResponseFormat::List => {
                "Provide a brief numbered or bulleted list. Keep each item short."
            }
            ResponseFormat::Summary => "Provide a brief summary in 2-3 sentences maximum.",
            ResponseFormat::Brief => {
                "Keep your response brief and focused. Avoid lengthy explanations."
            }
            ResponseFormat::Outline => {
                "Provide a concise outline format. Use headings and brief points only."
            }
            ResponseFormat::Table => {
                "If possible, format your response as a concise table or structured list."
            }
        }
    }
}

/// How strongly `OutputStrategy::Context` asks for brevity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcisenessLevel {
    Mild,
    #[default]
    Moderate,
    Aggressive,
}

impl ConcisenessLevel {
    pub fn instruction(self) -> &'static str {
        match self {
            ConcisenessLevel::Mild => "Please be somewhat concise in your response.",
            ConcisenessLevel::Moderate => {
                "Please provide a concise response. Focus on the key points and avoid unnecessary details."
            }
            ConcisenessLevel::Aggressive => {
                "Be extremely concise. Provide only essential information. Use the minimum words necessary to answer the question. Avoid examples, explanations, or elaboration unless absolutely necessary."
            }
        }
    }
}

/// Names that do not parse fall back to the variant's default.
macro_rules! lenient_from_str {
    ($ty:ty { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s.trim().to_ascii_lowercase().as_str() {
                    $($name => $variant,)+
                    _ => <$ty>::default(),
                })
            }
        }
    };
}

lenient_from_str!(Position {
    "start" => Position::Start,
    "end" => Position::End,
    "both" => Position::Both,
});

lenient_from_str!(ResponseFormat {
    "bullets" => ResponseFormat::Bullets,
    "list" => ResponseFormat::List,
    "summary" => ResponseFormat::Summary,
    "brief" => ResponseFormat::Brief,
    "outline" => ResponseFormat::Outline,
    "table" => ResponseFormat::Table,
});

lenient_from_str!(ConcisenessLevel {
    "mild" => ConcisenessLevel::Mild,
    "moderate" => ConcisenessLevel::Moderate,
    "aggressive" => ConcisenessLevel::Aggressive,
});

/// Which instruction to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStrategy {
    /// Pick a strategy from the prompt's length and whether it is a question.
    #[default]
    Auto,
    /// "Be concise."
    Simple,
    Detailed {
        max_words: u32,
        max_sentences: u32,
    },
    Format(ResponseFormat),
    Context(ConcisenessLevel),
    Token {
        no_examples: bool,
        no_explanations: bool,
        direct_answer: bool,
    },
    Tldr,
}

impl OutputStrategy {
    pub const DETAILED: OutputStrategy = OutputStrategy::Detailed {
        max_words: 100,
        max_sentences: 3,
    };

    pub const TOKEN: OutputStrategy = OutputStrategy::Token {
        no_examples: true,
        no_explanations: false,
        direct_answer: true,
    };

    /// Replace `Auto` with the concrete strategy chosen for `prompt`.
    pub fn resolve(self, prompt: &str) -> OutputStrategy {
        if self != OutputStrategy::Auto {
            return self;
        }
        let len = prompt.chars().count();
        if len < 50 {
            return OutputStrategy::Context(ConcisenessLevel::Moderate);
        }
        let lower = prompt.to_lowercase();
        if prompt.contains('?') || ["what", "how", "why"].iter().any(|w| lower.contains(w)) {
            return OutputStrategy::TOKEN;
        }
        if len > 500 {
            return OutputStrategy::Format(ResponseFormat::Summary);
        }
        OutputStrategy::Context(ConcisenessLevel::Moderate)
    }

    /// The instruction text of a concrete strategy.
    fn instruction(self) -> String {
        match self {
            OutputStrategy::Auto | OutputStrategy::Simple => "Be concise.".to_string(),
            OutputStrategy::Detailed {
                max_words,
                max_sentences,
            } => format!(
                "Please provide a concise response. Limit your answer to {max_words} words or {max_sentences} sentences maximum. Be direct and avoid unnecessary elaboration."
            ),
            OutputStrategy::Format(format) => format.instruction().to_string(),
            OutputStrategy::Context(level) => level.instruction().to_string(),
            OutputStrategy::Token {
                no_examples,
                no_explanations,
                direct_answer,
            } => {
                let mut parts = Vec::with_capacity(4);
                if direct_answer {
                    parts.push("Provide a direct answer");
                }
                if no_examples {
                    parts.push("no examples");
                }
                if no_explanations {
                    parts.push("minimal explanation");
                }
                parts.push("be concise");
                format!("Please {}.", parts.join(", "))
            }
            OutputStrategy::Tldr => "TL;DR: Provide a very brief summary or answer.".to_string(),
        }
    }
}

/// Add an instruction asking for a concise answer to `prompt`.
///
/// `Simple` joins instruction and prompt with a space, every other strategy
/// with a blank line. Empty prompts are returned unchanged.
pub fn optimize_for_concise_output(
    prompt: &str,
    strategy: OutputStrategy,
    position: Position,
) -> String {
    if prompt.is_empty() {
        return String::new();
    }
    let strategy = strategy.resolve(prompt);
    let instruction = strategy.instruction();
    let sep = if strategy == OutputStrategy::Simple {
        " "
    } else {
        "\n\n"
    };
    match position {
        Position::Start => format!("{instruction}{sep}{prompt}"),
        Position::End => format!("{prompt}{sep}{instruction}"),
        Position::Both => format!("{instruction}{sep}{prompt}{sep}{instruction}"),
    }
}

/// Apply the optimizer to each prompt.
pub fn optimize_batch<S: AsRef<str>>(
    prompts: &[S],
    strategy: OutputStrategy,
    position: Position,
) -> Vec<String> {
    prompts
        .iter()
        .map(|p| optimize_for_concise_output(p.as_ref(), strategy, position))
        .collect()
}

/// How much an optimized prompt grew.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationStats {
    pub original_length: usize,
    pub optimized_length: usize,
    pub added_length: i64,
    pub added_percent: f64,
    pub instruction_added: bool,
}

pub fn optimization_stats(original: &str, optimized: &str) -> OptimizationStats {
    let original_length = original.chars().count();
    let optimized_length = optimized.chars().count();
    let added_length = optimized_length as i64 - original_length as i64;
    let added_percent = if original_length == 0 {
        0.0
    } else {
        (added_length as f64 / original_length as f64 * 1000.0).round() / 10.0
    };
    OptimizationStats {
        original_length,
        optimized_length,
        added_length,
        added_percent,
        instruction_added: added_length > 0,
    }
}

/// Loosely typed instruction options, as sent by scripts and config files:
/// `{"strategy": "token", "position": "start", "noExamples": false}`.
///
/// Unknown names fall back to defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstructionSpec {
    pub strategy: Option<String>,
    pub position: Option<String>,
    pub max_words: Option<u32>,
    pub max_sentences: Option<u32>,
    pub format: Option<String>,
    pub level: Option<String>,
    pub no_examples: Option<bool>,
    pub no_explanations: Option<bool>,
    pub direct_answer: Option<bool>,
}

fn parse_or_default<T: FromStr + Default>(value: &Option<String>) -> T {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

impl InstructionSpec {
    pub fn position(&self) -> Position {
        parse_or_default(&self.position)
    }

    pub fn strategy(&self) -> OutputStrategy {
        match self.strategy.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("auto") => OutputStrategy::Auto,
            Some("detailed") => OutputStrategy::Detailed {
                max_words: self.max_words.unwrap_or(100),
                max_sentences: self.max_sentences.unwrap_or(3),
            },
            Some("format") => OutputStrategy::Format(parse_or_default(&self.format)),
            Some("context") => OutputStrategy::Context(parse_or_default(&self.level)),
            Some("token") => OutputStrategy::Token {
                no_examples: self.no_examples.unwrap_or(true),
                no_explanations: self.no_explanations.unwrap_or(false),
                direct_answer: self.direct_answer.unwrap_or(true),
            },
            Some("tldr") => OutputStrategy::Tldr,
            Some(_) => OutputStrategy::Simple,
        }
    }

    pub fn apply(&self, prompt: &str) -> String {
        optimize_for_concise_output(prompt, self.strategy(), self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHORT: &str = "Summarize the report";

    #[test]
    fn simple_positions() {
        let s = OutputStrategy::Simple;
        assert_eq!(
            optimize_for_concise_output(SHORT, s, Position::End),
            "Summarize the report Be concise."
        );
        assert_eq!(
            optimize_for_concise_output(SHORT, s, Position::Start),
            "Be concise. Summarize the report"
        );
        assert_eq!(
            optimize_for_concise_output(SHORT, s, Position::Both),
            "Be concise. Summarize the report Be concise."
        );
    }

    #[test]
    fn detailed_uses_limits() {
        let out = optimize_for_concise_output(SHORT, OutputStrategy::DETAILED, Position::End);
        assert!(out.starts_with("Summarize the report\n\nPlease provide a concise response."));
        assert!(out.contains("Limit your answer to 100 words or 3 sentences maximum."));
    }

    #[test]
    fn token_parts() {
        let out = optimize_for_concise_output(SHORT, OutputStrategy::TOKEN, Position::Start);
        assert_eq!(
            out,
            "Please Provide a direct answer, no examples, be concise.\n\nSummarize the report"
        );
        let minimal = OutputStrategy::Token {
            no_examples: false,
            no_explanations: true,
            direct_answer: false,
        };
        assert!(optimize_for_concise_output(SHORT, minimal, Position::End)
            .ends_with("Please minimal explanation, be concise."));
    }

    #[test]
    fn auto_short_prompt_gets_moderate_context() {
        let out = optimize_for_concise_output(SHORT, OutputStrategy::Auto, Position::End);
        assert!(out.ends_with(ConcisenessLevel::Moderate.instruction()));
    }

    #[test]
    fn auto_question_gets_token_strategy() {
        let prompt = "Could you explain how the garbage collector decides when to run";
        assert_eq!(
            OutputStrategy::Auto.resolve(prompt),
            OutputStrategy::TOKEN
        );
    }

    #[test]
    fn auto_long_prompt_gets_summary() {
        let prompt = "Lorem ipsum dolor sit amet. ".repeat(20);
        assert_eq!(
            OutputStrategy::Auto.resolve(&prompt),
            OutputStrategy::Format(ResponseFormat::Summary)
        );
        let medium = "Lorem ipsum dolor sit amet. ".repeat(3);
        assert_eq!(
            OutputStrategy::Auto.resolve(&medium),
            OutputStrategy::Context(ConcisenessLevel::Moderate)
        );
    }

    #[test]
    fn empty_prompt_is_unchanged() {
        assert_eq!(optimize_for_concise_output("", OutputStrategy::Tldr, Position::Both), "");
    }

    #[test]
    fn batch_and_stats() {
        let out = optimize_batch(&["a", "b"], OutputStrategy::Tldr, Position::End);
        assert_eq!(out.len(), 2);
        assert!(out[1].starts_with("b\n\nTL;DR"));

        let stats = optimization_stats("abcd", "abcdef");
        assert_eq!(stats.added_length, 2);
        assert_eq!(stats.added_percent, 50.0);
        assert!(stats.instruction_added);
        assert!(!optimization_stats("", "").instruction_added);
    }

    #[test]
    fn spec_parsing_falls_back() {
        let spec: InstructionSpec = serde_json::from_str(
            r#"{"strategy": "format", "format": "haiku", "position": "BOTH"}"#,
        )
        .unwrap();
        assert_eq!(spec.strategy(), OutputStrategy::Format(ResponseFormat::Brief));
        assert_eq!(spec.position(), Position::Both);

        let unknown: InstructionSpec =
            serde_json::from_str(r#"{"strategy": "shout"}"#).unwrap();
        assert_eq!(unknown.strategy(), OutputStrategy::Simple);
        assert_eq!(InstructionSpec::default().strategy(), OutputStrategy::Auto);
    }

    #[test]
    fn spec_token_options() {
        let spec: InstructionSpec =
            serde_json::from_str(r#"{"strategy": "token", "noExamples": false}"#).unwrap();
        assert_eq!(
            spec.strategy(),
            OutputStrategy::Token {
                no_examples: false,
                no_explanations: false,
                direct_answer: true,
            }
        );
        assert_eq!(spec.apply(""), "");
    }
}
