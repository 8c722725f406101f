// tokentrim-suggest: Suggest token-saving edits for a prompt.
//
// Reads the prompt from the arguments, or from stdin when none are given,
// and prints one suggestion per line: kind, tokens saved, and the edit.
//
// Usage:
//   tokentrim-suggest [-d DICT_PATH] [OPTIONS] [TEXT...]

use std::io::{self, Write};

use clap::Parser;
use tokentrim_cli::{EngineArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "tokentrim-suggest", version, about = "Suggest token-saving edits for a prompt")]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Maximum number of distinct words to spell check
    #[arg(long, value_name = "N")]
    max_words: Option<usize>,

    /// Only report suggestions saving at least N tokens
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    min_tokens_saved: Option<i64>,

    /// Skip the spelling pass
    #[arg(long)]
    no_spellcheck: bool,

    /// Skip the phrase rewrite
    #[arg(long)]
    no_rewrite: bool,

    /// Skip politeness and adverb deletions
    #[arg(long)]
    no_deletions: bool,

    /// Prompt text (reads stdin when omitted)
    text: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tokentrim_cli::init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tokentrim_cli::fatal(err);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut engine = tokentrim_cli::load_engine(&cli.engine)?;
    if let Some(n) = cli.max_words {
        engine.set_max_words(n);
    }
    if cli.min_tokens_saved.is_some() {
        engine.set_min_tokens_saved(cli.min_tokens_saved);
    }
    if cli.no_spellcheck {
        engine.set_spellcheck(false);
    }
    if cli.no_rewrite {
        engine.set_rewrite(false);
    }
    if cli.no_deletions {
        engine.set_deletions(false);
    }

    let text = tokentrim_cli::read_input(&cli.text)?;
    let suggestions = engine.process_prompt_text(&text).await?;

    match cli.format {
        OutputFormat::Json => tokentrim_cli::print_json(&suggestions)?,
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            if suggestions.is_empty() {
                writeln!(out, "(no suggestions)")?;
            }
            for s in &suggestions {
                writeln!(out, "{}\t{:+}\t{:?} -> {:?}", s.kind, s.tokens_saved, s.before, s.after)?;
            }
            let total: i64 = suggestions.iter().map(|s| s.tokens_saved).sum();
            tracing::info!(suggestions = suggestions.len(), total, "done");
        }
    }
    Ok(())
}
