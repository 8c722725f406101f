// tokentrim-instruct: Append an instruction asking for a concise answer.
//
// Usage:
//   tokentrim-instruct [-s STRATEGY] [-p POSITION] [OPTIONS] [PROMPT...]
//
// Strategies: auto, simple, detailed, format, context, token, tldr.
// With --batch, every non-empty stdin line is a separate prompt.

use std::io::{self, Write};

use clap::Parser;
use tokentrim_en::{InstructionSpec, optimization_stats, optimize_batch};

#[derive(Debug, Parser)]
#[command(name = "tokentrim-instruct", version, about = "Ask the model for a concise answer")]
struct Cli {
    /// Instruction strategy
    #[arg(short, long, default_value = "auto")]
    strategy: String,

    /// Where to place the instruction: start, end or both
    #[arg(short, long, default_value = "end")]
    position: String,

    /// Answer shape for the format strategy (bullets, list, summary, brief, outline, table)
    #[arg(long)]
    format: Option<String>,

    /// Conciseness for the context strategy (mild, moderate, aggressive)
    #[arg(long)]
    level: Option<String>,

    /// Word limit for the detailed strategy
    #[arg(long)]
    max_words: Option<u32>,

    /// Sentence limit for the detailed strategy
    #[arg(long)]
    max_sentences: Option<u32>,

    /// Treat each input line as its own prompt
    #[arg(short, long)]
    batch: bool,

    /// Print size statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Prompt text (reads stdin when omitted)
    prompt: Vec<String>,
}

impl Cli {
    fn spec(&self) -> InstructionSpec {
        InstructionSpec {
            strategy: Some(self.strategy.clone()),
            position: Some(self.position.clone()),
            max_words: self.max_words,
            max_sentences: self.max_sentences,
            format: self.format.clone(),
            level: self.level.clone(),
            ..InstructionSpec::default()
        }
    }
}

fn main() {
    tokentrim_cli::init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tokentrim_cli::fatal(err);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let spec = cli.spec();
    let text = tokentrim_cli::read_input(&cli.prompt)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.batch {
        let prompts: Vec<&str> = tokentrim_cli::input_lines(&text).collect();
        let optimized = optimize_batch(&prompts, spec.strategy(), spec.position());
        for line in &optimized {
            writeln!(out, "{}", line.replace('\n', " "))?;
        }
        return Ok(());
    }

    let prompt = text.trim_end_matches('\n');
    let optimized = spec.apply(prompt);
    writeln!(out, "{optimized}")?;
    if cli.stats {
        let stats = optimization_stats(prompt, &optimized);
        eprintln!(
            "chars: {} -> {} (+{}, +{:.1}%)",
            stats.original_length, stats.optimized_length, stats.added_length, stats.added_percent
        );
    }
    Ok(())
}
