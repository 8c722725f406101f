// tokentrim-concise: Rewrite verbose phrasing.
//
// Prints the concise rewrite of the input. With --stats, also prints the
// character and word reduction to stderr.
//
// Usage:
//   tokentrim-concise [OPTIONS] [TEXT...]

use clap::Parser;
use serde::Serialize;
use tokentrim_cli::OutputFormat;
use tokentrim_en::{ConciseOptions, ReductionStats, TokenCounter, make_concise, reduction_stats};

#[derive(Debug, Parser)]
#[command(name = "tokentrim-concise", version, about = "Rewrite verbose phrasing concisely")]
struct Cli {
    /// Also strip hedges and qualifiers
    #[arg(short, long)]
    aggressive: bool,

    /// Keep filler phrases
    #[arg(long)]
    keep_fillers: bool,

    /// Skip sentence simplification
    #[arg(long)]
    no_simplify: bool,

    /// Print reduction statistics
    #[arg(short, long)]
    stats: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Text to rewrite (reads stdin when omitted)
    text: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    concise: String,
    tokens_saved: i64,
    #[serde(flatten)]
    stats: ReductionStats,
}

fn main() {
    tokentrim_cli::init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tokentrim_cli::fatal(err);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = ConciseOptions {
        remove_fillers: !cli.keep_fillers,
        simplify_sentences: !cli.no_simplify,
        aggressive: cli.aggressive,
    };
    let text = tokentrim_cli::read_input(&cli.text)?;
    let concise = make_concise(&text, &options);
    let stats = reduction_stats(&text, &concise);
    let tokens_saved = TokenCounter::o200k()?.savings(&text, &concise);

    if cli.format == OutputFormat::Json {
        return tokentrim_cli::print_json(&Output {
            concise,
            tokens_saved,
            stats,
        });
    }

    println!("{concise}");
    if cli.stats {
        eprintln!(
            "chars: {} -> {} (-{:.1}%), words: -{} (-{:.1}%), tokens saved: {tokens_saved}",
            stats.original_length,
            stats.concise_length,
            stats.reduction_percent,
            stats.word_reduction,
            stats.word_reduction_percent,
        );
    }
    Ok(())
}
