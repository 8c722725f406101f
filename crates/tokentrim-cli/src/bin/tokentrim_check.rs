// tokentrim-check: Check spelling of words.
//
// Reads words from the arguments, or from stdin (one per line) when none
// are given. Prints:
//   C: word    (correct)
//   W: word    (misspelled)
//   S: cand    (candidate for the previous misspelled word)
//
// Usage:
//   tokentrim-check [-d DICT_PATH] [OPTIONS] [WORD...]

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use tokentrim_cli::{EngineArgs, OutputFormat};
use tokentrim_en::WordCheck;

#[derive(Debug, Parser)]
#[command(name = "tokentrim-check", version, about = "Check spelling of words")]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Do not print candidates for misspelled words
    #[arg(short = 'q', long)]
    no_suggest: bool,

    /// Words to check (reads stdin when omitted)
    words: Vec<String>,
}

#[derive(Serialize)]
struct Checked<'a> {
    word: &'a str,
    #[serde(flatten)]
    check: WordCheck,
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
    let engine = tokentrim_cli::load_engine(&cli.engine)?;
    engine.initialize().await?;

    let words = if cli.words.is_empty() {
        tokentrim_cli::read_input(&[])?
    } else {
        cli.words.join("\n")
    };

    let mut results = Vec::new();
    for word in tokentrim_cli::input_lines(&words) {
        let check = match engine.check_word(word).await {
            Ok(check) => check,
            Err(err) => {
                tracing::warn!(word, error = %err, "skipping word");
                continue;
            }
        };
        results.push(Checked { word, check });
    }

    if cli.format == OutputFormat::Json {
        return tokentrim_cli::print_json(&results);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for Checked { word, check } in &results {
        if check.correct {
            writeln!(out, "C: {word}")?;
            continue;
        }
        writeln!(out, "W: {word}")?;
        if !cli.no_suggest {
            for candidate in &check.suggestions {
                writeln!(out, "S: {candidate}")?;
            }
        }
    }
    Ok(())
}
