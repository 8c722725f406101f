// tokentrim-count: Count tokens.
//
// Counts the tokens of the text given as arguments, or of stdin. With
// --lines, prints one count per input line followed by the total.
//
// Usage:
//   tokentrim-count [--encoding NAME] [--lines] [TEXT...]

use std::io::{self, Write};

use clap::Parser;
use tokentrim_en::{Encoding, TokenCounter};

#[derive(Debug, Parser)]
#[command(name = "tokentrim-count", version, about = "Count tokens of a text")]
struct Cli {
    /// Token vocabulary (o200k_base or cl100k_base)
    #[arg(short, long, default_value = "o200k_base")]
    encoding: Encoding,

    /// Print a count for each line
    #[arg(short, long)]
    lines: bool,

    /// Text to count (reads stdin when omitted)
    text: Vec<String>,
}

fn main() {
    tokentrim_cli::init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tokentrim_cli::fatal(err);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let counter = TokenCounter::new(cli.encoding)?;
    let text = tokentrim_cli::read_input(&cli.text)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.lines {
        for line in text.lines() {
            writeln!(out, "{}\t{line}", counter.count(line))?;
        }
        writeln!(out, "{}\ttotal", counter.count(&text))?;
    } else {
        writeln!(out, "{}", counter.count(&text))?;
    }
    Ok(())
}
