// tokentrim-cli: shared utilities for the command-line tools.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tokentrim_en::{EngineOptions, FileSource, TrimEngine};

/// Dictionary base names tried in each search directory.
const DICT_NAMES: &[&str] = &["en_US", "index"];

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tokentrim=warn";

/// Options shared by every tool that needs the dictionary.
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// Directory containing en_US.aff and en_US.dic
    #[arg(short, long, value_name = "PATH")]
    pub dict_path: Option<PathBuf>,

    /// TOML file with engine options
    #[arg(long, env = "TOKENTRIM_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Send logs to stderr, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Read engine options from a TOML file, or use the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineOptions> {
    let Some(path) = path else {
        return Ok(EngineOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let options = toml::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(options)
}

/// Locate the dictionary and build an engine configured from `args`.
pub fn load_engine(args: &EngineArgs) -> anyhow::Result<TrimEngine> {
    let options = load_config(args.config.as_deref())?;
    let source = find_dictionary(args.dict_path.as_deref())?;
    let engine = TrimEngine::with_options(source, options)?;
    Ok(engine)
}

/// Search for dictionary files.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TOKENTRIM_DICT_PATH` environment variable
/// 3. `~/.tokentrim`
/// 4. System hunspell and myspell directories
/// 5. Current working directory
pub fn find_dictionary(dict_path: Option<&Path>) -> anyhow::Result<FileSource> {
    let search_paths = build_search_paths(dict_path);
    if let Some(source) = find_in(&search_paths) {
        tracing::debug!(aff = %source.aff_path().display(), "found dictionary");
        return Ok(source);
    }
    bail!(
        "could not find {} in any of the search paths:\n{}",
        DICT_NAMES
            .iter()
            .map(|name| format!("{name}.aff"))
            .collect::<Vec<_>>()
            .join(" or "),
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// First directory holding a complete `.aff`/`.dic` pair.
pub fn find_in(dirs: &[PathBuf]) -> Option<FileSource> {
    dirs.iter().find_map(|dir| {
        DICT_NAMES.iter().find_map(|name| {
            let has_pair = dir.join(format!("{name}.aff")).is_file()
                && dir.join(format!("{name}.dic")).is_file();
            has_pair.then(|| FileSource::in_dir(dir, name))
        })
    })
}

fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
    }
    if let Ok(env_path) = std::env::var("TOKENTRIM_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        paths.push(home.join(".tokentrim"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }
    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// The text to process: the joined arguments, or all of stdin when there
/// are none.
pub fn read_input(args: &[String]) -> anyhow::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

/// Non-empty trimmed lines of `text`.
pub fn input_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Pretty-print `value` as JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print an error chain and exit with code 1.
pub fn fatal(err: anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    process::exit(1);
}
