//! `jsonlite`: parse a document, optionally drill into it, and print the
//! canonical rendering.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use jsonlite::{parse_document_with, ParseConfig, Value};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Document to read; standard input when omitted or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Descend into the dict entry with this key (repeatable)
    #[arg(short, long = "key", value_name = "KEY")]
    keys: Vec<String>,

    /// Reject comments and anything after the top-level value
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Print the kind of the selected value instead of rendering it
    #[arg(long, action = ArgAction::SetTrue)]
    kind: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Follow `keys` through nested dicts without inserting anything.
fn select<'a>(root: &'a Value, keys: &[String]) -> anyhow::Result<&'a Value> {
    let mut current = root;
    for (depth, key) in keys.iter().enumerate() {
        let next = current
            .get(key)
            .with_context(|| format!("cannot look up key {:?} at depth {}", key, depth))?;
        match next {
            Some(value) => current = value,
            None => bail!("key {:?} not found at depth {}", key, depth),
        }
    }
    Ok(current)
}

fn inspect(
    text: &str,
    keys: &[String],
    config: &ParseConfig,
    kind: bool,
) -> anyhow::Result<String> {
    let document = parse_document_with(text, config).context("failed to parse document")?;
    let selected = select(&document, keys)?;
    log::info!("selected {} after {} key(s)", selected.kind(), keys.len());
    Ok(if kind {
        selected.kind().to_string()
    } else {
        selected.render()
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.strict {
        true => ParseConfig::strict(),
        false => ParseConfig::new(),
    };
    let config = config.with_trace(cli.verbose >= 3);

    let text = read_input(cli.file.as_deref())?;
    println!("{}", inspect(&text, &cli.keys, &config, cli.kind)?);
    Ok(())
}
