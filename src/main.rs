//! `phpdoc-source`: normalise a PHPDoc block from a file or stdin.
//!
//! Reads docblock text, parses it and prints either the canonical
//! rendering or the structured form as JSON.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phpdoc_source::DocComment;

#[derive(Parser, Debug)]
#[command(name = "phpdoc-source", version, about)]
struct Cli {
    /// File holding the docblock.  Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Print the parsed comment as JSON instead of re-rendering it.
    #[arg(long)]
    json: bool,

    /// Skip tags with missing fields instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Increase log verbosity (-v, -vv).  `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = read_input(cli.file.as_ref())?;
    let comment = if cli.lenient {
        DocComment::from_string_lenient(&input)
    } else {
        DocComment::from_string(&input).context("failed to parse docblock")?
    };
    tracing::debug!(
        params = comment.params().len(),
        throws = comment.throws().len(),
        "parsed docblock"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        print!("{}", comment.to_source());
    }
    Ok(())
}
