// Entity guard CLI: normalize markdown on the way to an entity-fragile
// renderer. Reads a file (or stdin), writes the normalized markdown to
// stdout (or a file).

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use markdown_entity_guard::{NormalizeOptions, normalize_entities_with_options};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input markdown file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the pass that terminates unterminated legacy references.
    #[arg(long)]
    no_terminate_legacy: bool,

    /// Skip the pass that escapes terminated-but-unknown references.
    #[arg(long)]
    no_escape_unknown: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();

    let markdown = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read markdown from stdin")?;
            buf
        }
    };

    let options = NormalizeOptions {
        terminate_legacy: !args.no_terminate_legacy,
        escape_unknown: !args.no_escape_unknown,
    };
    let normalized = normalize_entities_with_options(&markdown, &options);

    match &args.out {
        Some(path) => fs::write(path, normalized)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(normalized.as_bytes())
                .context("failed to write normalized markdown to stdout")?;
        }
    }

    Ok(())
}
