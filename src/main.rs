//! Rewrite the method docblocks of `ResolutionPipeline.php`.
//!
//! Each configured method has its `/** ... */` comment replaced by a
//! hand-written block while the declaration header is kept:
//!
//! 1. **Read** the target file as UTF-8
//! 2. **Rewrite** each docblock in table order, stopping at the first miss
//! 3. **Write** the result back through a temp file + rename
//!
//! Nothing is written unless every request matched.

mod error;
mod fsio;
mod logging;
mod requests;
mod rewrite;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "docblock-rewriter",
    about = "Replace method docblocks in ResolutionPipeline.php"
)]
struct Cli {
    /// Target file
    #[arg(short = 'f', long = "file", default_value = requests::DEFAULT_TARGET)]
    file: PathBuf,

    /// Print the rewritten file to stdout instead of writing it
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Fail when a method has more than one matching docblock
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Read, rewrite and (unless `dry_run`) write back one file.
///
/// Returns the rewritten text.
fn rewrite_file(
    path: &Path,
    requests: &[rewrite::ReplacementRequest],
    options: &rewrite::RewriteOptions,
    dry_run: bool,
) -> Result<String> {
    let source = fsio::read_source(path)?;
    info!(path = %path.display(), bytes = source.len(), "read target");

    let rewritten = rewrite::run(requests, &source, options)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;
    info!(requests = requests.len(), "all docblocks replaced");

    if !dry_run {
        fsio::write_atomic(path, &rewritten)?;
        info!(path = %path.display(), "wrote target");
    }
    Ok(rewritten)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = rewrite::RewriteOptions { strict: cli.strict };
    let result = rewrite_file(&cli.file, &requests::RESOLUTION_PIPELINE, &options, cli.dry_run)?;

    if cli.dry_run {
        io::stdout()
            .write_all(result.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
