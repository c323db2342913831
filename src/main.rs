#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(args.log_level());

    info!(path = %args.path.display(), include_files = args.include_files, "rendering tree");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dirtree::dir_tree(&mut out, &args.path, &args.tree_config())
        .context("failed to render tree")?;
    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
