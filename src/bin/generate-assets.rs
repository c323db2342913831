#![forbid(unsafe_code)]
//! Writes shell completions and the `dirtree(1)` man page.
//!
//! Usage: `generate-assets [OUT_DIR]` (defaults to `dist`).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use dirtree::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "dirtree";
const SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let written = write_completions(&out_dir.join("completions"))?;
    let page = write_man_page(&out_dir.join("man"))?;

    for path in written.iter().chain(std::iter::once(&page)) {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn write_completions(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;

    let mut cmd = Args::command();
    SHELLS
        .into_iter()
        .map(|shell| {
            generate_to(shell, &mut cmd, BIN_NAME, dir)
                .with_context(|| format!("failed to write {shell} completions"))
        })
        .collect()
}

fn write_man_page(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let path = dir.join(format!("{BIN_NAME}.1"));
    fs::write(&path, page).with_context(|| format!("{}: cannot write", path.display()))?;
    Ok(path)
}
