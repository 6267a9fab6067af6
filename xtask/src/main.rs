//! Project automation: man pages and shell completions for `remarq`.
//!
//! Run with `cargo xtask <task>` (or `cargo run -p xtask -- <task>`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for remarq")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for remarq and each of its subcommands.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
        /// Only this shell (default: all supported shells).
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = remarq::command();
    clap_mangen::generate_to(cmd, out_dir)
        .with_context(|| format!("failed to write man pages to {}", out_dir.display()))?;

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shell: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let shells = shell.map_or_else(
        || vec![Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh],
        |s| vec![s],
    );

    let mut cmd = remarq::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "remarq", out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
