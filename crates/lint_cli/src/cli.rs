//! Command-line argument surface (spec §1: "the command-line front-end ...
//! out of scope" for the engine). `clap`'s derive API replaces the
//! teacher's `structopt` (the two merged upstream; the rest of the
//! retrieval pack's CLIs already use `clap` derive for this exact role).

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lint",
    about = "A static analysis linter for the source language",
    version
)]
pub struct Args {
    /// Files, directories, or glob patterns to lint.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Apply safe (`fix`-kind) fixes to each linted file in place.
    #[arg(long)]
    pub fix: bool,

    /// Also apply fixes marked `dangerous`. Implies `--fix`.
    #[arg(long)]
    pub fix_dangerous: bool,

    /// Suppress per-diagnostic output; print only the final summary line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Worker threads for the per-file scheduler (defaults to available
    /// parallelism, spec §5 "the CLI/front-end may run multiple files in
    /// parallel").
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,
}

impl Args {
    pub fn fix_enabled(&self) -> bool {
        self.fix || self.fix_dangerous
    }
}
