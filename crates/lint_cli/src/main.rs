//! CLI entry point (spec §1: "the command-line front-end, filesystem
//! traversal, and concurrent multi-file scheduling ... explicitly out of
//! scope" for the engine specification — this binary is the thin
//! collaborator that exercises `lint_core`/`lint_semantic` end-to-end).

mod cli;
mod config;
mod discover;
mod report;
mod runner;

use clap::Parser;
use cli::Args;
use lint_core::config::LintConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let jobs = args.jobs.unwrap_or_else(num_cpus::get);
    if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global() {
        tracing::warn!("failed to configure {jobs}-thread pool, using default: {e}");
    }

    let config = match &args.config {
        Some(path) => match config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => LintConfig::new(),
    };

    let files = match discover::discover(&args.inputs, &config.ignore_patterns) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if files.is_empty() {
        eprintln!("no matching files found");
        return ExitCode::SUCCESS;
    }

    tracing::info!(count = files.len(), "discovered files to lint");

    let reports = runner::lint_files(&files, &config, args.fix_enabled());

    let mut summary_inputs = Vec::with_capacity(reports.len());
    let mut had_io_error = false;

    for (path, result) in reports {
        match result {
            Ok(file_report) => {
                if !args.quiet {
                    report::report_file(&path, &file_report.source, &file_report.diagnostics);
                }
                if args.fix_enabled() && !file_report.fix_plan.is_empty() {
                    apply_fix(&path, &file_report.source, &file_report.fix_plan, args.fix_dangerous);
                }
                summary_inputs.push((path, file_report.diagnostics));
            }
            Err(e) => {
                had_io_error = true;
                eprintln!("error: {}: {}", path.display(), e);
            }
        }
    }

    let summary = report::Summary::from_reports(&summary_inputs);
    if !args.quiet || had_io_error || summary.has_errors() {
        summary.print();
    }

    if had_io_error || summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn apply_fix(
    path: &std::path::Path,
    source: &lint_diagnostics::SourceFile,
    plan: &lint_core::fixer::FixPlan,
    include_dangerous: bool,
) {
    match plan.apply(source.text(), include_dangerous) {
        Ok(fixed) if fixed != source.text() => {
            if let Err(e) = std::fs::write(path, fixed) {
                eprintln!("error: failed to write fixes to {}: {}", path.display(), e);
            } else {
                tracing::info!(path = %path.display(), "applied fixes");
            }
        }
        Ok(_) => {}
        Err(e) => eprintln!("error: {}: {}", path.display(), e),
    }
}
