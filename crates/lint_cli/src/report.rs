//! Text reporter: renders diagnostics to a terminal, colored by severity
//! (spec §1 "the reporter/formatter that renders diagnostics" — explicitly
//! out of scope for the core; this is the CLI's own minimal one, in the
//! spirit of the teacher's `colored`/`termcolor`-based console output).

use colored::{ColoredString, Colorize};
use lint_diagnostics::{Diagnostic, Severity, SourceFile};
use std::path::{Path, PathBuf};

pub fn report_file(path: &Path, source: &SourceFile, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        report_one(path, source, diagnostic);
    }
}

fn report_one(path: &Path, source: &SourceFile, diagnostic: &Diagnostic) {
    let label = severity_label(diagnostic.severity);
    let location = diagnostic
        .primary_span()
        .map(|span| {
            let (line, col) = source.line_column(span.start);
            format!("{}:{}:{}", path.display(), line, col)
        })
        .unwrap_or_else(|| path.display().to_string());

    println!(
        "{location}: {label} [{}]: {}",
        diagnostic.code.as_str().bold(),
        diagnostic.message
    );

    for span in &diagnostic.spans {
        let (line, col) = source.line_column(span.span.start);
        let marker = if span.primary { "-->" } else { "  |" };
        match &span.label {
            Some(label) => println!("  {marker} {}:{}:{}: {}", path.display(), line, col, label),
            None => println!("  {marker} {}:{}:{}", path.display(), line, col),
        }
    }

    if let Some(help) = &diagnostic.help {
        println!("  {} {}", "help:".green().bold(), help);
    }
    println!();
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Notice => "notice".blue().bold(),
        Severity::Off => "off".normal(),
    }
}

/// Aggregate counts across every file's diagnostics, for the final summary
/// line and the process exit code.
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    pub notices: usize,
}

impl Summary {
    pub fn from_reports(reports: &[(PathBuf, Vec<Diagnostic>)]) -> Self {
        let mut summary = Summary {
            files: reports.len(),
            errors: 0,
            warnings: 0,
            notices: 0,
        };
        for (_, diagnostics) in reports {
            for diagnostic in diagnostics {
                match diagnostic.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                    Severity::Notice => summary.notices += 1,
                    Severity::Off => {}
                }
            }
        }
        summary
    }

    pub fn print(&self) {
        println!(
            "{} file(s) linted: {} error(s), {} warning(s), {} notice(s)",
            self.files, self.errors, self.warnings, self.notices
        );
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_diagnostics::Severity;

    #[test]
    fn summary_counts_by_severity() {
        let reports = vec![
            (
                PathBuf::from("a.zig"),
                vec![
                    Diagnostic::error("unresolved-reference", "oops"),
                    Diagnostic::warning("unused-symbol", "unused"),
                ],
            ),
            (
                PathBuf::from("b.zig"),
                vec![Diagnostic::notice("missing-doc-comment", "add docs")],
            ),
        ];
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.files, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.notices, 1);
        assert!(summary.has_errors());
    }

    #[test]
    fn clean_run_has_no_errors() {
        let summary = Summary::from_reports(&[]);
        assert!(!summary.has_errors());
    }

    #[test]
    fn off_severity_never_counted() {
        let reports = vec![(
            PathBuf::from("a.zig"),
            vec![Diagnostic::new("x", Severity::Off, "should not happen")],
        )];
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.errors + summary.warnings + summary.notices, 0);
    }
}
