//! Filesystem traversal: expand CLI path/glob arguments into a
//! deduplicated, sorted list of files to lint (spec §1 "filesystem
//! traversal ... out of scope" for the core — this is the front-end
//! boundary that feeds it files).

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The source language's file extension. The analyzed files are Zig-like
/// source (§ grammar examples throughout spec.md: `const`, `fn`, `struct`,
/// `comptime`, `@import`), so this is the extension a front-end for it
/// would recognise by default.
pub const SOURCE_EXTENSION: &str = "zig";

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}

/// Resolve `inputs` (bare paths, directories, or glob patterns) to a sorted,
/// deduplicated file list, dropping anything matching `ignore` (spec §6
/// "An ignore-patterns list (used by the front-end, not the core)").
pub fn discover(inputs: &[String], ignore: &[String]) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut files = BTreeSet::new();

    for input in inputs {
        if is_glob_pattern(input) {
            for entry in glob::glob(input).map_err(|source| DiscoverError::Glob {
                pattern: input.clone(),
                source,
            })? {
                if let Ok(path) = entry {
                    if path.is_file() {
                        files.insert(path);
                    }
                }
            }
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            for entry in walkdir::WalkDir::new(path) {
                let entry = entry.map_err(|source| DiscoverError::Walk {
                    path: input.clone(),
                    source,
                })?;
                if entry.file_type().is_file() && has_source_extension(entry.path()) {
                    files.insert(entry.into_path());
                }
            }
        } else {
            files.insert(path.to_path_buf());
        }
    }

    let ignore_globs: Vec<glob::Pattern> = ignore
        .iter()
        .filter_map(|pattern| glob::Pattern::new(pattern).ok())
        .collect();

    Ok(files
        .into_iter()
        .filter(|path| !ignore_globs.iter().any(|pattern| pattern.matches_path(path)))
        .collect())
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_explicit_file_regardless_of_extension() {
        let dir = tempdir();
        let file = dir.join("a.txt");
        fs::write(&file, "").unwrap();
        let found = discover(&[file.display().to_string()], &[]).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn walks_directory_for_source_extension_only() {
        let dir = tempdir();
        fs::write(dir.join("keep.zig"), "").unwrap();
        fs::write(dir.join("skip.txt"), "").unwrap();
        let found = discover(&[dir.display().to_string()], &[]).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("keep.zig"));
    }

    #[test]
    fn ignore_patterns_filter_matches() {
        let dir = tempdir();
        fs::write(dir.join("keep.zig"), "").unwrap();
        fs::write(dir.join("vendor_dep.zig"), "").unwrap();
        let pattern = format!("{}/vendor_*.zig", dir.display());
        let found = discover(&[dir.display().to_string()], &[pattern]).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("keep.zig"));
    }

    fn tempdir() -> PathBuf {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut dir = std::env::temp_dir();
        dir.push(format!("lint_cli_discover_test_{}_{}", std::process::id(), n));
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}
