//! Error taxonomy for the semantic builder (spec §7: "Parse failure",
//! "Analysis failure").

use lint_syntax::NodeIndex;

/// An invariant violation the builder detected while walking the tree.
/// Non-recoverable: the builder returns it rather than guessing (spec
/// §4.2 "Failure isolation").
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuilderError {
    /// A node's `kind` named a family with a "full projection" but `full()`
    /// (or a direct `NodeData` match) didn't find the matching payload.
    #[error("node {node:?}: full projection mismatch ({context})")]
    FullMismatch { node: NodeIndex, context: &'static str },
    /// A construct that must carry an identifier token (e.g. a catch
    /// payload the grammar promised) didn't have one.
    #[error("node {node:?}: expected an identifier token ({context})")]
    MissingIdentifier { node: NodeIndex, context: &'static str },
}

impl BuilderError {
    pub fn full_mismatch(node: NodeIndex, context: &'static str) -> Self {
        BuilderError::FullMismatch { node, context }
    }
}

/// Top-level error from [`crate::build`] (spec §7, items 2 and 3).
///
/// - `ParseFailed`: the parser produced no usable tree at all. We treat a
///   file whose root has zero declarations despite a non-empty parse-error
///   list as "no usable tree" (our recursive-descent parser always
///   *returns* a tree, per `lint_syntax::parse`'s doc comment, so this is a
///   heuristic over that tree's shape rather than a distinct parser mode).
/// - `AnalysisFailed`: recoverable parse errors were found, or the builder
///   itself detected an invariant violation (a [`BuilderError`]). Either way
///   "any partial semantic model is discarded" (spec §7 item 3), so both
///   sources collapse into one flat message list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SemanticError {
    #[error("parser produced no usable tree ({} error(s))", .0.len())]
    ParseFailed(Vec<String>),
    #[error("analysis failed with {} error(s)", .0.len())]
    AnalysisFailed(Vec<String>),
}

impl SemanticError {
    pub fn messages(&self) -> &[String] {
        match self {
            SemanticError::ParseFailed(m) | SemanticError::AnalysisFailed(m) => m,
        }
    }
}
