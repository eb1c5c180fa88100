//! In-source "disable" comment directives (spec §2 component 8, §4.3).
//!
//! Grammar, inside a comment span:
//! - `lint-disable` — disables all rules globally for the file.
//! - `lint-disable <rule>[, <rule>]*` — disables the named rules globally.
//! - `lint-disable-next-line [<rule>[, <rule>]*]` — applies to the AST
//!   nodes whose declaring line is exactly one greater than the directive's
//!   line (spec §9 open question, resolved that way).
//!
//! Placement rule (spec §4.3): global directives are recognised only before
//! the first non-doc-comment token of the file; doc comments may themselves
//! carry one. All other comments are scanned up to that point.

use lint_semantic::Semantic;
use lint_syntax::{CommentSpan, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `lint-disable` with no rule list: disable everything.
    DisableAllGlobal,
    /// `lint-disable foo, bar`: disable exactly these rules, globally.
    DisableNamedGlobal(Vec<String>),
    /// `lint-disable-next-line [foo, bar]`, anchored to the 1-based source
    /// line the comment itself starts on. An empty rule list disables
    /// every rule for the next line.
    DisableNextLine { line: u32, rules: Vec<String> },
}

/// Parse a single comment's text (without the leading `//`) as a directive,
/// if it matches the grammar at all. Returns `None` for an ordinary
/// comment.
fn parse_directive_body(body: &str, line: u32) -> Option<Directive> {
    let body = body.trim();
    if let Some(rest) = body.strip_prefix("lint-disable-next-line") {
        let rules = parse_rule_list(rest);
        return Some(Directive::DisableNextLine { line, rules });
    }
    if let Some(rest) = body.strip_prefix("lint-disable") {
        // Reject `lint-disable-` prefixes that aren't `-next-line` (e.g. a
        // typo'd directive keyword); treat as not-a-directive rather than
        // guessing.
        if rest.starts_with('-') {
            return None;
        }
        let rules = parse_rule_list(rest);
        return Some(if rules.is_empty() {
            Directive::DisableAllGlobal
        } else {
            Directive::DisableNamedGlobal(rules)
        });
    }
    None
}

fn parse_rule_list(rest: &str) -> Vec<String> {
    rest.trim()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Strip a comment span's leading `//`, `///`, or `//!` marker, returning
/// the remaining text.
fn comment_body<'s>(source: &'s str, comment: &CommentSpan) -> &'s str {
    let text = &source[comment.span.as_range()];
    text.trim_start_matches('/').trim_start_matches('!')
}

/// All directives found in `semantic`'s comments, split into the global set
/// (recognised only before the first non-doc-comment token, spec §4.3
/// "Placement rule") and the next-line set (recognised anywhere, since a
/// next-line directive is inherently positional and not file-global).
pub struct ParsedDirectives {
    pub global: Vec<Directive>,
    pub next_line: Vec<Directive>,
}

pub fn parse_directives(semantic: &Semantic) -> ParsedDirectives {
    let source = semantic.source.text();
    let tree = &semantic.tree;

    let first_non_doc_token_start = tree
        .tokens
        .iter()
        .find(|t| t.kind != TokenKind::DocComment)
        .map(|t| t.span.start)
        .unwrap_or(u32::MAX);

    let mut global = Vec::new();
    let mut next_line = Vec::new();

    for comment in &semantic.tokens_comments.comments {
        let (line, _) = semantic.source.line_column(comment.span.start);
        let body = comment_body(source, comment);
        match parse_directive_body(body, line) {
            Some(Directive::DisableNextLine { line, rules }) => {
                next_line.push(Directive::DisableNextLine { line, rules });
            }
            Some(global_directive) if comment.span.start < first_non_doc_token_start => {
                global.push(global_directive);
            }
            _ => {}
        }
    }

    ParsedDirectives { global, next_line }
}

/// Resolve the global directives into an effective decision: either "skip
/// the whole file" or "these rule names are disabled" (spec §4.6 step 1).
pub enum GlobalFilter {
    DisableAll,
    DisableNamed(Vec<String>),
}

pub fn resolve_global_filter(directives: &[Directive]) -> GlobalFilter {
    let mut named = Vec::new();
    for d in directives {
        match d {
            Directive::DisableAllGlobal => return GlobalFilter::DisableAll,
            Directive::DisableNamedGlobal(rules) => named.extend(rules.iter().cloned()),
            Directive::DisableNextLine { .. } => {}
        }
    }
    GlobalFilter::DisableNamed(named)
}

/// Does `directives` disable `rule_name` for the node whose first token
/// starts on 1-based source line `node_line`? (spec §9: "any node whose
/// first token's line is exactly one greater than the directive's line").
/// An empty rule list in a next-line directive disables every rule.
pub fn next_line_disables(directives: &[Directive], node_line: u32, rule_name: &str) -> bool {
    directives.iter().any(|d| match d {
        Directive::DisableNextLine { line, rules } => {
            node_line == line + 1 && (rules.is_empty() || rules.iter().any(|r| r == rule_name))
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_disable_all() {
        assert_eq!(
            parse_directive_body("lint-disable", 1),
            Some(Directive::DisableAllGlobal)
        );
    }

    #[test]
    fn global_disable_named() {
        assert_eq!(
            parse_directive_body("lint-disable unused-symbol, shadowed-parameter", 1),
            Some(Directive::DisableNamedGlobal(vec![
                "unused-symbol".into(),
                "shadowed-parameter".into()
            ]))
        );
    }

    #[test]
    fn next_line_form() {
        assert_eq!(
            parse_directive_body("lint-disable-next-line unused-symbol", 4),
            Some(Directive::DisableNextLine {
                line: 4,
                rules: vec!["unused-symbol".into()]
            })
        );
    }

    #[test]
    fn ordinary_comment_is_not_a_directive() {
        assert_eq!(parse_directive_body("just a note", 1), None);
    }

    #[test]
    fn next_line_disable_matches_only_immediate_next_line() {
        let d = vec![Directive::DisableNextLine { line: 4, rules: vec![] }];
        assert!(next_line_disables(&d, 5, "anything"));
        assert!(!next_line_disables(&d, 6, "anything"));
        assert!(!next_line_disables(&d, 4, "anything"));
    }
}
