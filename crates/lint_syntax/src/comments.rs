use crate::token::Token;
use lint_diagnostics::Span;

/// A comment span, including doc comments. Ordered, non-overlapping, sorted
/// strictly by `start` (spec §3 invariant 6, §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSpan {
    pub span: Span,
    pub is_doc: bool,
}

/// Extract every comment in `source`, including doc comments, since the
/// parser discards them from its tree (spec §4.1).
///
/// Algorithm (spec §4.1): walk the token stream; between each pair of
/// tokens (and before the first / after the last), scan the intervening
/// slice for `//`-style line comments. A line comment begins after ≥2
/// consecutive `/` characters (ignoring leading spaces/tabs) and ends at
/// `\n` or EOF.
pub fn extract_comments(source: &str, tokens: &[Token]) -> Vec<CommentSpan> {
    let mut comments = Vec::new();
    let mut cursor = 0u32;

    for token in tokens {
        let gap_start = cursor;
        let gap_end = token.span.start;
        if gap_end > gap_start {
            scan_gap(source, gap_start, gap_end, &mut comments);
        }
        cursor = token.span.end;
        // Doc comments are surfaced as real tokens by the lexer (so the
        // grammar can see `///`/`//!`), which means they never appear inside
        // a gap scanned above; record them here instead (spec §4.1: "doc
        // comments ... are also comments (*and* are surfaced as tokens)").
        if token.kind == crate::token::TokenKind::DocComment {
            comments.push(CommentSpan {
                span: token.span,
                is_doc: true,
            });
        }
    }
    if (cursor as usize) < source.len() {
        scan_gap(source, cursor, source.len() as u32, &mut comments);
    }

    comments
}

fn scan_gap(source: &str, start: u32, end: u32, out: &mut Vec<CommentSpan>) {
    let bytes = source.as_bytes();
    let mut i = start as usize;
    let end = end as usize;

    while i < end {
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'/' if i + 1 < end && bytes[i + 1] == b'/' => {
                let comment_start = i as u32;
                let is_doc = matches!(bytes.get(i + 2), Some(b'/') | Some(b'!'))
                    && bytes.get(i + 3) != Some(&b'/');
                while i < end && bytes[i] != b'\n' {
                    i += 1;
                }
                out.push(CommentSpan {
                    span: Span::new(comment_start, i as u32),
                    is_doc,
                });
            }
            _ => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn sorted_and_disjoint() {
        let src = "// hello\nconst x = 1; // trailing\n/// doc\nconst y = 2;\0";
        let (tokens, _) = tokenize(src.trim_end_matches('\0'));
        let comments = extract_comments(src.trim_end_matches('\0'), &tokens);
        assert!(comments.len() >= 2);
        for w in comments.windows(2) {
            assert!(w[0].span.end < w[1].span.start);
        }
    }
}
