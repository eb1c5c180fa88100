//! Tokens & comment extraction (spec §2 component 1). Wraps the parser's
//! token stream and derives the statistics downstream tables use to
//! pre-size themselves (spec §4.1: "statistics (identifier count) used to
//! pre-size downstream tables").

use lint_syntax::{CommentSpan, Token, TokenKind};

#[derive(Debug)]
pub struct TokensAndComments {
    pub comments: Vec<CommentSpan>,
    pub identifier_count: u32,
}

impl TokensAndComments {
    pub fn build(source: &str, tokens: &[Token]) -> Self {
        let comments = lint_syntax::extract_comments(source, tokens);
        let identifier_count = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .count() as u32;
        TokensAndComments {
            comments,
            identifier_count,
        }
    }
}
