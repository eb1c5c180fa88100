use lint_diagnostics::Span;

/// A lexical token tag. Stored columnar alongside `start`/`end` (spec §3
/// "Token... stored columnar").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    // keywords
    KwConst,
    KwVar,
    KwPub,
    KwFn,
    KwReturn,
    KwStruct,
    KwEnum,
    KwUnion,
    KwError,
    KwIf,
    KwElse,
    KwWhile,
    KwFor,
    KwSwitch,
    KwCatch,
    KwTry,
    KwComptime,
    KwBreak,
    KwContinue,
    KwNull,
    KwUndefined,
    KwTrue,
    KwFalse,
    KwType,
    KwExtern,

    // punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semi,
    Colon,
    Dot,
    DotBrace, // `.{`
    At,
    Pipe,
    Question,
    Eq,
    EqEq,
    Bang,
    BangEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Arrow,

    /// `///` or `//!` comments are comments *and* are surfaced as tokens
    /// (spec §4.1): "Recognise that doc comments ... are also comments (*and*
    /// are surfaced as tokens by the parser)".
    DocComment,

    Eof,
    /// A byte sequence the lexer could not classify; kept rather than
    /// aborting so the rest of the file still tokenizes (spec §7: parse
    /// errors are collected, not fatal, unless the whole parse failed).
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.as_range()]
    }
}

fn keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match ident {
        "const" => KwConst,
        "var" => KwVar,
        "pub" => KwPub,
        "fn" => KwFn,
        "return" => KwReturn,
        "struct" => KwStruct,
        "enum" => KwEnum,
        "union" => KwUnion,
        "error" => KwError,
        "if" => KwIf,
        "else" => KwElse,
        "while" => KwWhile,
        "for" => KwFor,
        "switch" => KwSwitch,
        "catch" => KwCatch,
        "try" => KwTry,
        "comptime" => KwComptime,
        "break" => KwBreak,
        "continue" => KwContinue,
        "null" => KwNull,
        "undefined" => KwUndefined,
        "true" => KwTrue,
        "false" => KwFalse,
        "type" => KwType,
        "extern" => KwExtern,
        _ => return None,
    })
}

/// Tokenize `source`, which must be NUL-terminated (spec §4.1 invariant).
///
/// Returns the token array plus any lexical errors (unterminated strings,
/// unknown byte sequences); lexical errors never abort tokenization, they
/// produce an `Unknown`/partial token and scanning continues, consistent
/// with the parser being error-tolerant (`ParseFailed` is reserved for "no
/// usable tree at all", spec §7).
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<String>) {
    let bytes = source.as_bytes();
    let mut i = 0usize;
    let len = source.len();
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while i < len {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
            }
            b'/' if i + 1 < len && bytes[i + 1] == b'/' => {
                let start = i;
                let is_doc = matches!(bytes.get(i + 2), Some(b'/') | Some(b'!'))
                    // `////` (four+ slashes) is a plain divider comment, not a doc comment
                    && bytes.get(i + 3) != Some(&b'/');
                while i < len && bytes[i] != b'\n' {
                    i += 1;
                }
                if is_doc {
                    tokens.push(tok(TokenKind::DocComment, start, i));
                }
                // non-doc line comments are stripped here and re-derived
                // precisely by `extract_comments` (component 1); the lexer
                // only needs to skip past them so they never become tokens.
            }
            b'"' => {
                let start = i;
                i += 1;
                let mut closed = false;
                while i < len {
                    if bytes[i] == b'\\' && i + 1 < len {
                        i += 2;
                        continue;
                    }
                    if bytes[i] == b'"' {
                        i += 1;
                        closed = true;
                        break;
                    }
                    if bytes[i] == b'\n' {
                        break;
                    }
                    i += 1;
                }
                if !closed {
                    errors.push(format!("unterminated string literal at byte {start}"));
                }
                tokens.push(Token {
                    kind: TokenKind::StringLiteral,
                    span: Span::new(start as u32, i as u32),
                });
            }
            b'\'' => {
                let start = i;
                i += 1;
                while i < len && bytes[i] != b'\'' && bytes[i] != b'\n' {
                    if bytes[i] == b'\\' && i + 1 < len {
                        i += 1;
                    }
                    i += 1;
                }
                if i < len && bytes[i] == b'\'' {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::CharLiteral,
                    span: Span::new(start as u32, i as u32),
                });
            }
            b'0'..=b'9' => {
                let start = i;
                let mut is_float = false;
                while i < len && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
                    i += 1;
                }
                if i < len && bytes[i] == b'.' && i + 1 < len && bytes[i + 1].is_ascii_digit() {
                    is_float = true;
                    i += 1;
                    while i < len && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
                        i += 1;
                    }
                }
                tokens.push(Token {
                    kind: if is_float {
                        TokenKind::FloatLiteral
                    } else {
                        TokenKind::IntLiteral
                    },
                    span: Span::new(start as u32, i as u32),
                });
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = i;
                while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                let text = &source[start..i];
                let kind = keyword(text).unwrap_or(TokenKind::Ident);
                tokens.push(Token {
                    kind,
                    span: Span::new(start as u32, i as u32),
                });
            }
            b'.' if i + 1 < len && bytes[i + 1] == b'{' => {
                tokens.push(tok(TokenKind::DotBrace, i, i + 2));
                i += 2;
            }
            _ => {
                let (kind, width) = single_or_double(bytes, i);
                if kind == TokenKind::Unknown {
                    errors.push(format!("unexpected byte {:#x} at {}", b, i));
                }
                tokens.push(tok(kind, i, i + width));
                i += width;
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(len as u32, len as u32),
    });

    (tokens, errors)
}

fn tok(kind: TokenKind, start: usize, end: usize) -> Token {
    Token {
        kind,
        span: Span::new(start as u32, end as u32),
    }
}

fn single_or_double(bytes: &[u8], i: usize) -> (TokenKind, usize) {
    use TokenKind::*;
    let b = bytes[i];
    let next = bytes.get(i + 1).copied();
    match (b, next) {
        (b'{', _) => (LBrace, 1),
        (b'}', _) => (RBrace, 1),
        (b'(', _) => (LParen, 1),
        (b')', _) => (RParen, 1),
        (b'[', _) => (LBracket, 1),
        (b']', _) => (RBracket, 1),
        (b',', _) => (Comma, 1),
        (b';', _) => (Semi, 1),
        (b':', _) => (Colon, 1),
        (b'.', _) => (Dot, 1),
        (b'@', _) => (At, 1),
        (b'|', _) => (Pipe, 1),
        (b'?', _) => (Question, 1),
        (b'&', _) => (Amp, 1),
        (b'=', Some(b'=')) => (EqEq, 2),
        (b'=', Some(b'>')) => (Arrow, 2),
        (b'=', _) => (Eq, 1),
        (b'!', Some(b'=')) => (BangEq, 2),
        (b'!', _) => (Bang, 1),
        (b'<', Some(b'=')) => (LtEq, 2),
        (b'<', _) => (Lt, 1),
        (b'>', Some(b'=')) => (GtEq, 2),
        (b'>', _) => (Gt, 1),
        (b'+', _) => (Plus, 1),
        (b'-', _) => (Minus, 1),
        (b'*', _) => (Star, 1),
        (b'/', _) => (Slash, 1),
        (b'%', _) => (Percent, 1),
        _ => (Unknown, 1),
    }
}
