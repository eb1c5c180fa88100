//! A small recursive-descent parser for the source language, standing in for
//! the external front-end the spec treats as a collaborator (spec §1, §6).
//! It is deliberately forgiving: on a construct it doesn't recognise it
//! records a parse error and emits an `Error` node rather than aborting, so
//! that "parse errors were found" (recoverable, spec §7 `AnalysisFailed`)
//! stays distinct from "the parser produced no usable tree at all"
//! (`ParseFailed`).

use crate::kind::{ContainerKind, SyntaxKind};
use crate::token::{tokenize, Token, TokenKind};
use crate::tree::{Node, NodeData, NodeIndex, TokenIndex, Tree};
use lint_diagnostics::Span;

pub struct ParseResult {
    pub tree: Tree,
    pub errors: Vec<String>,
}

/// Parse `source` into a [`Tree`]. Always returns a tree — even a file full
/// of garbage parses to a `SourceFile` with no declarations and a non-empty
/// error list; it is the caller's choice (spec §7) whether a non-empty
/// error list should be treated as `ParseFailed`.
pub fn parse(source: &str) -> ParseResult {
    let (tokens, lex_errors) = tokenize(source);
    let mut parser = Parser {
        tree: Tree::new(tokens),
        source,
        pos: 0,
        errors: lex_errors,
    };
    // reserve node 0 for the root (spec §3 invariant: node 0 is the root)
    parser.tree.push(Node {
        kind: SyntaxKind::Error,
        span: Span::new(0, 0),
        main_token: TokenIndex(0),
        data: NodeData::Error,
    });

    let mut decls = Vec::new();
    while !parser.at(TokenKind::Eof) {
        match parser.parse_decl() {
            Some(idx) => decls.push(idx),
            None => {
                if !parser.at(TokenKind::Eof) {
                    parser.error("expected a declaration");
                    parser.bump();
                }
            }
        }
    }

    let root_span = Span::new(0, source.len() as u32);
    parser.tree.set_root(Node {
        kind: SyntaxKind::SourceFile,
        span: root_span,
        main_token: TokenIndex(0),
        data: NodeData::SourceFile { decls },
    });

    ParseResult {
        tree: parser.tree,
        errors: parser.errors,
    }
}

struct Parser<'s> {
    tree: Tree,
    source: &'s str,
    pos: usize,
    errors: Vec<String>,
}

impl<'s> Parser<'s> {
    fn cur(&self) -> Token {
        self.skip_doc_comments_peek()
    }

    /// Doc comments are real tokens (spec §4.1) but the grammar below never
    /// wants to look at them directly; skip past any sitting at the cursor
    /// when peeking, without consuming them from `self.pos` (that happens
    /// lazily the next time `bump`/`bump_index` runs).
    fn skip_doc_comments_peek(&self) -> Token {
        let mut i = self.pos;
        while self.tree.tokens[i].kind == TokenKind::DocComment {
            i += 1;
        }
        self.tree.tokens[i]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.cur().kind == kind
    }

    fn skip_doc_comments(&mut self) {
        while self.tree.tokens[self.pos].kind == TokenKind::DocComment {
            self.pos += 1;
        }
    }

    fn bump(&mut self) -> Token {
        self.skip_doc_comments();
        let tok = self.tree.tokens[self.pos];
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    fn bump_index(&mut self) -> TokenIndex {
        self.skip_doc_comments();
        let idx = TokenIndex(self.pos as u32);
        if self.tree.tokens[self.pos].kind != TokenKind::Eof {
            self.pos += 1;
        }
        idx
    }

    fn expect(&mut self, kind: TokenKind) -> Option<TokenIndex> {
        if self.at(kind) {
            Some(self.bump_index())
        } else {
            self.error(&format!("expected {:?}, found {:?}", kind, self.cur().kind));
            None
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error(&mut self, msg: &str) {
        let off = self.cur().span.start;
        let (line, col) = byte_line_col(self.source, off);
        self.errors.push(format!("{msg} at {line}:{col}"));
    }

    fn push(&mut self, kind: SyntaxKind, span: Span, main_token: TokenIndex, data: NodeData) -> NodeIndex {
        self.tree.push(Node {
            kind,
            span,
            main_token,
            data,
        })
    }

    fn span_from(&self, start_tok: TokenIndex) -> Span {
        let start = self.tree.token(start_tok).span.start;
        let end = if self.pos == 0 {
            start
        } else {
            self.tree.tokens[self.pos.saturating_sub(1)].span.end
        };
        Span::new(start, end.max(start))
    }

    // ---- declarations ----

    fn parse_decl(&mut self) -> Option<NodeIndex> {
        match self.cur().kind {
            TokenKind::KwPub | TokenKind::KwConst | TokenKind::KwVar => self.parse_var_or_destructure(),
            TokenKind::KwFn => self.parse_fn_decl(false),
            _ => None,
        }
    }

    fn parse_var_or_destructure(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        let is_pub = self.eat(TokenKind::KwPub);
        if self.at(TokenKind::KwFn) {
            return self.parse_fn_decl(is_pub);
        }
        let is_comptime = self.eat(TokenKind::KwComptime);
        let is_const = self.at(TokenKind::KwConst);
        if !is_const && !self.at(TokenKind::KwVar) {
            self.error("expected 'const', 'var' or 'fn'");
            return None;
        }
        self.bump(); // const/var

        let name_token = self.expect(TokenKind::Ident)?;

        if self.at(TokenKind::Comma) {
            // destructure: `const a, const b = expr;` (spec §4.2
            // "Assignment-destructure": each LHS name declares a symbol
            // whose const-ness follows the destructure's keyword)
            let mut bindings = vec![name_token];
            while self.eat(TokenKind::Comma) {
                let _ = self.eat(TokenKind::KwConst) || self.eat(TokenKind::KwVar);
                if let Some(tok) = self.expect(TokenKind::Ident) {
                    bindings.push(tok);
                }
            }
            self.expect(TokenKind::Eq)?;
            let value = self.parse_expr()?;
            self.expect(TokenKind::Semi);
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::AssignDestructure,
                span,
                name_token,
                NodeData::AssignDestructure {
                    is_const,
                    bindings,
                    value,
                },
            ));
        }

        let ty = if self.eat(TokenKind::Colon) {
            self.parse_type_expr()
        } else {
            None
        };
        let value = if self.eat(TokenKind::Eq) {
            self.parse_expr()
        } else {
            None
        };
        self.expect(TokenKind::Semi);
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::VarDecl,
            span,
            name_token,
            NodeData::VarDecl {
                name_token,
                is_pub,
                is_const,
                is_comptime,
                ty,
                value,
            },
        ))
    }

    fn parse_fn_decl(&mut self, is_pub: bool) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::KwFn)?;
        let name_token = self.expect(TokenKind::Ident);

        let proto_start = TokenIndex(self.pos as u32);
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            let param_start = TokenIndex(self.pos as u32);
            let is_comptime = self.eat(TokenKind::KwComptime);
            let pname = match self.expect(TokenKind::Ident) {
                Some(t) => t,
                None => break,
            };
            self.expect(TokenKind::Colon);
            let ty = self.parse_type_expr();
            let span = self.span_from(param_start);
            params.push(self.push(
                SyntaxKind::Param,
                span,
                pname,
                NodeData::Param {
                    name_token: pname,
                    is_comptime,
                    ty,
                },
            ));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen);

        let return_type_token = if self.at(TokenKind::Ident) || self.at(TokenKind::KwType) {
            Some(self.bump_index())
        } else {
            None
        };
        let proto_span = self.span_from(proto_start);
        let proto = self.push(
            SyntaxKind::FnProto,
            proto_span,
            proto_start,
            NodeData::FnProto {
                params,
                return_type_token,
            },
        );

        let body = if self.at(TokenKind::LBrace) {
            self.parse_block(false)
        } else {
            self.expect(TokenKind::Semi);
            None
        };

        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::FnDecl,
            span,
            name_token.unwrap_or(proto_start),
            NodeData::FnDecl {
                name_token,
                is_pub,
                proto,
                body,
            },
        ))
    }

    /// Parse a type expression. A full type grammar is out of scope (spec
    /// §1 non-goal: no type checking); we only need enough structure to
    /// resolve `return_type_token`-style single identifiers and to stay in
    /// sync with the token stream for everything else.
    fn parse_type_expr(&mut self) -> Option<NodeIndex> {
        self.parse_unary()
    }

    fn parse_container_decl(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        let container_kind = match self.cur().kind {
            TokenKind::KwStruct => ContainerKind::Struct,
            TokenKind::KwEnum => ContainerKind::Enum,
            TokenKind::KwUnion => ContainerKind::Union,
            TokenKind::KwError => ContainerKind::Error,
            _ => return None,
        };
        self.bump();
        self.expect(TokenKind::LBrace)?;
        let mut fields = Vec::new();
        let mut decls = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            if matches!(
                self.cur().kind,
                TokenKind::KwPub | TokenKind::KwConst | TokenKind::KwVar | TokenKind::KwFn
            ) {
                if let Some(d) = self.parse_decl() {
                    decls.push(d);
                } else {
                    self.bump();
                }
                continue;
            }
            if self.at(TokenKind::Ident) {
                let field_start = TokenIndex(self.pos as u32);
                let name_token = self.bump_index();
                let ty = if self.eat(TokenKind::Colon) {
                    self.parse_type_expr()
                } else {
                    None
                };
                let default = if self.eat(TokenKind::Eq) {
                    self.parse_expr()
                } else {
                    None
                };
                self.eat(TokenKind::Comma);
                let span = self.span_from(field_start);
                fields.push(self.push(
                    SyntaxKind::ContainerField,
                    span,
                    name_token,
                    NodeData::ContainerField {
                        name_token,
                        ty,
                        default,
                    },
                ));
                continue;
            }
            self.error("expected a container field or declaration");
            self.bump();
        }
        self.expect(TokenKind::RBrace);
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::ContainerDecl,
            span,
            start_tok,
            NodeData::ContainerDecl {
                container_kind,
                fields,
                decls,
            },
        ))
    }

    // ---- statements ----

    fn parse_block(&mut self, force_comptime: bool) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            match self.parse_stmt() {
                Some(s) => stmts.push(s),
                None => {
                    self.error("expected a statement");
                    self.bump();
                }
            }
        }
        self.expect(TokenKind::RBrace);
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::Block,
            span,
            start_tok,
            NodeData::Block {
                stmts,
                is_comptime: force_comptime,
            },
        ))
    }

    fn parse_stmt(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        match self.cur().kind {
            TokenKind::KwConst | TokenKind::KwVar => self.parse_var_or_destructure(),
            TokenKind::KwReturn => {
                self.bump();
                let value = if self.at(TokenKind::Semi) {
                    None
                } else {
                    self.parse_expr()
                };
                self.expect(TokenKind::Semi);
                let span = self.span_from(start_tok);
                Some(self.push(SyntaxKind::ReturnStmt, span, start_tok, NodeData::ReturnStmt { value }))
            }
            TokenKind::KwBreak => {
                self.bump();
                self.expect(TokenKind::Semi);
                let span = self.span_from(start_tok);
                Some(self.push(SyntaxKind::BreakStmt, span, start_tok, NodeData::BreakStmt))
            }
            TokenKind::KwContinue => {
                self.bump();
                self.expect(TokenKind::Semi);
                let span = self.span_from(start_tok);
                Some(self.push(SyntaxKind::ContinueStmt, span, start_tok, NodeData::ContinueStmt))
            }
            TokenKind::KwIf => self.parse_if_stmt(),
            TokenKind::KwWhile => self.parse_while_stmt(),
            TokenKind::KwFor => self.parse_for_stmt(),
            TokenKind::KwSwitch => self.parse_switch_stmt(),
            TokenKind::KwComptime => {
                self.bump();
                if self.at(TokenKind::LBrace) {
                    let inner = self.parse_block(true)?;
                    let span = self.span_from(start_tok);
                    Some(self.push(
                        SyntaxKind::ComptimeBlock,
                        span,
                        start_tok,
                        NodeData::ComptimeBlock { inner },
                    ))
                } else {
                    let inner = self.parse_stmt()?;
                    let span = self.span_from(start_tok);
                    Some(self.push(
                        SyntaxKind::ComptimeBlock,
                        span,
                        start_tok,
                        NodeData::ComptimeBlock { inner },
                    ))
                }
            }
            TokenKind::LBrace => self.parse_block(false),
            _ => {
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semi);
                let span = self.span_from(start_tok);
                Some(self.push(SyntaxKind::ExprStmt, span, start_tok, NodeData::ExprStmt { expr }))
            }
        }
    }

    fn parse_if_stmt(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::KwIf)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen);
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.eat(TokenKind::KwElse) {
            self.parse_stmt()
        } else {
            None
        };
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::IfStmt,
            span,
            start_tok,
            NodeData::IfStmt {
                cond,
                then_branch,
                else_branch,
            },
        ))
    }

    fn parse_while_stmt(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::KwWhile)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen);
        let body = self.parse_stmt()?;
        let span = self.span_from(start_tok);
        Some(self.push(SyntaxKind::WhileStmt, span, start_tok, NodeData::WhileStmt { cond, body }))
    }

    fn parse_for_stmt(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::KwFor)?;
        self.expect(TokenKind::LParen)?;
        let iterable = self.parse_expr()?;
        self.expect(TokenKind::RParen);
        let capture_token = if self.eat(TokenKind::Pipe) {
            let tok = self.expect(TokenKind::Ident);
            self.expect(TokenKind::Pipe);
            tok
        } else {
            None
        };
        let body = self.parse_stmt()?;
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::ForStmt,
            span,
            start_tok,
            NodeData::ForStmt {
                iterable,
                capture_token,
                body,
            },
        ))
    }

    fn parse_switch_stmt(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::KwSwitch)?;
        self.expect(TokenKind::LParen)?;
        let discriminant = self.parse_expr()?;
        self.expect(TokenKind::RParen);
        self.expect(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let case_start = TokenIndex(self.pos as u32);
            let mut values = Vec::new();
            if self.eat(TokenKind::KwElse) {
                // `else => ...` — the catch-all arm; no case values.
            } else {
                loop {
                    if let Some(v) = self.parse_expr() {
                        values.push(v);
                    }
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::Arrow);
            let body = match self.parse_stmt() {
                Some(b) => b,
                None => {
                    let tok = TokenIndex(self.pos as u32);
                    self.push(SyntaxKind::Error, Span::new(0, 0), tok, NodeData::Error)
                }
            };
            self.eat(TokenKind::Comma);
            let span = self.span_from(case_start);
            cases.push(self.push(
                SyntaxKind::SwitchCase,
                span,
                case_start,
                NodeData::SwitchCase { values, body },
            ));
        }
        self.expect(TokenKind::RBrace);
        let span = self.span_from(start_tok);
        Some(self.push(
            SyntaxKind::SwitchStmt,
            span,
            start_tok,
            NodeData::SwitchStmt { discriminant, cases },
        ))
    }

    // ---- expressions ----

    fn parse_expr(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        if self.eat(TokenKind::KwTry) {
            let expr = self.parse_expr()?;
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::TryExpr,
                span,
                start_tok,
                NodeData::TryExpr { expr, catch: None },
            ));
        }

        let lhs = self.parse_assign_or_binary()?;

        if self.at(TokenKind::KwCatch) {
            self.bump();
            let payload_token = if self.eat(TokenKind::Pipe) {
                let tok = self.expect(TokenKind::Ident);
                self.expect(TokenKind::Pipe);
                tok
            } else {
                None
            };
            let catch_start = TokenIndex(self.pos as u32);
            let body = if self.at(TokenKind::LBrace) {
                self.parse_block(false)?
            } else {
                self.parse_expr()?
            };
            let catch_span = self.span_from(catch_start);
            let catch = self.push(
                SyntaxKind::CatchClause,
                catch_span,
                catch_start,
                NodeData::CatchClause { payload_token, body },
            );
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::TryExpr,
                span,
                start_tok,
                NodeData::TryExpr {
                    expr: lhs,
                    catch: Some(catch),
                },
            ));
        }

        Some(lhs)
    }

    fn parse_assign_or_binary(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        let lhs = self.parse_binary(0)?;
        if self.eat(TokenKind::Eq) {
            let value = self.parse_assign_or_binary()?;
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::AssignExpr,
                span,
                start_tok,
                NodeData::AssignExpr { target: lhs, value },
            ));
        }
        Some(lhs)
    }

    fn parse_binary(&mut self, min_bp: u8) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        let mut lhs = self.parse_unary()?;

        loop {
            let op_bp = match binding_power(self.cur().kind) {
                Some(bp) => bp,
                None => break,
            };
            if op_bp < min_bp {
                break;
            }
            let op_token = self.bump_index();
            let rhs = self.parse_binary(op_bp + 1)?;
            let span = self.span_from(start_tok);
            lhs = self.push(
                SyntaxKind::BinaryExpr,
                span,
                op_token,
                NodeData::BinaryExpr { op_token, lhs, rhs },
            );
        }
        Some(lhs)
    }

    fn parse_unary(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        if matches!(self.cur().kind, TokenKind::Bang | TokenKind::Minus) {
            let op_token = self.bump_index();
            let operand = self.parse_unary()?;
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::UnaryExpr,
                span,
                op_token,
                NodeData::UnaryExpr { op_token, operand },
            ));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(TokenKind::Dot) {
                let field_token = match self.expect(TokenKind::Ident) {
                    Some(t) => t,
                    None => break,
                };
                let span = self.span_from(start_tok);
                expr = self.push(
                    SyntaxKind::FieldExpr,
                    span,
                    field_token,
                    NodeData::FieldExpr {
                        base: expr,
                        field_token,
                    },
                );
            } else if self.at(TokenKind::LParen) {
                self.bump();
                let mut args = Vec::new();
                while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
                    if let Some(a) = self.parse_expr() {
                        args.push(a);
                    }
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::RParen);
                let span = self.span_from(start_tok);
                expr = self.push(
                    SyntaxKind::CallExpr,
                    span,
                    start_tok,
                    NodeData::CallExpr { callee: expr, args },
                );
            } else {
                break;
            }
        }
        Some(expr)
    }

    fn parse_primary(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        match self.cur().kind {
            TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwNull
            | TokenKind::KwUndefined => {
                let tok = self.bump_index();
                Some(self.push(SyntaxKind::Literal, self.tree.token(tok).span, tok, NodeData::Literal { token: tok }))
            }
            TokenKind::Ident => {
                let tok = self.bump_index();
                Some(self.push(
                    SyntaxKind::Identifier,
                    self.tree.token(tok).span,
                    tok,
                    NodeData::Identifier { token: tok },
                ))
            }
            TokenKind::KwStruct | TokenKind::KwEnum | TokenKind::KwUnion | TokenKind::KwError => {
                self.parse_container_decl()
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen);
                let span = self.span_from(start_tok);
                Some(self.push(SyntaxKind::GroupExpr, span, start_tok, NodeData::GroupExpr { inner }))
            }
            TokenKind::DotBrace => self.parse_anonymous_literal(),
            TokenKind::At => self.parse_builtin_call(),
            _ => {
                self.error("expected an expression");
                None
            }
        }
    }

    fn parse_anonymous_literal(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::DotBrace)?;
        // struct-init form: `.{ .name = value, ... }`
        if self.at(TokenKind::Dot) {
            let mut fields = Vec::new();
            while self.eat(TokenKind::Dot) {
                let field_start = TokenIndex(self.pos as u32);
                let name_token = self.expect(TokenKind::Ident)?;
                self.expect(TokenKind::Eq);
                let value = self.parse_expr()?;
                let span = self.span_from(field_start);
                fields.push(self.push(
                    SyntaxKind::StructInitField,
                    span,
                    name_token,
                    NodeData::StructInitField { name_token, value },
                ));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBrace);
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::StructInit,
                span,
                start_tok,
                NodeData::StructInit {
                    type_expr: None,
                    fields,
                },
            ));
        }
        // array-init form: `.{ 1, 2, 3 }`
        let mut elements = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            if let Some(e) = self.parse_expr() {
                elements.push(e);
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        let span = self.span_from(start_tok);
        Some(self.push(SyntaxKind::ArrayInit, span, start_tok, NodeData::ArrayInit { elements }))
    }

    fn parse_builtin_call(&mut self) -> Option<NodeIndex> {
        let start_tok = TokenIndex(self.pos as u32);
        self.expect(TokenKind::At)?;
        let name_token = self.expect(TokenKind::Ident)?;
        let name = self.tree.token_text(name_token, self.source);
        self.expect(TokenKind::LParen)?;
        if name == "import" {
            let specifier_token = self.expect(TokenKind::StringLiteral)?;
            self.expect(TokenKind::RParen);
            let span = self.span_from(start_tok);
            return Some(self.push(
                SyntaxKind::ImportExpr,
                span,
                start_tok,
                NodeData::ImportExpr { specifier_token },
            ));
        }
        let callee = self.push(
            SyntaxKind::Identifier,
            self.tree.token(name_token).span,
            name_token,
            NodeData::Identifier { token: name_token },
        );
        let mut args = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            if let Some(a) = self.parse_expr() {
                args.push(a);
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen);
        let span = self.span_from(start_tok);
        Some(self.push(SyntaxKind::CallExpr, span, start_tok, NodeData::CallExpr { callee, args }))
    }
}

/// Left binding power for binary operators; `None` means "not a binary
/// operator here". Higher binds tighter.
fn binding_power(kind: TokenKind) -> Option<u8> {
    use TokenKind::*;
    Some(match kind {
        EqEq | BangEq | Lt | Gt | LtEq | GtEq => 1,
        Plus | Minus => 2,
        Star | Slash | Percent => 3,
        _ => return None,
    })
}

fn byte_line_col(source: &str, offset: u32) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    for (i, ch) in source.char_indices() {
        if i as u32 >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
