//! Semantic model: symbol table, scope tree, node links, module record, and
//! the single-pass builder that derives them from a parsed syntax tree
//! (spec §2 components 1–7, §3, §4.2).
//!
//! Consumes a [`lint_syntax::Tree`] (treated as produced by an external
//! front-end, spec §1) and produces a [`Semantic`] — a read-only facade over
//! the columnar tables, built once per file and destroyed as a unit (spec
//! §3 "Lifecycle").

mod builder;
mod errors;
mod flags;
mod ids;
mod module;
mod node_links;
mod reference;
mod scope;
mod symbol;
mod tokens;

pub use errors::{BuilderError, SemanticError};
pub use flags::{ReferenceFlags, ScopeFlags, SymbolFlags};
pub use ids::{
    OptionalReferenceId, OptionalScopeId, OptionalSymbolId, ReferenceId, ScopeId, SymbolId,
    ROOT_SCOPE, ROOT_SYMBOL,
};
pub use module::{ImportEntry, ModuleImportKind, ModuleRecord};
pub use node_links::NodeLinks;
pub use reference::{Reference, ReferenceTable};
pub use scope::{Scope, ScopeTree};
pub use symbol::{Symbol, SymbolTable, Visibility};
pub use tokens::TokensAndComments;

// Re-exported so downstream crates (`lint_core`) can address nodes/tokens
// and source text without an extra direct dependency on `lint_syntax` /
// `lint_diagnostics` for these specific types.
pub use lint_diagnostics::{SourceFile, Span};
pub use lint_syntax::{CommentSpan, NodeIndex, SyntaxKind, Token, TokenIndex, Tree};

use builder::Builder;

/// The semantic model for one file: every table the builder populates, plus
/// the parsed tree and source it was built from. Read-only once constructed
/// (spec §3 "consumed read-only by all rules").
#[derive(Debug)]
pub struct Semantic {
    pub source: SourceFile,
    pub tree: Tree,
    pub symbols: SymbolTable,
    pub scopes: ScopeTree,
    pub node_links: NodeLinks,
    pub references: ReferenceTable,
    pub modules: ModuleRecord,
    pub tokens_comments: TokensAndComments,
}

impl Semantic {
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn symbol_name(&self, id: SymbolId) -> &str {
        self.symbols.name(id, self.source.text())
    }

    pub fn span_for_node(&self, node: NodeIndex) -> Span {
        self.tree.node(node).span
    }

    pub fn span_for_token(&self, token: TokenIndex) -> Span {
        self.tree.token(token).span
    }

    pub fn token_text(&self, token: TokenIndex) -> &str {
        self.tree.token_text(token, self.source.text())
    }

    /// Re-walks `node_links` to find `node`'s immediate children is not
    /// supported (no child-list side-table is kept per spec §4.1 table 5 —
    /// only `parent`), but the reverse direction is: every node whose
    /// `parent` equals `node`.
    pub fn children_of(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.tree
            .iter_indices()
            .filter(move |&n| n != NodeIndex::ROOT && self.node_links.parent(n) == node)
    }
}

/// Build the semantic model for `source` (spec §4.2 "Contract:
/// `build(source) → Result<Semantic, errors>`").
///
/// Parse errors are collected but non-fatal unless the parser produced no
/// usable tree at all (spec §7 items 2–3): a source file that merely
/// triggers a couple of recoverable parse errors still gets a `Semantic`
/// walked over its (partially erroneous) tree... except the spec is
/// explicit that *any* recoverable parse error discards the partial model
/// (§7 item 3: "recoverable parse errors were found ... AnalysisFailed ...
/// any partial semantic model is discarded"), so we honor that literally:
/// only a fully clean parse produces `Ok`.
pub fn build(source: &SourceFile) -> Result<Semantic, SemanticError> {
    let parse = lint_syntax::parse(source.text());

    let tokens_comments = TokensAndComments::build(source.text(), &parse.tree.tokens);

    let mut builder = Builder::new(&parse.tree, source.text());
    if let Err(e) = builder.run() {
        return Err(SemanticError::AnalysisFailed(vec![e.to_string()]));
    }

    if !parse.errors.is_empty() {
        let root_has_decls = matches!(
            &parse.tree.node(parse.tree.root()).data,
            lint_syntax::NodeData::SourceFile { decls } if !decls.is_empty()
        );
        return Err(if root_has_decls {
            SemanticError::AnalysisFailed(parse.errors)
        } else {
            SemanticError::ParseFailed(parse.errors)
        });
    }

    let Builder {
        symbols,
        scopes,
        node_links,
        references,
        modules,
        ..
    } = builder;

    Ok(Semantic {
        source: source.clone(),
        tree: parse.tree,
        symbols,
        scopes,
        node_links,
        references,
        modules,
        tokens_comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_ok(src: &str) -> Semantic {
        build(&SourceFile::new(src, None)).expect("expected a clean build")
    }

    #[test]
    fn empty_file_has_one_root_symbol_and_scope() {
        let sem = build_ok("");
        assert_eq!(sem.symbols.len(), 1);
        assert_eq!(sem.scopes.len(), 1);
        assert!(sem.symbols.members(ROOT_SYMBOL).is_empty());
    }

    #[test]
    fn fields_are_members() {
        let sem = build_ok("const Foo = struct { bar: u32 };");
        let foo = sem
            .symbols
            .iter()
            .find(|&id| sem.symbol_name(id) == "Foo")
            .expect("Foo symbol");
        let bar = sem
            .symbols
            .iter()
            .find(|&id| sem.symbol_name(id) == "bar")
            .expect("bar symbol");
        assert_eq!(sem.symbols.members(foo), &[bar]);
        assert!(sem.symbols.exports(foo).is_empty());
        assert_eq!(sem.scopes.bindings(sem.symbols.scope_of(bar)).len(), 1);
    }

    #[test]
    fn enum_variants_are_members() {
        let sem = build_ok("const Foo = enum { bar };");
        let foo = sem
            .symbols
            .iter()
            .find(|&id| sem.symbol_name(id) == "Foo")
            .expect("Foo symbol");
        let bar = sem
            .symbols
            .iter()
            .find(|&id| sem.symbol_name(id) == "bar")
            .expect("bar symbol");
        assert_eq!(sem.symbols.members(foo), &[bar]);
    }

    #[test]
    fn function_scope_nesting() {
        let sem = build_ok("fn add(x: i32, y: i32) i32 { return x + y; }");
        assert_eq!(sem.scopes.len(), 3);
        let param_scope = ScopeId::new(1);
        let body_scope = ScopeId::new(2);
        assert_eq!(sem.scopes.bindings(param_scope).len(), 2);
        assert_eq!(sem.scopes.parent(body_scope), Some(param_scope));
    }

    #[test]
    fn container_exports_in_declaration_order() {
        let sem = build_ok(
            "const Foo = struct { const C = 1; pub const D = struct {}; fn e() void {} };",
        );
        let foo = sem
            .symbols
            .iter()
            .find(|&id| sem.symbol_name(id) == "Foo")
            .unwrap();
        let names: Vec<_> = sem
            .symbols
            .exports(foo)
            .iter()
            .map(|&id| sem.symbol_name(id).to_string())
            .collect();
        assert_eq!(names, vec!["C", "D", "e"]);
    }

    #[test]
    fn module_imports_recorded_in_order() {
        let sem = build_ok(r#"const std = @import("std"); const x = @import("foo.zig");"#);
        assert_eq!(sem.modules.imports.len(), 2);
        assert_eq!(sem.modules.imports[0].specifier, "std");
        assert_eq!(sem.modules.imports[0].kind, ModuleImportKind::Module);
        assert_eq!(sem.modules.imports[1].specifier, "foo.zig");
        assert_eq!(sem.modules.imports[1].kind, ModuleImportKind::File);
    }

    #[test]
    fn unresolved_reference_is_recorded() {
        let sem = build_ok("const x = y;");
        assert_eq!(sem.references.unresolved().len(), 1);
    }

    #[test]
    fn comment_only_file_has_no_symbols_beyond_root() {
        let sem = build_ok("// just a comment\n");
        assert_eq!(sem.symbols.len(), 1);
        assert_eq!(sem.tokens_comments.comments.len(), 1);
    }

    #[test]
    fn garbage_file_is_parse_failed() {
        let err = build(&SourceFile::new("}}} nonsense ;;; {{{", None)).unwrap_err();
        assert!(matches!(err, SemanticError::ParseFailed(_)));
    }

    // spec §8 "Round-trip / idempotence": running twice on the same source
    // yields the same shape.
    #[test]
    fn build_is_deterministic() {
        let src = "const Foo = struct { bar: u32 }; fn f(x: i32) i32 { return x; }";
        let a = build_ok(src);
        let b = build_ok(src);
        assert_eq!(a.symbols.len(), b.symbols.len());
        assert_eq!(a.scopes.len(), b.scopes.len());
        assert_eq!(a.references.len(), b.references.len());
    }
}
