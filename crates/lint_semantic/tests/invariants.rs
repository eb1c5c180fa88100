//! Property tests for the semantic model's structural invariants (spec §8
//! "Invariants to assert as property tests"). Rather than fuzz raw bytes
//! (which would mostly exercise the parser's error recovery, not the
//! builder), generate small well-formed programs from a restricted grammar
//! of top-level `const`/`var`/`fn` declarations and check the invariants
//! hold on every one the builder accepts.

use lint_diagnostics::SourceFile;
use lint_semantic::{ROOT_SCOPE, Semantic};
use proptest::prelude::*;

/// One top-level declaration, rendered to source text.
#[derive(Debug, Clone)]
enum Decl {
    Const { name: String, value: i64 },
    Var { name: String, value: i64 },
    Fn { name: String, params: Vec<String>, uses: Vec<String> },
    Struct { name: String, fields: Vec<String> },
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_map(|s| s)
}

fn decl_strategy() -> impl Strategy<Value = Decl> {
    use proptest::collection::vec;
    prop_oneof![
        (ident(), any::<i8>()).prop_map(|(name, value)| Decl::Const { name, value: value as i64 }),
        (ident(), any::<i8>()).prop_map(|(name, value)| Decl::Var { name, value: value as i64 }),
        (ident(), vec(ident(), 0..3), vec(ident(), 0..3))
            .prop_map(|(name, params, uses)| Decl::Fn { name, params, uses }),
        (ident(), vec(ident(), 0..3)).prop_map(|(name, fields)| Decl::Struct { name, fields }),
    ]
}

fn render(decls: &[Decl]) -> String {
    let mut out = String::new();
    // Dedup names per-kind-bucket isn't required for the invariants under
    // test (duplicate top-level names simply shadow in `bindings`, which
    // the invariants still hold for), so decls are rendered as-is.
    for (i, d) in decls.iter().enumerate() {
        match d {
            Decl::Const { name, value } => {
                out.push_str(&format!("const {name}_{i} = {value};\n"))
            }
            Decl::Var { name, value } => out.push_str(&format!("var {name}_{i} = {value};\n")),
            Decl::Fn { name, params, uses } => {
                let proto = params
                    .iter()
                    .enumerate()
                    .map(|(j, p)| format!("{p}_{i}_{j}: i32"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let body = uses
                    .iter()
                    .enumerate()
                    .map(|(j, u)| format!("const r{i}_{j} = {u}_{i}_0;\n"))
                    .collect::<Vec<_>>()
                    .join("");
                out.push_str(&format!("fn {name}_{i}({proto}) void {{\n{body}}}\n"));
            }
            Decl::Struct { name, fields } => {
                let body = fields
                    .iter()
                    .enumerate()
                    .map(|(j, f)| format!("{f}_{i}_{j}: i32,\n"))
                    .collect::<Vec<_>>()
                    .join("");
                out.push_str(&format!("const {name}_{i} = struct {{\n{body}}};\n"));
            }
        }
    }
    out
}

fn program() -> impl Strategy<Value = String> {
    proptest::collection::vec(decl_strategy(), 0..8).prop_map(|decls| render(&decls))
}

fn assert_invariants(sem: &Semantic) {
    // bindings[s] == {sym | sym.scope == s}, both in declaration order.
    for scope in sem.scopes.iter() {
        let expected: Vec<_> = sem.symbols.iter().filter(|&s| sem.symbols.scope_of(s) == scope).collect();
        assert_eq!(
            sem.scopes.bindings(scope),
            expected.as_slice(),
            "bindings mismatch for scope {scope:?}"
        );
    }

    // Every reference in references[s] points back to a Reference with
    // symbol == Some(s); every unresolved-list entry has symbol == None.
    for sym in sem.symbols.iter() {
        for &rid in sem.symbols.references(sym) {
            let r = sem.references.row(rid);
            assert_eq!(r.symbol, Some(sym));
        }
    }
    for &rid in sem.references.unresolved() {
        let r = sem.references.row(rid);
        assert_eq!(r.symbol, None);
    }

    // Every non-root scope's parent has a strictly smaller id, and
    // following parents terminates at scope 0.
    for scope in sem.scopes.iter() {
        if scope == ROOT_SCOPE {
            assert_eq!(sem.scopes.parent(scope), None);
            continue;
        }
        let parent = sem.scopes.parent(scope).expect("non-root scope has a parent");
        assert!(parent.index() < scope.index());
        let mut cur = scope;
        let mut steps = 0;
        while cur != ROOT_SCOPE {
            cur = sem.scopes.parent(cur).expect("chain must reach root");
            steps += 1;
            assert!(steps <= sem.scopes.len(), "parent chain did not terminate");
        }
    }

    // members[c] is empty whenever c is itself a member symbol.
    for sym in sem.symbols.iter() {
        if sem.symbols.flags(sym).is_container() {
            continue;
        }
        assert!(sem.symbols.members(sym).is_empty());
    }

    // Comments are strictly increasing by start and pairwise disjoint.
    let comments = &sem.tokens_comments.comments;
    for w in comments.windows(2) {
        assert!(w[0].span.end < w[1].span.start);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn structural_invariants_hold_on_generated_programs(src in program()) {
        let source = SourceFile::new(&src, None);
        if let Ok(sem) = lint_semantic::build(&source) {
            assert_invariants(&sem);
        }
        // A rejected (parse/analysis-failed) program asserts nothing: the
        // grammar above can still produce duplicate top-level names or
        // other builder-rejected shapes, and the invariants are only
        // claimed for successfully built models.
    }

    #[test]
    fn build_is_deterministic_on_generated_programs(src in program()) {
        let source = SourceFile::new(&src, None);
        let a = lint_semantic::build(&source);
        let b = lint_semantic::build(&source);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.symbols.len(), b.symbols.len());
                prop_assert_eq!(a.scopes.len(), b.scopes.len());
                prop_assert_eq!(a.references.len(), b.references.len());
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "build was non-deterministic across identical runs"),
        }
    }
}
