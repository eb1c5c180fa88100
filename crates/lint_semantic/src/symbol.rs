//! Columnar symbol table (spec §2 component 3, §3 "Symbol").

use crate::flags::SymbolFlags;
use crate::ids::{ReferenceId, ScopeId, SymbolId};
use lint_syntax::NodeIndex;

/// One symbol. Logically a row spread across the table's parallel columns;
/// this struct is the row-oriented view handed back to callers, assembled
/// on read rather than stored this way (spec §9 "columnar struct-of-arrays
/// tables").
#[derive(Debug, Clone)]
pub struct Symbol {
    pub id: SymbolId,
    /// Borrowed slice of source; empty iff anonymous.
    pub name_span: Option<lint_diagnostics::Span>,
    pub debug_name: Option<String>,
    pub token: Option<lint_syntax::TokenIndex>,
    pub scope: ScopeId,
    pub decl: NodeIndex,
    pub visibility: Visibility,
    pub flags: SymbolFlags,
    pub references: Vec<ReferenceId>,
    pub members: Vec<SymbolId>,
    pub exports: Vec<SymbolId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Struct-of-arrays storage for symbols. Each `push_*` call appends one
/// element to every column and returns the new id (spec §9: "Provide a
/// small helper that stores a logical row by appending one element to each
/// column and returning the new id").
#[derive(Debug, Default)]
pub struct SymbolTable {
    name_span: Vec<Option<lint_diagnostics::Span>>,
    debug_name: Vec<Option<String>>,
    token: Vec<Option<lint_syntax::TokenIndex>>,
    scope: Vec<ScopeId>,
    decl: Vec<NodeIndex>,
    visibility: Vec<Visibility>,
    flags: Vec<SymbolFlags>,
    references: Vec<Vec<ReferenceId>>,
    members: Vec<Vec<SymbolId>>,
    exports: Vec<Vec<SymbolId>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        name_span: Option<lint_diagnostics::Span>,
        debug_name: Option<String>,
        token: Option<lint_syntax::TokenIndex>,
        scope: ScopeId,
        decl: NodeIndex,
        visibility: Visibility,
        flags: SymbolFlags,
    ) -> SymbolId {
        let id = SymbolId::new(self.len() as u32);
        self.name_span.push(name_span);
        self.debug_name.push(debug_name);
        self.token.push(token);
        self.scope.push(scope);
        self.decl.push(decl);
        self.visibility.push(visibility);
        self.flags.push(flags);
        self.references.push(Vec::new());
        self.members.push(Vec::new());
        self.exports.push(Vec::new());
        id
    }

    pub fn scope_of(&self, id: SymbolId) -> ScopeId {
        self.scope[id.index()]
    }

    pub fn decl_of(&self, id: SymbolId) -> NodeIndex {
        self.decl[id.index()]
    }

    pub fn flags(&self, id: SymbolId) -> SymbolFlags {
        self.flags[id.index()]
    }

    pub fn visibility(&self, id: SymbolId) -> Visibility {
        self.visibility[id.index()]
    }

    pub fn name<'s>(&self, id: SymbolId, source: &'s str) -> &'s str {
        match self.name_span[id.index()] {
            Some(span) => &source[span.as_range()],
            None => "",
        }
    }

    pub fn debug_name(&self, id: SymbolId) -> Option<&str> {
        self.debug_name[id.index()].as_deref()
    }

    pub fn token(&self, id: SymbolId) -> Option<lint_syntax::TokenIndex> {
        self.token[id.index()]
    }

    pub fn references(&self, id: SymbolId) -> &[ReferenceId] {
        &self.references[id.index()]
    }

    pub fn members(&self, id: SymbolId) -> &[SymbolId] {
        &self.members[id.index()]
    }

    pub fn exports(&self, id: SymbolId) -> &[SymbolId] {
        &self.exports[id.index()]
    }

    pub fn push_member(&mut self, container: SymbolId, member: SymbolId) {
        self.members[container.index()].push(member);
    }

    pub fn push_export(&mut self, container: SymbolId, export: SymbolId) {
        self.exports[container.index()].push(export);
    }

    pub fn push_reference(&mut self, symbol: SymbolId, reference: ReferenceId) {
        self.references[symbol.index()].push(reference);
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolId> {
        (0..self.len() as u32).map(SymbolId::new)
    }

    pub fn row(&self, id: SymbolId) -> Symbol {
        Symbol {
            id,
            name_span: self.name_span[id.index()],
            debug_name: self.debug_name[id.index()].clone(),
            token: self.token[id.index()],
            scope: self.scope[id.index()],
            decl: self.decl[id.index()],
            visibility: self.visibility[id.index()],
            flags: self.flags[id.index()],
            references: self.references[id.index()].clone(),
            members: self.members[id.index()].clone(),
            exports: self.exports[id.index()].clone(),
        }
    }
}
