//! Reference table (spec §3 "Reference"). Kept as its own columnar table
//! rather than folded into `SymbolTable`/`NodeLinks` since it is indexed by
//! its own dense id (`ReferenceId`) and has its own "unresolved" side list.

use crate::flags::ReferenceFlags;
use crate::ids::{OptionalSymbolId, ReferenceId, ScopeId, SymbolId};
use lint_diagnostics::Span;
use lint_syntax::NodeIndex;

#[derive(Debug, Clone)]
pub struct Reference {
    pub id: ReferenceId,
    pub symbol: Option<SymbolId>,
    pub scope: ScopeId,
    pub node: NodeIndex,
    /// Borrowed slice of source naming the identifier (spec §3: "identifier
    /// (borrowed slice)"); stored as a span since the table itself doesn't
    /// hold a reference to the source string.
    pub identifier: Span,
    pub flags: ReferenceFlags,
}

#[derive(Debug, Default)]
pub struct ReferenceTable {
    symbol: Vec<OptionalSymbolId>,
    scope: Vec<ScopeId>,
    node: Vec<NodeIndex>,
    identifier: Vec<Span>,
    flags: Vec<ReferenceFlags>,
    /// References whose `symbol` is `None` (spec invariant 4).
    unresolved: Vec<ReferenceId>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(
        &mut self,
        symbol: Option<SymbolId>,
        scope: ScopeId,
        node: NodeIndex,
        identifier: Span,
        flags: ReferenceFlags,
    ) -> ReferenceId {
        let id = ReferenceId::new(self.len() as u32);
        self.symbol.push(symbol.into());
        self.scope.push(scope);
        self.node.push(node);
        self.identifier.push(identifier);
        self.flags.push(flags);
        if symbol.is_none() {
            self.unresolved.push(id);
        }
        id
    }

    pub fn symbol(&self, id: ReferenceId) -> Option<SymbolId> {
        self.symbol[id.index()].get()
    }

    pub fn scope(&self, id: ReferenceId) -> ScopeId {
        self.scope[id.index()]
    }

    pub fn node(&self, id: ReferenceId) -> NodeIndex {
        self.node[id.index()]
    }

    pub fn identifier_span(&self, id: ReferenceId) -> Span {
        self.identifier[id.index()]
    }

    pub fn flags(&self, id: ReferenceId) -> ReferenceFlags {
        self.flags[id.index()]
    }

    pub fn unresolved(&self) -> &[ReferenceId] {
        &self.unresolved
    }

    pub fn iter(&self) -> impl Iterator<Item = ReferenceId> {
        (0..self.len() as u32).map(ReferenceId::new)
    }

    pub fn row(&self, id: ReferenceId) -> Reference {
        Reference {
            id,
            symbol: self.symbol(id),
            scope: self.scope(id),
            node: self.node(id),
            identifier: self.identifier_span(id),
            flags: self.flags(id),
        }
    }
}
