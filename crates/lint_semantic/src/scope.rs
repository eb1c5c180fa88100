//! Columnar scope tree (spec §2 component 4, §3 "Scope").

use crate::flags::ScopeFlags;
use crate::ids::{OptionalScopeId, ScopeId, SymbolId};

/// One scope. Assembled on read from the tree's columns, same convention as
/// [`crate::symbol::Symbol`].
#[derive(Debug, Clone)]
pub struct Scope {
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
    pub flags: ScopeFlags,
    pub children: Vec<ScopeId>,
    pub bindings: Vec<SymbolId>,
}

/// Struct-of-arrays storage for scopes, with `children`/`bindings` kept as
/// external side-tables indexed by scope id (spec §3: "Two external
/// side-tables indexed by scope id").
#[derive(Debug, Default)]
pub struct ScopeTree {
    parent: Vec<OptionalScopeId>,
    flags: Vec<ScopeFlags>,
    children: Vec<Vec<ScopeId>>,
    bindings: Vec<Vec<SymbolId>>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push a new scope, linking it into its parent's `children` (spec
    /// invariant 1: "All other scopes have a parent whose index is strictly
    /// less", which holds here since `parent` must already exist to be
    /// passed in).
    pub fn push(&mut self, parent: Option<ScopeId>, flags: ScopeFlags) -> ScopeId {
        let id = ScopeId::new(self.len() as u32);
        self.parent.push(parent.into());
        self.flags.push(flags);
        self.children.push(Vec::new());
        self.bindings.push(Vec::new());
        if let Some(p) = parent {
            self.children[p.index()].push(id);
        }
        id
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.parent[id.index()].get()
    }

    pub fn flags(&self, id: ScopeId) -> ScopeFlags {
        self.flags[id.index()]
    }

    pub fn children(&self, id: ScopeId) -> &[ScopeId] {
        &self.children[id.index()]
    }

    pub fn bindings(&self, id: ScopeId) -> &[SymbolId] {
        &self.bindings[id.index()]
    }

    pub fn push_binding(&mut self, scope: ScopeId, symbol: SymbolId) {
        self.bindings[scope.index()].push(symbol);
    }

    /// `id`, then its parent, grandparent, ... terminating at the root
    /// (spec §4.2: "Reference creation ... walking the scope parent chain").
    pub fn ancestors(&self, id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        let mut cur = Some(id);
        std::iter::from_fn(move || {
            let this = cur?;
            cur = self.parent(this);
            Some(this)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = ScopeId> {
        (0..self.len() as u32).map(ScopeId::new)
    }

    pub fn row(&self, id: ScopeId) -> Scope {
        Scope {
            id,
            parent: self.parent(id),
            flags: self.flags(id),
            children: self.children(id).to_vec(),
            bindings: self.bindings(id).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent_and_children_link() {
        let mut tree = ScopeTree::new();
        let root = tree.push(None, ScopeFlags::TOP);
        let child = tree.push(Some(root), ScopeFlags::BLOCK);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), &[child]);
    }

    #[test]
    fn ancestors_terminate_at_root() {
        let mut tree = ScopeTree::new();
        let root = tree.push(None, ScopeFlags::TOP);
        let mid = tree.push(Some(root), ScopeFlags::BLOCK);
        let leaf = tree.push(Some(mid), ScopeFlags::BLOCK);
        let chain: Vec<_> = tree.ancestors(leaf).collect();
        assert_eq!(chain, vec![leaf, mid, root]);
    }
}
