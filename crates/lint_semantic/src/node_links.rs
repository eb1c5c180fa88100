//! Node links (spec §2 component 5): parallel arrays indexed by AST node id
//! recording each node's parent node and enclosing scope, plus a sparse map
//! from identifier tokens to the reference they created.

use crate::ids::{ReferenceId, ScopeId};
use lint_syntax::{NodeIndex, TokenIndex};
use std::collections::HashMap;

#[derive(Debug)]
pub struct NodeLinks {
    parent: Vec<NodeIndex>,
    scope: Vec<ScopeId>,
    /// Sparse: most tokens are not identifiers in expression position (spec
    /// invariant 7), so a `HashMap` keyed by raw token index avoids sizing a
    /// dense array to the token count for a field that is mostly absent.
    identifier_to_reference: HashMap<u32, ReferenceId>,
}

impl NodeLinks {
    pub fn new(node_count: usize, root_scope: ScopeId) -> Self {
        NodeLinks {
            parent: vec![NodeIndex::ROOT; node_count],
            scope: vec![root_scope; node_count],
            identifier_to_reference: HashMap::new(),
        }
    }

    pub fn set_parent(&mut self, node: NodeIndex, parent: NodeIndex) {
        self.parent[node.index()] = parent;
    }

    pub fn set_scope(&mut self, node: NodeIndex, scope: ScopeId) {
        self.scope[node.index()] = scope;
    }

    pub fn parent(&self, node: NodeIndex) -> NodeIndex {
        self.parent[node.index()]
    }

    pub fn scope(&self, node: NodeIndex) -> ScopeId {
        self.scope[node.index()]
    }

    pub fn set_identifier_reference(&mut self, token: TokenIndex, reference: ReferenceId) {
        self.identifier_to_reference.insert(token.0, reference);
    }

    pub fn reference_for_identifier(&self, token: TokenIndex) -> Option<ReferenceId> {
        self.identifier_to_reference.get(&token.0).copied()
    }
}
