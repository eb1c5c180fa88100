//! "Full projections" over nodes: per spec §9, "the parser exposes different
//! node families with different 'full' structured views ... represent each
//! view as its own value; the visitor matches on the node's tag, calls the
//! matching projection, and dispatches to the handler."
//!
//! `full()` is the single entry point: given a node whose `kind` names one of
//! the families spec §6 lists, it returns the matching typed view, or `None`
//! if the node's `kind` doesn't correspond to any known family. A `kind`
//! that names a family but whose stored `data` doesn't match that family is
//! an internal inconsistency the parser must never produce; callers (the
//! semantic builder) treat that combination as the `FullMismatch` builder
//! invariant violation described in spec §4.2/§7.

use crate::kind::SyntaxKind;
use crate::tree::{NodeData, NodeIndex, Tree};

macro_rules! view {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'t> {
            pub node: NodeIndex,
            pub tree: &'t Tree,
        }

        impl<'t> $name<'t> {
            fn data(&self) -> &'t NodeData {
                &self.tree.node(self.node).data
            }
        }
    };
}

view!(ContainerDeclView);
view!(ContainerFieldView);
view!(VarDeclView);
view!(FnProtoView);
view!(CallView);
view!(WhileView);
view!(ForView);
view!(IfView);
view!(SwitchCaseView);
view!(AssignDestructureView);
view!(ArrayInitView);
view!(StructInitView);

impl<'t> ContainerDeclView<'t> {
    pub fn container_kind(&self) -> crate::kind::ContainerKind {
        match self.data() {
            NodeData::ContainerDecl { container_kind, .. } => *container_kind,
            _ => unreachable!("full() guarantees kind/data agreement"),
        }
    }
    pub fn fields(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::ContainerDecl { fields, .. } => fields,
            _ => unreachable!(),
        }
    }
    pub fn decls(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::ContainerDecl { decls, .. } => decls,
            _ => unreachable!(),
        }
    }
}

impl<'t> ContainerFieldView<'t> {
    pub fn name_token(&self) -> crate::tree::TokenIndex {
        match self.data() {
            NodeData::ContainerField { name_token, .. } => *name_token,
            _ => unreachable!(),
        }
    }
    pub fn ty(&self) -> Option<NodeIndex> {
        match self.data() {
            NodeData::ContainerField { ty, .. } => *ty,
            _ => unreachable!(),
        }
    }
    pub fn default(&self) -> Option<NodeIndex> {
        match self.data() {
            NodeData::ContainerField { default, .. } => *default,
            _ => unreachable!(),
        }
    }
}

impl<'t> VarDeclView<'t> {
    pub fn name_token(&self) -> crate::tree::TokenIndex {
        match self.data() {
            NodeData::VarDecl { name_token, .. } => *name_token,
            _ => unreachable!(),
        }
    }
    pub fn is_pub(&self) -> bool {
        match self.data() {
            NodeData::VarDecl { is_pub, .. } => *is_pub,
            _ => unreachable!(),
        }
    }
    pub fn is_const(&self) -> bool {
        match self.data() {
            NodeData::VarDecl { is_const, .. } => *is_const,
            _ => unreachable!(),
        }
    }
    pub fn is_comptime(&self) -> bool {
        match self.data() {
            NodeData::VarDecl { is_comptime, .. } => *is_comptime,
            _ => unreachable!(),
        }
    }
    pub fn ty(&self) -> Option<NodeIndex> {
        match self.data() {
            NodeData::VarDecl { ty, .. } => *ty,
            _ => unreachable!(),
        }
    }
    pub fn value(&self) -> Option<NodeIndex> {
        match self.data() {
            NodeData::VarDecl { value, .. } => *value,
            _ => unreachable!(),
        }
    }
}

impl<'t> FnProtoView<'t> {
    pub fn params(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::FnProto { params, .. } => params,
            _ => unreachable!(),
        }
    }
    pub fn return_type_token(&self) -> Option<crate::tree::TokenIndex> {
        match self.data() {
            NodeData::FnProto {
                return_type_token, ..
            } => *return_type_token,
            _ => unreachable!(),
        }
    }
}

impl<'t> CallView<'t> {
    pub fn callee(&self) -> NodeIndex {
        match self.data() {
            NodeData::CallExpr { callee, .. } => *callee,
            _ => unreachable!(),
        }
    }
    pub fn args(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::CallExpr { args, .. } => args,
            _ => unreachable!(),
        }
    }
}

impl<'t> WhileView<'t> {
    pub fn cond(&self) -> NodeIndex {
        match self.data() {
            NodeData::WhileStmt { cond, .. } => *cond,
            _ => unreachable!(),
        }
    }
    pub fn body(&self) -> NodeIndex {
        match self.data() {
            NodeData::WhileStmt { body, .. } => *body,
            _ => unreachable!(),
        }
    }
}

impl<'t> ForView<'t> {
    pub fn iterable(&self) -> NodeIndex {
        match self.data() {
            NodeData::ForStmt { iterable, .. } => *iterable,
            _ => unreachable!(),
        }
    }
    pub fn body(&self) -> NodeIndex {
        match self.data() {
            NodeData::ForStmt { body, .. } => *body,
            _ => unreachable!(),
        }
    }
    pub fn capture_token(&self) -> Option<crate::tree::TokenIndex> {
        match self.data() {
            NodeData::ForStmt { capture_token, .. } => *capture_token,
            _ => unreachable!(),
        }
    }
}

impl<'t> IfView<'t> {
    pub fn cond(&self) -> NodeIndex {
        match self.data() {
            NodeData::IfStmt { cond, .. } => *cond,
            _ => unreachable!(),
        }
    }
    pub fn then_branch(&self) -> NodeIndex {
        match self.data() {
            NodeData::IfStmt { then_branch, .. } => *then_branch,
            _ => unreachable!(),
        }
    }
    pub fn else_branch(&self) -> Option<NodeIndex> {
        match self.data() {
            NodeData::IfStmt { else_branch, .. } => *else_branch,
            _ => unreachable!(),
        }
    }
}

impl<'t> SwitchCaseView<'t> {
    pub fn values(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::SwitchCase { values, .. } => values,
            _ => unreachable!(),
        }
    }
    pub fn body(&self) -> NodeIndex {
        match self.data() {
            NodeData::SwitchCase { body, .. } => *body,
            _ => unreachable!(),
        }
    }
}

impl<'t> AssignDestructureView<'t> {
    pub fn is_const(&self) -> bool {
        match self.data() {
            NodeData::AssignDestructure { is_const, .. } => *is_const,
            _ => unreachable!(),
        }
    }
    pub fn bindings(&self) -> &'t [crate::tree::TokenIndex] {
        match self.data() {
            NodeData::AssignDestructure { bindings, .. } => bindings,
            _ => unreachable!(),
        }
    }
    pub fn value(&self) -> NodeIndex {
        match self.data() {
            NodeData::AssignDestructure { value, .. } => *value,
            _ => unreachable!(),
        }
    }
}

impl<'t> ArrayInitView<'t> {
    pub fn elements(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::ArrayInit { elements } => elements,
            _ => unreachable!(),
        }
    }
}

impl<'t> StructInitView<'t> {
    pub fn fields(&self) -> &'t [NodeIndex] {
        match self.data() {
            NodeData::StructInit { fields, .. } => fields,
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Full<'t> {
    ContainerDecl(ContainerDeclView<'t>),
    ContainerField(ContainerFieldView<'t>),
    VarDecl(VarDeclView<'t>),
    FnProto(FnProtoView<'t>),
    Call(CallView<'t>),
    While(WhileView<'t>),
    For(ForView<'t>),
    If(IfView<'t>),
    SwitchCase(SwitchCaseView<'t>),
    AssignDestructure(AssignDestructureView<'t>),
    ArrayInit(ArrayInitView<'t>),
    StructInit(StructInitView<'t>),
}

/// Produce the full projection for `node`, or `None` if its `kind` is not
/// one of the families that has one (e.g. `Identifier`, `Literal`).
pub fn full(tree: &Tree, node: NodeIndex) -> Option<Full<'_>> {
    let kind = tree.node(node).kind;
    Some(match kind {
        SyntaxKind::ContainerDecl => Full::ContainerDecl(ContainerDeclView { node, tree }),
        SyntaxKind::ContainerField => Full::ContainerField(ContainerFieldView { node, tree }),
        SyntaxKind::VarDecl => Full::VarDecl(VarDeclView { node, tree }),
        SyntaxKind::FnProto => Full::FnProto(FnProtoView { node, tree }),
        SyntaxKind::CallExpr => Full::Call(CallView { node, tree }),
        SyntaxKind::WhileStmt => Full::While(WhileView { node, tree }),
        SyntaxKind::ForStmt => Full::For(ForView { node, tree }),
        SyntaxKind::IfStmt => Full::If(IfView { node, tree }),
        SyntaxKind::SwitchCase => Full::SwitchCase(SwitchCaseView { node, tree }),
        SyntaxKind::AssignDestructure => {
            Full::AssignDestructure(AssignDestructureView { node, tree })
        }
        SyntaxKind::ArrayInit => Full::ArrayInit(ArrayInitView { node, tree }),
        SyntaxKind::StructInit => Full::StructInit(StructInitView { node, tree }),
        _ => return None,
    })
}
