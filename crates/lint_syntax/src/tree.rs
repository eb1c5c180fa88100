use crate::kind::{ContainerKind, SyntaxKind};
use lint_diagnostics::Span;

/// Index into the parser's node array. `0` denotes both the syntactic root
/// and the absence of a node; callers disambiguate by context (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const ROOT: NodeIndex = NodeIndex(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index into the columnar token array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenIndex(pub u32);

impl TokenIndex {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node-family-specific payload. This is the parser's concrete answer to
/// spec §9's "full node projections": rather than re-deriving structure from
/// a generic child list at lookup time, each node stores exactly the fields
/// its family needs, and `full()` (see `full.rs`) hands out a typed view
/// over this payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    SourceFile {
        decls: Vec<NodeIndex>,
    },
    VarDecl {
        name_token: TokenIndex,
        is_pub: bool,
        is_const: bool,
        is_comptime: bool,
        ty: Option<NodeIndex>,
        value: Option<NodeIndex>,
    },
    ContainerDecl {
        container_kind: ContainerKind,
        fields: Vec<NodeIndex>,
        decls: Vec<NodeIndex>,
    },
    ContainerField {
        name_token: TokenIndex,
        ty: Option<NodeIndex>,
        default: Option<NodeIndex>,
    },
    FnDecl {
        name_token: Option<TokenIndex>,
        is_pub: bool,
        proto: NodeIndex,
        body: Option<NodeIndex>,
    },
    FnProto {
        params: Vec<NodeIndex>,
        /// Token of the return-type expression's identifier, if it is a
        /// single identifier (needed for the `type` keyword comptime-param
        /// rule, spec §4.2).
        return_type_token: Option<TokenIndex>,
    },
    Param {
        name_token: TokenIndex,
        is_comptime: bool,
        ty: Option<NodeIndex>,
    },
    Block {
        stmts: Vec<NodeIndex>,
        is_comptime: bool,
    },
    ExprStmt {
        expr: NodeIndex,
    },
    ReturnStmt {
        value: Option<NodeIndex>,
    },
    BreakStmt,
    ContinueStmt,
    IfStmt {
        cond: NodeIndex,
        then_branch: NodeIndex,
        else_branch: Option<NodeIndex>,
    },
    WhileStmt {
        cond: NodeIndex,
        body: NodeIndex,
    },
    ForStmt {
        iterable: NodeIndex,
        capture_token: Option<TokenIndex>,
        body: NodeIndex,
    },
    SwitchStmt {
        discriminant: NodeIndex,
        cases: Vec<NodeIndex>,
    },
    SwitchCase {
        values: Vec<NodeIndex>,
        body: NodeIndex,
    },
    CatchClause {
        payload_token: Option<TokenIndex>,
        body: NodeIndex,
    },
    TryExpr {
        expr: NodeIndex,
        catch: Option<NodeIndex>,
    },
    ComptimeBlock {
        inner: NodeIndex,
    },
    AssignDestructure {
        is_const: bool,
        bindings: Vec<TokenIndex>,
        value: NodeIndex,
    },
    CallExpr {
        callee: NodeIndex,
        args: Vec<NodeIndex>,
    },
    FieldExpr {
        base: NodeIndex,
        field_token: TokenIndex,
    },
    Identifier {
        token: TokenIndex,
    },
    Literal {
        token: TokenIndex,
    },
    BinaryExpr {
        op_token: TokenIndex,
        lhs: NodeIndex,
        rhs: NodeIndex,
    },
    UnaryExpr {
        op_token: TokenIndex,
        operand: NodeIndex,
    },
    AssignExpr {
        target: NodeIndex,
        value: NodeIndex,
    },
    GroupExpr {
        inner: NodeIndex,
    },
    ArrayInit {
        elements: Vec<NodeIndex>,
    },
    StructInit {
        type_expr: Option<NodeIndex>,
        fields: Vec<NodeIndex>,
    },
    StructInitField {
        name_token: TokenIndex,
        value: NodeIndex,
    },
    ImportExpr {
        specifier_token: TokenIndex,
    },
    Error,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
    pub main_token: TokenIndex,
    pub data: NodeData,
}

/// The parsed syntax tree: a flat, `NodeIndex`-addressed arena plus the
/// columnar token array it was built from (spec §3 "Node... referenced by
/// `NodeIndex`"; §6 "a syntax tree with indexed nodes, a main-token index
/// per node, and node views (full projections)").
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    pub tokens: Vec<crate::token::Token>,
}

impl Tree {
    pub fn new(tokens: Vec<crate::token::Token>) -> Self {
        Tree {
            nodes: Vec::new(),
            tokens,
        }
    }

    /// Append a node, returning its index. Node `0` is reserved for the root
    /// and must be pushed first.
    pub fn push(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        assert!(
            (self.nodes.len() as u64) < (u32::MAX - 1) as u64,
            "node count must stay below 2^32 - 1 (spec §3)"
        );
        self.nodes.push(node);
        idx
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.index()]
    }

    /// Overwrite the root node (index 0) once its children are known. The
    /// parser reserves slot 0 with a placeholder before descending so that
    /// every other node index stays stable, then backfills it here.
    pub fn set_root(&mut self, node: Node) {
        self.nodes[0] = node;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> NodeIndex {
        NodeIndex::ROOT
    }

    pub fn token(&self, idx: TokenIndex) -> &crate::token::Token {
        &self.tokens[idx.index()]
    }

    pub fn token_text<'s>(&self, idx: TokenIndex, source: &'s str) -> &'s str {
        self.token(idx).text(source)
    }

    pub fn iter_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len() as u32).map(NodeIndex)
    }
}
