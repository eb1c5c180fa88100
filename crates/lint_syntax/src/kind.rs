/// The syntactic family of a node. The semantic builder and rule engine
/// dispatch on this tag (spec §9 "variant over full-node projections": "the
/// visitor matches on the node's tag, calls the matching projection").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    VarDecl,
    ContainerDecl,
    ContainerField,
    FnDecl,
    FnProto,
    Param,
    Block,
    ExprStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,
    IfStmt,
    WhileStmt,
    ForStmt,
    SwitchStmt,
    SwitchCase,
    CatchClause,
    TryExpr,
    ComptimeBlock,
    AssignDestructure,
    CallExpr,
    FieldExpr,
    Identifier,
    Literal,
    BinaryExpr,
    UnaryExpr,
    AssignExpr,
    GroupExpr,
    ArrayInit,
    StructInit,
    StructInitField,
    ImportExpr,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Struct,
    Enum,
    Union,
    Error,
}
