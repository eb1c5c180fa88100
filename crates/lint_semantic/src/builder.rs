//! Single-pass semantic builder (spec §2 component 7, §4.2).
//!
//! One recursive walk of the syntax tree from the synthetic root. At each
//! node the builder pushes onto three stacks — node stack, scope stack,
//! container-symbol stack — and pops on exit, encoding context for the rest
//! of the walk (spec §4.2 "Traversal").

use crate::errors::BuilderError;
use crate::flags::{ReferenceFlags, ScopeFlags, SymbolFlags};
use crate::ids::{ScopeId, SymbolId};
use crate::module::{classify_specifier, ModuleRecord};
use crate::node_links::NodeLinks;
use crate::reference::ReferenceTable;
use crate::scope::ScopeTree;
use crate::symbol::{SymbolTable, Visibility};
use lint_syntax::{full, Full, NodeData, NodeIndex, SyntaxKind, Tree};

pub(crate) struct Builder<'t> {
    tree: &'t Tree,
    source: &'t str,
    pub(crate) symbols: SymbolTable,
    pub(crate) scopes: ScopeTree,
    pub(crate) node_links: NodeLinks,
    pub(crate) references: ReferenceTable,
    pub(crate) modules: ModuleRecord,
    node_stack: Vec<NodeIndex>,
    scope_stack: Vec<(ScopeId, ScopeFlags)>,
    /// Which symbol receives `members`/`exports` for declarations
    /// encountered right now. Pushes are only permitted for non-member
    /// symbols (spec invariant 5).
    container_stack: Vec<SymbolId>,
    comptime_depth: u32,
}

impl<'t> Builder<'t> {
    pub(crate) fn new(tree: &'t Tree, source: &'t str) -> Self {
        let mut scopes = ScopeTree::new();
        let root_scope = scopes.push(None, ScopeFlags::TOP);
        let mut symbols = SymbolTable::new();
        let root_symbol = symbols.push(
            None,
            Some("<root>".to_string()),
            None,
            root_scope,
            NodeIndex::ROOT,
            Visibility::Public,
            SymbolFlags::empty(),
        );

        Builder {
            tree,
            source,
            node_links: NodeLinks::new(tree.node_count(), root_scope),
            symbols,
            scopes,
            references: ReferenceTable::new(),
            modules: ModuleRecord::new(),
            node_stack: Vec::new(),
            scope_stack: vec![(root_scope, ScopeFlags::TOP)],
            container_stack: vec![root_symbol],
            comptime_depth: 0,
        }
    }

    pub(crate) fn run(&mut self) -> Result<(), BuilderError> {
        let root = self.tree.root();
        self.enter_node(root);
        let decls = match &self.tree.node(root).data {
            NodeData::SourceFile { decls } => decls.clone(),
            _ => return Err(BuilderError::full_mismatch(root, "expected SourceFile at node 0")),
        };
        for decl in decls {
            self.visit_decl(decl)?;
        }
        self.exit_node();
        debug_assert!(self.node_stack.is_empty(), "stack imbalance after traversal");
        Ok(())
    }

    // ---- stack discipline ----

    fn current_scope(&self) -> ScopeId {
        self.scope_stack.last().unwrap().0
    }

    fn current_scope_flags(&self) -> ScopeFlags {
        self.scope_stack.last().unwrap().1
    }

    fn effective_comptime(&self) -> bool {
        self.current_scope_flags().contains(ScopeFlags::COMPTIME) || self.comptime_depth > 0
    }

    /// Create a child scope of the current one, folding in the inherited
    /// `comptime` bit (spec §4.2 "flags merging: when a new scope inherits
    /// from a comptime context, its own comptime bit is set").
    fn push_scope(&mut self, mut flags: ScopeFlags) -> ScopeId {
        if self.effective_comptime() {
            flags |= ScopeFlags::COMPTIME;
        }
        let id = self.scopes.push(Some(self.current_scope()), flags);
        self.scope_stack.push((id, flags));
        id
    }

    fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// A debug-only loop detector panics if the same node id appears twice
    /// on the node stack (spec §4.2).
    fn enter_node(&mut self, node: NodeIndex) {
        debug_assert!(
            !self.node_stack.contains(&node),
            "cycle in traversal: node {:?} visited twice",
            node
        );
        let parent = self.node_stack.last().copied().unwrap_or(NodeIndex::ROOT);
        let scope = self.current_scope();
        self.node_links.set_parent(node, parent);
        self.node_links.set_scope(node, scope);
        self.node_stack.push(node);
    }

    fn exit_node(&mut self) {
        self.node_stack.pop();
    }

    // ---- declarations ----

    /// Top-level / container-body declarations: `const`/`var`/`fn`. These
    /// become `exports` of the enclosing container symbol (spec §4.2
    /// "Member vs export": "Nested declarations ... go into exports"; file-
    /// level declarations are treated the same way, against the root
    /// container symbol — see `DESIGN.md` for the reasoning).
    fn visit_decl(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        match self.tree.node(idx).kind {
            SyntaxKind::VarDecl => self.visit_var_decl(idx, true),
            SyntaxKind::FnDecl => self.visit_fn_decl(idx),
            SyntaxKind::Error => {
                self.enter_node(idx);
                self.exit_node();
                Ok(())
            }
            _ => Err(BuilderError::full_mismatch(idx, "expected a declaration")),
        }
    }

    fn visit_var_decl(&mut self, idx: NodeIndex, want_export: bool) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::VarDecl(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "VarDecl")),
        };
        let name_token = view.name_token();
        let scope = self.current_scope();

        let mut flags = SymbolFlags::VARIABLE;
        if view.is_const() {
            flags |= SymbolFlags::CONST;
        }
        if view.is_comptime() {
            flags |= SymbolFlags::COMPTIME;
        }
        let visibility = if view.is_pub() {
            Visibility::Public
        } else {
            Visibility::Private
        };
        let name_span = Some(self.tree.token(name_token).span);
        let symbol = self
            .symbols
            .push(name_span, None, Some(name_token), scope, idx, visibility, flags);
        self.scopes.push_binding(scope, symbol);
        if want_export {
            let container = *self.container_stack.last().unwrap();
            self.symbols.push_export(container, symbol);
        }

        if let Some(ty) = view.ty() {
            self.visit_expr(ty, ReferenceFlags::TYPE)?;
        }

        // Entering the initializer pushes the new symbol on the
        // container-symbol stack so that struct-expression members are
        // recorded as this symbol's members (spec §4.2).
        self.container_stack.push(symbol);
        if let Some(value) = view.value() {
            self.visit_expr(value, ReferenceFlags::READ)?;
        }
        self.container_stack.pop();

        self.exit_node();
        Ok(())
    }

    fn visit_fn_decl(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (name_token, is_pub, proto, body) = match &self.tree.node(idx).data {
            NodeData::FnDecl {
                name_token,
                is_pub,
                proto,
                body,
            } => (*name_token, *is_pub, *proto, *body),
            _ => return Err(BuilderError::full_mismatch(idx, "FnDecl")),
        };
        let scope = self.current_scope();
        let visibility = if is_pub {
            Visibility::Public
        } else {
            Visibility::Private
        };
        let (name_span, debug_name) = match name_token {
            Some(t) => (Some(self.tree.token(t).span), None),
            None => (None, Some("<anonymous fn>".to_string())),
        };
        let symbol = self.symbols.push(
            name_span,
            debug_name,
            name_token,
            scope,
            idx,
            visibility,
            SymbolFlags::FN,
        );
        self.scopes.push_binding(scope, symbol);
        let container = *self.container_stack.last().unwrap();
        self.symbols.push_export(container, symbol);

        self.visit_fn_proto(proto, body)?;

        self.exit_node();
        Ok(())
    }

    /// Its parameters live in an outer sub-scope (own scope so shadowing by
    /// the body is illegal); the body is a fresh child scope (spec §4.2
    /// "Function declaration").
    fn visit_fn_proto(&mut self, proto: NodeIndex, body: Option<NodeIndex>) -> Result<(), BuilderError> {
        self.enter_node(proto);
        let view = match full(self.tree, proto) {
            Some(Full::FnProto(v)) => v,
            _ => return Err(BuilderError::full_mismatch(proto, "FnProto")),
        };
        let params = view.params().to_vec();

        let is_type_return = view
            .return_type_token()
            .map(|t| self.tree.token_text(t, self.source) == "type")
            .unwrap_or(false);
        let any_comptime_param = params.iter().any(|&p| {
            matches!(
                &self.tree.node(p).data,
                NodeData::Param { is_comptime: true, .. }
            )
        });

        let mut proto_flags = ScopeFlags::FUNCTION;
        if any_comptime_param || is_type_return {
            proto_flags |= ScopeFlags::COMPTIME;
        }
        self.push_scope(proto_flags);
        for &p in &params {
            self.visit_param(p)?;
        }

        if let Some(body) = body {
            self.visit_block(body, true)?;
        }
        self.pop_scope();

        self.exit_node();
        Ok(())
    }

    fn visit_param(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (name_token, is_comptime, ty) = match &self.tree.node(idx).data {
            NodeData::Param {
                name_token,
                is_comptime,
                ty,
            } => (*name_token, *is_comptime, *ty),
            _ => return Err(BuilderError::full_mismatch(idx, "Param")),
        };
        let scope = self.current_scope();
        let mut flags = SymbolFlags::FN_PARAM | SymbolFlags::CONST;
        if is_comptime {
            flags |= SymbolFlags::COMPTIME;
        }
        let name_span = Some(self.tree.token(name_token).span);
        let symbol = self.symbols.push(
            name_span,
            None,
            Some(name_token),
            scope,
            idx,
            Visibility::Private,
            flags,
        );
        self.scopes.push_binding(scope, symbol);
        if let Some(ty) = ty {
            self.visit_expr(ty, ReferenceFlags::TYPE)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_container_field(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::ContainerField(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "ContainerField")),
        };
        let name_token = view.name_token();
        let scope = self.current_scope();
        let name_span = Some(self.tree.token(name_token).span);
        let symbol = self.symbols.push(
            name_span,
            None,
            Some(name_token),
            scope,
            idx,
            Visibility::Public,
            SymbolFlags::MEMBER,
        );
        self.scopes.push_binding(scope, symbol);
        let container = *self.container_stack.last().unwrap();
        self.symbols.push_member(container, symbol);

        if let Some(ty) = view.ty() {
            self.visit_expr(ty, ReferenceFlags::TYPE)?;
        }
        // A member symbol can never hold members (invariant 5), so the
        // default initializer is visited as a plain expression without
        // pushing this symbol onto the container stack.
        if let Some(default) = view.default() {
            self.visit_expr(default, ReferenceFlags::READ)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_container_decl(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::ContainerDecl(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "ContainerDecl")),
        };
        let kind_flag = match view.container_kind() {
            lint_syntax::ContainerKind::Struct => ScopeFlags::STRUCT,
            lint_syntax::ContainerKind::Enum => ScopeFlags::ENUM,
            lint_syntax::ContainerKind::Union => ScopeFlags::UNION,
            lint_syntax::ContainerKind::Error => ScopeFlags::ERROR,
        };
        self.push_scope(kind_flag);
        for &f in view.fields() {
            self.visit_container_field(f)?;
        }
        for &d in view.decls() {
            self.visit_decl(d)?;
        }
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    // ---- statements ----

    fn visit_stmt(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        match self.tree.node(idx).kind {
            SyntaxKind::VarDecl => self.visit_var_decl(idx, false),
            SyntaxKind::AssignDestructure => self.visit_assign_destructure(idx),
            SyntaxKind::ReturnStmt => {
                self.enter_node(idx);
                let value = match &self.tree.node(idx).data {
                    NodeData::ReturnStmt { value } => *value,
                    _ => return Err(BuilderError::full_mismatch(idx, "ReturnStmt")),
                };
                if let Some(v) = value {
                    self.visit_expr(v, ReferenceFlags::READ)?;
                }
                self.exit_node();
                Ok(())
            }
            SyntaxKind::BreakStmt | SyntaxKind::ContinueStmt => {
                self.enter_node(idx);
                self.exit_node();
                Ok(())
            }
            SyntaxKind::IfStmt => self.visit_if(idx),
            SyntaxKind::WhileStmt => self.visit_while(idx),
            SyntaxKind::ForStmt => self.visit_for(idx),
            SyntaxKind::SwitchStmt => self.visit_switch(idx),
            SyntaxKind::ComptimeBlock => self.visit_comptime_block(idx),
            SyntaxKind::Block => self.visit_block(idx, false),
            SyntaxKind::ExprStmt => {
                self.enter_node(idx);
                let expr = match &self.tree.node(idx).data {
                    NodeData::ExprStmt { expr } => *expr,
                    _ => return Err(BuilderError::full_mismatch(idx, "ExprStmt")),
                };
                self.visit_expr(expr, ReferenceFlags::READ)?;
                self.exit_node();
                Ok(())
            }
            SyntaxKind::Error => {
                self.enter_node(idx);
                self.exit_node();
                Ok(())
            }
            _ => Err(BuilderError::full_mismatch(idx, "expected a statement")),
        }
    }

    /// Every block statement creates a scope, inheriting `comptime` if set
    /// (spec §4.2). A block that serves as a function body is tagged
    /// `function` instead of `block`.
    fn visit_block(&mut self, idx: NodeIndex, is_fn_body: bool) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (stmts, block_comptime) = match &self.tree.node(idx).data {
            NodeData::Block { stmts, is_comptime } => (stmts.clone(), *is_comptime),
            _ => return Err(BuilderError::full_mismatch(idx, "Block")),
        };
        let base = if is_fn_body {
            ScopeFlags::FUNCTION
        } else {
            ScopeFlags::BLOCK
        };
        let flags = if block_comptime { base | ScopeFlags::COMPTIME } else { base };
        self.push_scope(flags);
        for &s in &stmts {
            self.visit_stmt(s)?;
        }
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    fn visit_if(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::If(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "IfStmt")),
        };
        self.visit_expr(view.cond(), ReferenceFlags::READ)?;
        self.visit_stmt(view.then_branch())?;
        if let Some(e) = view.else_branch() {
            self.visit_stmt(e)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_while(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::While(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "WhileStmt")),
        };
        self.visit_expr(view.cond(), ReferenceFlags::READ)?;
        self.visit_stmt(view.body())?;
        self.exit_node();
        Ok(())
    }

    /// The `for` loop's `|capture|`, if present, declares a local symbol.
    /// The spec's declaration-rule list (§4.2) does not name this case
    /// explicitly; we bind it to a dedicated scope wrapping the loop body
    /// the same way a `catch` payload gets one, which is the closest named
    /// precedent in §4.2 (see `DESIGN.md`).
    fn visit_for(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::For(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "ForStmt")),
        };
        self.visit_expr(view.iterable(), ReferenceFlags::READ)?;
        self.push_scope(ScopeFlags::BLOCK);
        if let Some(cap) = view.capture_token() {
            let scope = self.current_scope();
            let name_span = Some(self.tree.token(cap).span);
            let symbol = self.symbols.push(
                name_span,
                None,
                Some(cap),
                scope,
                idx,
                Visibility::Private,
                SymbolFlags::VARIABLE | SymbolFlags::CONST,
            );
            self.scopes.push_binding(scope, symbol);
        }
        self.visit_stmt(view.body())?;
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    /// A `switch` creates one scope whose children are per-case scopes
    /// (spec §4.2).
    fn visit_switch(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (discriminant, cases) = match &self.tree.node(idx).data {
            NodeData::SwitchStmt { discriminant, cases } => (*discriminant, cases.clone()),
            _ => return Err(BuilderError::full_mismatch(idx, "SwitchStmt")),
        };
        self.visit_expr(discriminant, ReferenceFlags::READ)?;
        self.push_scope(ScopeFlags::BLOCK);
        for case in cases {
            self.visit_switch_case(case)?;
        }
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    fn visit_switch_case(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::SwitchCase(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "SwitchCase")),
        };
        for &v in view.values() {
            self.visit_expr(v, ReferenceFlags::READ)?;
        }
        self.push_scope(ScopeFlags::BLOCK);
        self.visit_stmt(view.body())?;
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    /// `comptime { ... }` (or `comptime <stmt>;`) adds `comptime` to the
    /// current flags for its subtree (spec §4.2); modeled as a depth
    /// counter so every scope created while inside one inherits the bit,
    /// regardless of how many statements deep.
    fn visit_comptime_block(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let inner = match &self.tree.node(idx).data {
            NodeData::ComptimeBlock { inner } => *inner,
            _ => return Err(BuilderError::full_mismatch(idx, "ComptimeBlock")),
        };
        self.comptime_depth += 1;
        let result = self.visit_stmt(inner);
        self.comptime_depth -= 1;
        result?;
        self.exit_node();
        Ok(())
    }

    /// Each LHS name declares a symbol whose const-ness follows the
    /// destructure's keyword (spec §4.2 "Assignment-destructure").
    fn visit_assign_destructure(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::AssignDestructure(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "AssignDestructure")),
        };
        let scope = self.current_scope();
        let mut flags = SymbolFlags::VARIABLE;
        if view.is_const() {
            flags |= SymbolFlags::CONST;
        }
        for &tok in view.bindings() {
            let name_span = Some(self.tree.token(tok).span);
            let symbol = self
                .symbols
                .push(name_span, None, Some(tok), scope, idx, Visibility::Private, flags);
            self.scopes.push_binding(scope, symbol);
        }
        self.visit_expr(view.value(), ReferenceFlags::READ)?;
        self.exit_node();
        Ok(())
    }

    /// If the clause uses a `|name|` payload, declare a symbol with
    /// `s_catch_param` in the catch scope (spec §4.2 "Catch payload").
    fn visit_catch_clause(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (payload_token, body) = match &self.tree.node(idx).data {
            NodeData::CatchClause { payload_token, body } => (*payload_token, *body),
            _ => return Err(BuilderError::full_mismatch(idx, "CatchClause")),
        };
        self.push_scope(ScopeFlags::CATCH);
        if let Some(p) = payload_token {
            let scope = self.current_scope();
            let name_span = Some(self.tree.token(p).span);
            let symbol = self.symbols.push(
                name_span,
                None,
                Some(p),
                scope,
                idx,
                Visibility::Private,
                SymbolFlags::PAYLOAD | SymbolFlags::CATCH_PARAM,
            );
            self.scopes.push_binding(scope, symbol);
        }
        if self.tree.node(body).kind == SyntaxKind::Block {
            self.visit_block(body, false)?;
        } else {
            self.visit_expr(body, ReferenceFlags::READ)?;
        }
        self.pop_scope();
        self.exit_node();
        Ok(())
    }

    // ---- expressions ----

    fn visit_expr(&mut self, idx: NodeIndex, role: ReferenceFlags) -> Result<(), BuilderError> {
        match self.tree.node(idx).kind {
            SyntaxKind::ContainerDecl => self.visit_container_decl(idx),
            SyntaxKind::Identifier => self.visit_identifier(idx, role),
            SyntaxKind::Literal => {
                self.enter_node(idx);
                self.exit_node();
                Ok(())
            }
            SyntaxKind::FieldExpr => self.visit_field_chain(idx, role),
            SyntaxKind::CallExpr => self.visit_call(idx),
            SyntaxKind::BinaryExpr => self.visit_binary(idx),
            SyntaxKind::UnaryExpr => self.visit_unary(idx),
            SyntaxKind::AssignExpr => self.visit_assign(idx),
            SyntaxKind::GroupExpr => self.visit_group(idx, role),
            SyntaxKind::ArrayInit => self.visit_array_init(idx),
            SyntaxKind::StructInit => self.visit_struct_init(idx),
            SyntaxKind::ImportExpr => self.visit_import(idx),
            SyntaxKind::TryExpr => self.visit_try(idx, role),
            SyntaxKind::Error => {
                self.enter_node(idx);
                self.exit_node();
                Ok(())
            }
            _ => Err(BuilderError::full_mismatch(idx, "expected an expression")),
        }
    }

    fn visit_identifier(&mut self, idx: NodeIndex, role: ReferenceFlags) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let token = match &self.tree.node(idx).data {
            NodeData::Identifier { token } => *token,
            _ => return Err(BuilderError::full_mismatch(idx, "Identifier")),
        };
        self.create_reference(token, idx, role);
        self.exit_node();
        Ok(())
    }

    /// `a.b.c` yields one reference per component; `member` is set on all
    /// but the last (spec §3). Recursing through the AST (rather than
    /// flattening first) keeps node-link parent/scope bookkeeping exact for
    /// every intermediate `FieldExpr`.
    fn visit_field_chain(&mut self, idx: NodeIndex, role: ReferenceFlags) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (base, field_token) = match &self.tree.node(idx).data {
            NodeData::FieldExpr { base, field_token } => (*base, *field_token),
            _ => return Err(BuilderError::full_mismatch(idx, "FieldExpr")),
        };
        let base_role = role | ReferenceFlags::MEMBER;
        self.visit_expr(base, base_role)?;
        self.create_reference(field_token, idx, role);
        self.exit_node();
        Ok(())
    }

    fn visit_call(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (callee, args) = match &self.tree.node(idx).data {
            NodeData::CallExpr { callee, args } => (*callee, args.clone()),
            _ => return Err(BuilderError::full_mismatch(idx, "CallExpr")),
        };
        self.visit_expr(callee, ReferenceFlags::CALL)?;
        for a in args {
            self.visit_expr(a, ReferenceFlags::READ)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_binary(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (lhs, rhs) = match &self.tree.node(idx).data {
            NodeData::BinaryExpr { lhs, rhs, .. } => (*lhs, *rhs),
            _ => return Err(BuilderError::full_mismatch(idx, "BinaryExpr")),
        };
        self.visit_expr(lhs, ReferenceFlags::READ)?;
        self.visit_expr(rhs, ReferenceFlags::READ)?;
        self.exit_node();
        Ok(())
    }

    fn visit_unary(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let operand = match &self.tree.node(idx).data {
            NodeData::UnaryExpr { operand, .. } => *operand,
            _ => return Err(BuilderError::full_mismatch(idx, "UnaryExpr")),
        };
        self.visit_expr(operand, ReferenceFlags::READ)?;
        self.exit_node();
        Ok(())
    }

    fn visit_assign(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (target, value) = match &self.tree.node(idx).data {
            NodeData::AssignExpr { target, value } => (*target, *value),
            _ => return Err(BuilderError::full_mismatch(idx, "AssignExpr")),
        };
        self.visit_expr(target, ReferenceFlags::WRITE)?;
        self.visit_expr(value, ReferenceFlags::READ)?;
        self.exit_node();
        Ok(())
    }

    fn visit_group(&mut self, idx: NodeIndex, role: ReferenceFlags) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let inner = match &self.tree.node(idx).data {
            NodeData::GroupExpr { inner } => *inner,
            _ => return Err(BuilderError::full_mismatch(idx, "GroupExpr")),
        };
        self.visit_expr(inner, role)?;
        self.exit_node();
        Ok(())
    }

    fn visit_array_init(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::ArrayInit(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "ArrayInit")),
        };
        for &e in view.elements() {
            self.visit_expr(e, ReferenceFlags::READ)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_struct_init(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let view = match full(self.tree, idx) {
            Some(Full::StructInit(v)) => v,
            _ => return Err(BuilderError::full_mismatch(idx, "StructInit")),
        };
        for &f in view.fields() {
            self.enter_node(f);
            let value = match &self.tree.node(f).data {
                NodeData::StructInitField { value, .. } => *value,
                _ => return Err(BuilderError::full_mismatch(f, "StructInitField")),
            };
            self.visit_expr(value, ReferenceFlags::READ)?;
            self.exit_node();
        }
        self.exit_node();
        Ok(())
    }

    fn visit_try(&mut self, idx: NodeIndex, role: ReferenceFlags) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let (expr, catch) = match &self.tree.node(idx).data {
            NodeData::TryExpr { expr, catch } => (*expr, *catch),
            _ => return Err(BuilderError::full_mismatch(idx, "TryExpr")),
        };
        self.visit_expr(expr, role)?;
        if let Some(c) = catch {
            self.visit_catch_clause(c)?;
        }
        self.exit_node();
        Ok(())
    }

    fn visit_import(&mut self, idx: NodeIndex) -> Result<(), BuilderError> {
        self.enter_node(idx);
        let specifier_token = match &self.tree.node(idx).data {
            NodeData::ImportExpr { specifier_token } => *specifier_token,
            _ => return Err(BuilderError::full_mismatch(idx, "ImportExpr")),
        };
        let raw = self.tree.token_text(specifier_token, self.source);
        let specifier = raw.trim_matches('"').to_string();
        let kind = classify_specifier(&specifier);
        self.modules.push(specifier, idx, kind);
        self.exit_node();
        Ok(())
    }

    // ---- reference creation ----

    /// Resolved by walking the scope parent chain from the enclosing scope,
    /// looking up `bindings` for a symbol of the same name (spec §4.2
    /// "Reference creation").
    fn create_reference(&mut self, token: lint_syntax::TokenIndex, node: NodeIndex, flags: ReferenceFlags) {
        let name = self.tree.token_text(token, self.source);
        let scope = self.current_scope();
        let symbol = self.resolve(scope, name);
        let span = self.tree.token(token).span;
        let rid = self.references.push(symbol, scope, node, span, flags);
        if let Some(sid) = symbol {
            self.symbols.push_reference(sid, rid);
        }
        self.node_links.set_identifier_reference(token, rid);
    }

    fn resolve(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        if name.is_empty() {
            return None;
        }
        for ancestor in self.scopes.ancestors(scope) {
            for &sym in self.scopes.bindings(ancestor) {
                if self.symbols.name(sym, self.source) == name {
                    return Some(sym);
                }
            }
        }
        None
    }
}
