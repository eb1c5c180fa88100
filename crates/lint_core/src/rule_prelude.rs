//! Common imports for rule implementations, mirroring the teacher's
//! `rule_prelude` (`use crate::rule_prelude::*;` at the top of every rule
//! file in `rslint_core::groups::errors::no_unused_labels`).

pub use crate::context::LintContext;
pub use crate::rule::{Category, FixCapability, Rule, RuleId, RuleMeta};
pub use crate::schema::Schema;
pub use crate::declare_rule;
pub use lint_diagnostics::{Diagnostic, Fix, FixKind, LabeledSpan, Severity, Span};
pub use lint_semantic::{
    ReferenceFlags, ScopeFlags, Semantic, SymbolFlags, SymbolId, Visibility,
};
pub use lint_syntax::{ContainerKind, NodeData, NodeIndex, SyntaxKind};
