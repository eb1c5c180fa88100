//! The rule contract (spec §4.4): every rule exposes static metadata and up
//! to three visit hooks, run against an immutable `Semantic` model so a
//! failing or misbehaving rule can never poison shared state (spec §7
//! "Rule hooks receive `&Semantic`, not `&mut`").

use crate::context::LintContext;
use crate::schema::Schema;
use lint_semantic::{Semantic, SymbolId};
use lint_syntax::NodeIndex;
use std::fmt;

/// Dense id assigned at static-registration time (spec §4.4 "a per-rule
/// `id` assigned at static-registration time"). Used by the disable
/// directive filter and the driver to avoid repeated name lookups once a
/// rule set has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub u32);

/// Rule category, fixed by SPEC_FULL to the `clippy`/`ruff`-style
/// vocabulary (spec §4.4 names "correctness, suspicious, pedantic" as
/// examples; SPEC_FULL closes the open set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Correctness,
    Suspicious,
    Pedantic,
    Style,
    Restriction,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Correctness => "correctness",
            Category::Suspicious => "suspicious",
            Category::Pedantic => "pedantic",
            Category::Style => "style",
            Category::Restriction => "restriction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule's fix does to the rewritten source, spec §4.4 "optional fix
/// descriptor (`kind ∈ {none, fix, dangerous}`)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixCapability {
    None,
    Fix,
    Dangerous,
}

/// Static metadata for a rule (spec §4.4): "`name` (stable kebab-case id),
/// `category`, `default` severity, optional `fix` descriptor ..., a
/// per-rule `id`".
#[derive(Debug, Clone, Copy)]
pub struct RuleMeta {
    pub id: RuleId,
    pub name: &'static str,
    pub category: Category,
    pub default_severity: lint_diagnostics::Severity,
    pub fix: FixCapability,
}

/// Every rule in the library implements this. The three hooks are optional
/// (default to no-ops) because most rules only need one visitation mode
/// (spec §4.4: "Three optional visit hooks").
pub trait Rule: Send + Sync {
    fn meta(&self) -> RuleMeta;

    /// Called exactly once per file (spec §4.4 `run_once`).
    fn run_once(&self, _semantic: &Semantic, _ctx: &mut LintContext) {}

    /// Called for every node in source order (spec §4.4 `run_on_node`).
    fn run_on_node(&self, _node: NodeIndex, _semantic: &Semantic, _ctx: &mut LintContext) {}

    /// Called once per declared symbol in id (== declaration) order (spec
    /// §4.4 `run_on_symbol`).
    fn run_on_symbol(&self, _symbol: SymbolId, _semantic: &Semantic, _ctx: &mut LintContext) {}

    /// A JSON-Schema-draft-07 subset describing this rule's opaque
    /// configuration, for external tooling (spec §4.4 `jsonSchema(ctx)`).
    /// Rules with no configuration return `None`.
    fn json_schema(&self) -> Option<Schema> {
        None
    }
}

/// Declares a rule's unit struct and its `RuleMeta`, in the spirit of the
/// teacher's `declare_lint!` macro (`rslint_core::groups::errors::
/// no_unused_labels`) — stable id assigned by position, name/category/
/// severity/fix given inline, body left to a separate `impl Rule for Name`.
#[macro_export]
macro_rules! declare_rule {
    (
        $(#[$meta:meta])*
        $name:ident,
        id = $id:expr,
        name = $rule_name:literal,
        category = $category:expr,
        severity = $severity:expr
        $(, fix = $fix:expr )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl $name {
            pub const META: $crate::rule::RuleMeta = $crate::rule::RuleMeta {
                id: $crate::rule::RuleId($id),
                name: $rule_name,
                category: $category,
                default_severity: $severity,
                fix: declare_rule!(@fix $($fix)?),
            };
        }
    };
    (@fix) => { $crate::rule::FixCapability::None };
    (@fix $fix:expr) => { $fix };
}
