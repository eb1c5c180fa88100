//! The rule engine: the disable-directive parser, the rule contract and
//! static registry, the per-file lint context, and the driver that
//! orchestrates the three visitation passes over a [`lint_semantic::Semantic`]
//! model (spec §2 components 8–11).
//!
//! This crate is not specific to any single rule; rules live under
//! [`groups`], one file per rule, grouped into the five SPEC_FULL
//! categories (`correctness`, `suspicious`, `pedantic`, `style`,
//! `restriction`). The crate never does anything CLI-specific — file
//! discovery, concurrent scheduling across files, and reporting are
//! `lint_cli`'s job (spec §1 "out of scope").
//!
//! ## Running the driver
//!
//! Build a [`lint_semantic::Semantic`] model for one file, then construct a
//! [`driver::LintDriver`] with a [`config::LintConfig`] and run it:
//!
//! ```ignore
//! let semantic = lint_semantic::build(&source)?;
//! let driver = lint_core::driver::LintDriver::new(&config, FixMode::Disabled);
//! match driver.run(&semantic) {
//!     Ok(success) => { /* no diagnostics */ }
//!     Err(DriverError::LintingFailed(diagnostics)) => { /* report them */ }
//!     Err(e) => { /* driver-level failure */ }
//! }
//! ```

pub mod config;
pub mod context;
pub mod directives;
pub mod driver;
pub mod fixer;
pub mod groups;
pub mod registry;
pub mod rule;
pub mod rule_prelude;
pub mod schema;

pub use config::{LintConfig, RuleConfigEntry};
pub use context::{FixMode, LintContext};
pub use directives::{Directive, ParsedDirectives};
pub use driver::{lint_source, DriverError, LintDriver, LintSuccess};
pub use fixer::{FixConflict, FixPlan};
pub use registry::{all_rules, get_id_for, get_rule_by_name, group_rules, suggest_rule_name};
pub use rule::{Category, FixCapability, Rule, RuleId, RuleMeta};
