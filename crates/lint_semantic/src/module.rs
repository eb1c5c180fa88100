//! Module-import record (spec §2 component 6, §3 "Module import entry").
//! Cross-file resolution is a non-goal (spec §1); this only records what the
//! file imports and how, in declaration order.

use lint_syntax::NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleImportKind {
    /// `@import("std")` — a named module, not a relative file path.
    Module,
    /// `@import("foo.zig")` — a file-relative import.
    File,
}

#[derive(Debug, Clone)]
pub struct ImportEntry {
    pub specifier: String,
    pub node: NodeIndex,
    pub kind: ModuleImportKind,
}

#[derive(Debug, Default)]
pub struct ModuleRecord {
    pub imports: Vec<ImportEntry>,
}

impl ModuleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, specifier: String, node: NodeIndex, kind: ModuleImportKind) {
        self.imports.push(ImportEntry {
            specifier,
            node,
            kind,
        });
    }
}

/// A specifier with a `.`-containing extension is a file-relative import
/// (`"foo.zig"`); a bare name is a named module (`"std"`). This is the
/// language's own convention (spec scenario 5), not something the builder
/// invents.
pub fn classify_specifier(specifier: &str) -> ModuleImportKind {
    if specifier.contains('.') {
        ModuleImportKind::File
    } else {
        ModuleImportKind::Module
    }
}
