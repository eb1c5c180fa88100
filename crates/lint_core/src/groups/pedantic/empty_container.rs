//! `empty-container`: a `struct`/`enum`/`union`/error-set declaration with
//! no fields and no nested declarations — almost certainly a stub left
//! behind or a copy-paste mistake, but never incorrect, hence `pedantic`
//! rather than `correctness`.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags a container declaration with zero fields and zero nested
    /// declarations.
    EmptyContainer,
    id = 20,
    name = "empty-container",
    category = Category::Pedantic,
    severity = Severity::Notice
}

impl Rule for EmptyContainer {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_node(&self, node: NodeIndex, semantic: &Semantic, ctx: &mut LintContext) {
        let NodeData::ContainerDecl { container_kind, fields, decls } =
            &semantic.tree.node(node).data
        else {
            return;
        };
        if !fields.is_empty() || !decls.is_empty() {
            return;
        }
        let kind_name = match container_kind {
            ContainerKind::Struct => "struct",
            ContainerKind::Enum => "enum",
            ContainerKind::Union => "union",
            ContainerKind::Error => "error set",
        };
        ctx.report(
            Diagnostic::notice(
                self.meta().name,
                format!("empty {} declaration", kind_name),
            )
            .primary(ctx.span_for_node(node), "has no members"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::context::FixMode;
    use crate::driver::{DriverError, LintDriver};
    use lint_diagnostics::SourceFile;
    use lint_semantic::build;

    fn lint(src: &str) -> Result<crate::driver::LintSuccess, DriverError> {
        let semantic = build(&SourceFile::new(src, None)).expect("clean build");
        let config = LintConfig::new();
        LintDriver::new(&config, FixMode::Disabled).run(&semantic)
    }

    #[test]
    fn flags_empty_struct() {
        let err = lint("pub const Foo = struct {};").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "empty-container"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_struct_with_a_field() {
        assert!(lint("pub const Foo = struct { bar: u32 };").is_ok());
    }
}
