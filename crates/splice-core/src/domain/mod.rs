// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Splice.
//!
//! This module contains pure logic with no I/O. Reading and writing files is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std, thiserror, regex, serde (reports only)
//! - **Immutable inputs**: splicing takes `&str` and returns a new `String`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod source;
pub mod splice;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    kit::{Kit, KitNotes},
    patch_plan::{
        AnchorRule, BlockKind, DEFAULT_IMPORT_KEYWORD, InsertionBlock, PatchOutcome, PatchPlan,
        PatchPlanBuilder,
    },
    project_root::{DEFAULT_MARKER, ProjectRoot},
    scaffold_plan::{FileSpec, ScaffoldPlan},
};

pub use error::DomainError;
pub use source::SourceScan;
pub use splice::Splice;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn patch_plan() -> PatchPlan {
        PatchPlan::builder()
            .sentinel("connectDB")
            .import_marker("import express from")
            .import_block("import connectDB from \"./database.js\";")
            .body_block("connectDB();")
            .body_anchor(r"app\.listen\(")
            .build()
            .unwrap()
    }

    // ========================================================================
    // Scaffold Plan Tests
    // ========================================================================

    #[test]
    fn scaffold_plan_builds_correctly() {
        let plan = ScaffoldPlan::new()
            .with_file("web/database.js", "\n  export default connectDB;\n")
            .with_file("web/models/Timer.js", "export default Timer;");

        assert_eq!(plan.len(), 2);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn scaffold_plan_validates_empty() {
        assert_eq!(ScaffoldPlan::new().validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn scaffold_plan_validates_duplicates() {
        let plan = ScaffoldPlan::new()
            .with_file("web/database.js", "a")
            .with_file("web/database.js", "b");

        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn file_spec_renders_trimmed_content() {
        let spec = FileSpec::new("web/database.js", "\n\n  const a = 1;\n\n");
        assert_eq!(spec.rendered(), "const a = 1;");
    }

    // ========================================================================
    // Patch Plan Tests
    // ========================================================================

    #[test]
    fn patch_plan_builder_success() {
        let plan = patch_plan();

        assert_eq!(plan.sentinel, "connectDB");
        assert_eq!(plan.imports.kind, BlockKind::Import);
        assert_eq!(plan.body.kind, BlockKind::Body);
        assert!(matches!(
            plan.imports.anchor,
            AnchorRule::AfterLastImport { ref keyword, .. } if keyword == DEFAULT_IMPORT_KEYWORD
        ));
    }

    #[test]
    fn patch_plan_builder_requires_sentinel() {
        let result = PatchPlan::builder()
            .import_marker("import express from")
            .import_block("import a from 'a';")
            .body_block("a();")
            .body_anchor("x")
            .build();

        assert_eq!(
            result.unwrap_err(),
            DomainError::MissingRequiredField { field: "sentinel" }
        );
    }

    #[test]
    fn patch_plan_builder_rejects_blank_blocks() {
        let result = PatchPlan::builder()
            .sentinel("a")
            .import_marker("import express from")
            .import_block("   \n")
            .body_block("a();")
            .body_anchor("x")
            .build();

        assert_eq!(result.unwrap_err(), DomainError::EmptyBlock { block: "import" });
    }

    #[test]
    fn patch_plan_builder_rejects_bad_regex() {
        let result = PatchPlan::builder()
            .sentinel("a")
            .import_marker("import express from")
            .import_block("import a from 'a';")
            .body_block("a();")
            .body_anchor("app.listen(")
            .build();

        assert!(matches!(result, Err(DomainError::InvalidAnchor { .. })));
    }

    #[test]
    fn patch_outcome_flags() {
        let half = PatchOutcome {
            import_inserted: true,
            body_inserted: false,
        };
        assert!(!half.is_complete());
        assert!(!half.is_noop());
        assert!(PatchOutcome::default().is_noop());
    }

    // ========================================================================
    // Kit and Project Root Tests
    // ========================================================================

    #[test]
    fn kit_validation_delegates_to_scaffold_plan() {
        let kit = Kit::new("empty", ScaffoldPlan::new(), patch_plan());
        assert_eq!(kit.validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn kit_rejects_blank_name() {
        let kit = Kit::new(" ", ScaffoldPlan::new().with_file("a.js", "a"), patch_plan());
        assert!(matches!(kit.validate(), Err(DomainError::InvalidKit(_))));
    }

    #[test]
    fn project_root_resolves_paths() {
        let root = ProjectRoot::new("/srv/app", DEFAULT_MARKER);

        assert_eq!(root.marker_path(), Path::new("/srv/app/shopify.app.toml"));
        assert_eq!(
            root.resolve(&RelativePath::new("web/index.js")),
            Path::new("/srv/app/web/index.js")
        );
    }
}
