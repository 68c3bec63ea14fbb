//! Scaffold Service - materialises a kit's files.
//!
//! Workflow:
//! 1. Refuse unless the project marker exists
//! 2. Validate the scaffold plan
//! 3. Create missing parent directories and write each trimmed file
//!
//! Files are overwritten unconditionally. A failure mid-way leaves earlier
//! files in place; there is no rollback.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{RunMode, ports::Filesystem, services::ensure_project_root},
    domain::{DomainValidator as validator, ProjectRoot, RelativePath, ScaffoldPlan},
    error::SpliceResult,
};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedFile {
    pub path: RelativePath,
    pub bytes: usize,
}

/// What a scaffold run wrote (or would write, in dry-run mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files: Vec<ScaffoldedFile>,
    /// Directories that did not exist before this run.
    pub created_dirs: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Writes scaffold plans through the `Filesystem` port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialise every file of `plan` under `root`.
    #[instrument(
        skip_all,
        fields(
            root = %root.dir().display(),
            files = plan.len(),
            dry_run = !mode.writes()
        )
    )]
    pub fn scaffold(
        &self,
        root: &ProjectRoot,
        plan: &ScaffoldPlan,
        mode: RunMode,
    ) -> SpliceResult<ScaffoldReport> {
        ensure_project_root(self.filesystem.as_ref(), root)?;
        validator::validate_scaffold_plan(plan)?;

        let mut report = ScaffoldReport {
            root: root.dir().to_path_buf(),
            files: Vec::with_capacity(plan.len()),
            created_dirs: Vec::new(),
            dry_run: !mode.writes(),
        };
        let mut created: HashSet<PathBuf> = HashSet::new();

        for spec in plan.files() {
            let path = root.resolve(&spec.path);

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let missing = self.missing_dirs(root, parent, &created);
                if !missing.is_empty() && mode.writes() {
                    self.filesystem.create_dir_all(parent)?;
                }
                for dir in missing {
                    debug!(dir = %dir.display(), "Created directory");
                    created.insert(dir.clone());
                    report.created_dirs.push(dir);
                }
            }

            let content = spec.rendered();
            if mode.writes() {
                self.filesystem.write_file(&path, content)?;
            }
            info!(path = %spec.path, bytes = content.len(), "Generated file");

            report.files.push(ScaffoldedFile {
                path: spec.path.clone(),
                bytes: content.len(),
            });
        }

        info!(files = report.files.len(), "Scaffold completed");
        Ok(report)
    }

    /// Directories between the root and `dir` (inclusive) that do not exist
    /// yet, outermost first.
    fn missing_dirs(
        &self,
        root: &ProjectRoot,
        dir: &Path,
        created: &HashSet<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut missing: Vec<PathBuf> = dir
            .ancestors()
            .take_while(|d| *d != root.dir() && d.starts_with(root.dir()))
            .take_while(|d| !created.contains(*d) && !self.filesystem.exists(d))
            .map(Path::to_path_buf)
            .collect();
        missing.reverse();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::DomainError;
    use crate::error::SpliceError;

    fn root() -> ProjectRoot {
        ProjectRoot::new("/app", "shopify.app.toml")
    }

    fn plan() -> ScaffoldPlan {
        ScaffoldPlan::new()
            .with_file("web/database.js", "\nexport default connectDB;\n")
            .with_file("web/models/Timer.js", "  export default Timer;  ")
    }

    #[test]
    fn refuses_without_marker_and_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs));
        let err = service.scaffold(&root(), &plan(), RunMode::Write).unwrap_err();

        assert!(matches!(
            err,
            SpliceError::Application(ApplicationError::PreconditionMissing { .. })
        ));
        assert!(err.is_refusal());
    }

    #[test]
    fn writes_trimmed_content_and_creates_missing_dirs() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("shopify.app.toml"));
        fs.expect_create_dir_all()
            .times(2)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p.ends_with("web/database.js") && content.to_string() == "export default connectDB;"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p.ends_with("web/models/Timer.js") && content.to_string() == "export default Timer;"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.scaffold(&root(), &plan(), RunMode::Write).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].bytes, "export default connectDB;".len());
        assert_eq!(
            report.created_dirs,
            vec![PathBuf::from("/app/web"), PathBuf::from("/app/web/models")]
        );
        assert!(!report.dry_run);
    }

    #[test]
    fn existing_dirs_are_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service.scaffold(&root(), &plan(), RunMode::Write).unwrap();

        assert!(report.created_dirs.is_empty());
    }

    #[test]
    fn dry_run_reports_without_mutating() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/app/shopify.app.toml"));
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let plan = plan().with_file("web/models/Other.js", "x");
        let service = ScaffoldService::new(Box::new(fs));
        let report = service.scaffold(&root(), &plan, RunMode::DryRun).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.files.len(), 3);
        // web/models is reported once even though two files live there.
        assert_eq!(report.created_dirs.len(), 2);
    }

    #[test]
    fn nested_file_first_reports_every_new_ancestor() {
        let plan = ScaffoldPlan::new()
            .with_file("web/models/Timer.js", "export default Timer;")
            .with_file("web/database.js", "export default connectDB;");
        let expected = vec![PathBuf::from("/app/web"), PathBuf::from("/app/web/models")];

        for mode in [RunMode::Write, RunMode::DryRun] {
            let mut fs = MockFilesystem::new();
            fs.expect_exists()
                .returning(|p| p == Path::new("/app/shopify.app.toml"));
            fs.expect_create_dir_all()
                .withf(|p| p.to_str() == Some("/app/web/models"))
                .times(usize::from(mode.writes()))
                .returning(|_| Ok(()));
            fs.expect_write_file()
                .times(if mode.writes() { 2 } else { 0 })
                .returning(|_, _| Ok(()));

            let service = ScaffoldService::new(Box::new(fs));
            let report = service.scaffold(&root(), &plan, mode).unwrap();

            assert_eq!(report.created_dirs, expected, "{mode:?}");
        }
    }

    #[test]
    fn io_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(1).returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(Box::new(fs));
        let err = service.scaffold(&root(), &plan(), RunMode::Write).unwrap_err();

        assert!(!err.is_refusal());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn invalid_plan_is_rejected_after_precondition() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&root(), &ScaffoldPlan::new(), RunMode::Write)
            .unwrap_err();

        assert!(matches!(err, SpliceError::Domain(DomainError::EmptyPlan)));
    }
}
