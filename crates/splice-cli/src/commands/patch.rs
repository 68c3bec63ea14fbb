//! `splice patch`: wire the kit into the project's entry file.

use tracing::instrument;

use splice_adapters::LocalFilesystem;
use splice_core::application::{PatchService, PatchStatus, RunMode};

use crate::{
    cli::PatchArgs,
    commands::{load_kit, resolve_root, resolve_target},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.project.dry_run))]
pub fn execute(args: PatchArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.project.root.as_deref(), &config)?;
    let kit = load_kit(args.project.kit, &config)?;
    let target = resolve_target(args.target, &kit, &config)?;
    let mode = RunMode::from_dry_run(args.project.dry_run);

    output.header(&format!("Integrating '{}' into {target}...", kit.name))?;

    let service = PatchService::new(Box::new(LocalFilesystem::new()));
    let report = service.patch(&root, &target, &kit.patch, mode)?;
    output.json(&report)?;

    let outcome = match report.status {
        PatchStatus::AlreadyPatched => {
            output.warning(&format!(
                "Integration already exists in {target} (found '{}')",
                kit.patch.sentinel
            ))?;
            return Ok(());
        }
        PatchStatus::Patched(outcome) => outcome,
    };

    if !outcome.import_inserted {
        output.warning("Import anchor not found; import block was not inserted")?;
    }
    if !outcome.body_inserted {
        output.warning("Body anchor not found; route block was not inserted")?;
    }

    if report.dry_run {
        output.info(&format!("Dry run: {target} was not modified"))?;
        return Ok(());
    }

    if outcome.is_noop() {
        output.info(&format!("{target} rewritten unchanged"))?;
    } else {
        output.success("Integration complete!")?;
    }
    output.next_steps(&kit.notes.patch)?;
    Ok(())
}
