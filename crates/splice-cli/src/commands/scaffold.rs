//! `splice scaffold`: write the kit's files into the project.

use tracing::{info, instrument};

use splice_adapters::LocalFilesystem;
use splice_core::application::{RunMode, ScaffoldReport, ScaffoldService};

use crate::{
    cli::ScaffoldArgs,
    commands::{load_kit, resolve_root},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.project.dry_run))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.project.root.as_deref(), &config)?;
    let kit = load_kit(args.project.kit, &config)?;
    let mode = RunMode::from_dry_run(args.project.dry_run);

    output.header(&format!(
        "Scaffolding '{}' into {}",
        kit.name,
        root.dir().display()
    ))?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(&root, &kit.scaffold, mode)?;

    info!(files = report.files.len(), "Scaffold finished");
    output.json(&report)?;
    render(&report, &output)?;

    if report.dry_run {
        output.info("Dry run: nothing was written")?;
        return Ok(());
    }

    output.success("Kit files generated")?;
    output.next_steps(&kit.notes.scaffold)?;
    Ok(())
}

fn render(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    for dir in &report.created_dirs {
        let verb = if report.dry_run { "Would create" } else { "Created" };
        output.print(&format!("  {verb} directory: {}", dir.display()))?;
    }
    for file in &report.files {
        let verb = if report.dry_run { "Would generate" } else { "Generated" };
        output.success(&format!("{verb}: {} ({} bytes)", file.path, file.bytes))?;
    }
    Ok(())
}
