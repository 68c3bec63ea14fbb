//! `splice list`: show what a kit would scaffold and which file it patches.

use serde::Serialize;

use splice_core::domain::Kit;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::{load_kit, resolve_target},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct KitListing {
    name: String,
    target: String,
    sentinel: String,
    files: Vec<ListedFile>,
}

#[derive(Debug, Serialize)]
struct ListedFile {
    path: String,
    bytes: usize,
}

impl KitListing {
    fn new(kit: &Kit, target: String) -> Self {
        Self {
            name: kit.name.clone(),
            target,
            sentinel: kit.patch.sentinel.clone(),
            files: kit
                .scaffold
                .files()
                .map(|spec| ListedFile {
                    path: spec.path.to_string(),
                    bytes: spec.rendered().len(),
                })
                .collect(),
        }
    }
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kit = load_kit(args.kit, &config)?;
    let target = resolve_target(None, &kit, &config)?;
    let listing = KitListing::new(&kit, target.to_string());

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Kit '{}'", listing.name))?;
            output.print(&format!("  Patches: {} (sentinel '{}')", listing.target, listing.sentinel))?;
            output.print("")?;
            let width = listing
                .files
                .iter()
                .map(|f| f.path.len())
                .max()
                .unwrap_or(0);
            output.print(&format!("  {:<width$}  {:>6}", "FILE", "BYTES"))?;
            for file in &listing.files {
                output.print(&format!("  {:<width$}  {:>6}", file.path, file.bytes))?;
            }
        }

        ListFormat::List => {
            for file in &listing.files {
                println!("{}", file.path);
            }
        }

        // Straight to stdout so pipes get parseable JSON regardless of
        // --quiet or --output-format.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&listing).map_err(std::io::Error::other)?;
            println!("{json}");
        }
    }

    Ok(())
}
