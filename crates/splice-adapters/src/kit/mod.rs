//! Kit sources.

mod builtin;
mod directory;

use std::path::PathBuf;

use splice_core::application::ports::KitSource;

pub use builtin::{BODY_ANCHOR, BUILTIN_KIT_NAME, BuiltinKit, IMPORT_MARKER, SENTINEL};
pub use directory::{DirectoryKit, NotesSection, PatchManifest};

/// The directory kit at `path`, or the built-in kit when none is given.
pub fn kit_source(path: Option<PathBuf>) -> Box<dyn KitSource> {
    match path {
        Some(dir) => Box::new(DirectoryKit::new(dir)),
        None => Box::new(BuiltinKit::new()),
    }
}
