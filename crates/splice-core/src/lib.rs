//! Splice Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Splice
//! kit scaffolder and entry-file patcher, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           splice-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, PatchService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: Filesystem, Kit)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     splice-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinKit, Directory)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ScaffoldPlan, PatchPlan, SourceScan)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use splice_core::{
//!     application::{PatchService, RunMode},
//!     domain::{ProjectRoot, RelativePath},
//! };
//!
//! let root = ProjectRoot::new(".", "shopify.app.toml");
//! let service = PatchService::new(filesystem);
//! let report = service
//!     .patch(&root, &RelativePath::new("web/index.js"), &kit.patch, RunMode::Write)
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PatchReport, PatchService, PatchStatus, RunMode, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, KitSource},
    };
    pub use crate::domain::{
        FileSpec, Kit, PatchOutcome, PatchPlan, ProjectRoot, RelativePath, ScaffoldPlan,
    };
    pub use crate::error::{SpliceError, SpliceResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
