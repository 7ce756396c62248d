//! Plugkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Plugkit
//! plugin initializer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           plugkit-cli (CLI)             │
//! │   (Prompter, Observer, config, output)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Initializer, FileRenamer, TreeWalker, │
//! │            Bootstrapper)                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Prompter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    plugkit-adapters (Infrastructure)    │
//! │  (LocalFilesystem, SystemRunner, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Identifiers, TokenTable, RenamePlan)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use plugkit_core::domain::{DerivedIdentifiers, RawIdentifiers, TokenTable};
//!
//! let raw = RawIdentifiers::builder()
//!     .plugin_name("Demo Plugin")
//!     .plugin_description("A demo")
//!     .vendor_name("acme")
//!     .vendor_email("dev@acme.test")
//!     .vendor_uri("https://acme.test")
//!     .build()
//!     .unwrap();
//!
//! let derived = DerivedIdentifiers::derive(&raw);
//! let table = TokenTable::for_identifiers(&derived);
//! assert_eq!(table.apply_all("class __PluginName__"), "class DemoPlugin");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitOptions, InitOutcome, Initializer,
        ports::{CommandOutput, CommandRunner, Filesystem, InitObserver, Prompter},
    };
    pub use crate::domain::{
        BootstrapStage, CommandStep, DerivedIdentifiers, FileTransformPlan, IdentifierField,
        RawIdentifiers, Stage, TokenTable, TransformReport, TransformResult,
    };
    pub use crate::error::{PlugkitError, PlugkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
