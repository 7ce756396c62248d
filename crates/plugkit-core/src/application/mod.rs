//! Application layer for Plugkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Initializer and its stage services)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Derivation and substitution rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    Bootstrapper, FileRenamer, InitOptions, InitOutcome, InitState, Initializer, TreeWalker,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, CommandRunner, Filesystem, InitObserver, Prompter, SilentObserver};

pub use error::ApplicationError;
