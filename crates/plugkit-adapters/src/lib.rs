//! Infrastructure adapters for Plugkit.
//!
//! This crate implements the ports defined in `plugkit-core::application::ports`.
//! It contains all filesystem and process I/O.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedRunner, SystemRunner};
