//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `plugkit-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: rename, read, write, walk
//!   - `CommandRunner`: external toolchain commands
//!   - `Prompter`: identifier collection and confirmation
//!   - `InitObserver`: progress notifications
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandOutput, CommandRunner, Filesystem, InitObserver, Prompter, SilentObserver,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockPrompter};
