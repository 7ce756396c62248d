//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports. Each stage service is
//! usable on its own; [`Initializer`] chains them into the full run.

pub mod bootstrapper;
pub mod initializer;
pub mod renamer;
pub mod walker;

pub use bootstrapper::Bootstrapper;
pub use initializer::{InitOptions, InitOutcome, InitState, Initializer};
pub use renamer::FileRenamer;
pub use walker::TreeWalker;
