//! `CommandRunner` port implementations: real processes and a scripted stand-in.

mod scripted;
mod system;

pub use scripted::ScriptedRunner;
pub use system::SystemRunner;
