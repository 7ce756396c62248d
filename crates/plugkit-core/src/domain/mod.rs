// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Plugkit.
//!
//! This module contains pure logic with no I/O. Filesystem and process
//! access are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: identifiers, tables and plans never change after construction
//! - **Deterministic**: deriving twice from the same input yields the same output
//!
// Public API - what the world sees
pub mod bootstrap;
pub mod casing;
pub mod error;
pub mod identifiers;
pub mod plan;
pub mod report;
pub mod tokens;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use bootstrap::{BootstrapStage, CommandStep};
pub use error::{DomainError, ErrorCategory};
pub use identifiers::{
    DerivedIdentifiers, IdentifierField, NAMESPACE_SEPARATOR, RawIdentifiers,
    RawIdentifiersBuilder,
};
pub use plan::{FileTransformPlan, RelativePath, RenameOp};
pub use report::{Stage, TransformReport, TransformResult};
pub use tokens::{PlaceholderToken, TokenTable};
pub use validation::DomainValidator;
