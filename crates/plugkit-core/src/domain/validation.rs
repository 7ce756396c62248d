use crate::domain::{error::DomainError, identifiers::RawIdentifiers, tokens::PlaceholderToken};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_identifiers(raw: &RawIdentifiers) -> Result<(), DomainError> {
        raw.validate()
    }

    pub fn validate_tokens() -> Result<(), DomainError> {
        PlaceholderToken::verify_disjoint()
    }
}
