use crate::types::DbId;

/// Failures a catalog operation can report independently of transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced row does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before it reached storage.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(crate::catalog::describe_validation_errors(&errors))
    }
}
