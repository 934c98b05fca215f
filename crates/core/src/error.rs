use crate::types::BugId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: BugId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
