#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A second instance of a singleton entity was about to be created.
    #[error("Only one {0} instance is allowed")]
    SingletonViolation(&'static str),
}
