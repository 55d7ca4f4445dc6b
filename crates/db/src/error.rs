use sriweb_core::error::CoreError;

/// Error returned by repository operations that enforce a domain rule on
/// top of the plain database call.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
