use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("customer {0} not found")]
    NotFound(i32),
    /// The store rejected a create, update or delete.
    #[error("write rejected by the store: {0}")]
    Write(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
