#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    // The display string is the wire contract for 404 responses.
    #[error("Could not find product with id {0}")]
    NotFound(i64),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
