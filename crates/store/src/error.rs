use thiserror::Error;

/// Failures surfaced by the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The derived slug collides with an existing post.
    #[error("a blog post with slug '{0}' already exists")]
    DuplicateSlug(String),

    /// An application with this email was already recorded.
    #[error("an application with email '{0}' already exists")]
    DuplicateEmail(String),

    /// No document matched the lookup key.
    #[error("document not found")]
    NotFound,

    /// The store backend is disabled or unreachable.
    #[error("content store is unavailable")]
    Unavailable,
}
