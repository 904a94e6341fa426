//! Content store for AgentPath: blog posts and application records.
//!
//! The store owns both document collections and enforces their unique
//! indexes (blog slug, application email). Services stay stateless and go
//! through [`ContentStore`]; tests inject a fresh [`MemoryStore`] per case.

use std::sync::Arc;

use async_trait::async_trait;

pub mod disabled;
pub mod error;
pub mod memory;
pub mod model;

pub use disabled::DisabledStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use model::{ApplicationRecord, BlogCategory, BlogPost, Education, Occupation};

/// Process-wide store handle shared by all modules.
pub type SharedStore = Arc<dyn ContentStore>;

/// Filters and pagination for listing published posts.
#[derive(Debug, Clone)]
pub struct BlogQuery {
    pub category: Option<BlogCategory>,
    /// Matches posts whose tag list contains this value.
    pub tag: Option<String>,
    /// Case-insensitive substring match over title, excerpt, and content.
    pub search: Option<String>,
    /// 1-based page index.
    pub page: u32,
    pub limit: u32,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            category: None,
            tag: None,
            search: None,
            page: 1,
            limit: 10,
        }
    }
}

/// One page of published posts plus the total match count.
#[derive(Debug, Clone)]
pub struct BlogPage {
    pub blogs: Vec<BlogPost>,
    pub total: usize,
}

/// Operations the content store exposes to the service layer.
///
/// Uniqueness constraints live here, mirroring the unique indexes a document
/// database would enforce. All derivations (slug, read time, publish stamps)
/// happen in the service layer before a document reaches the store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a new post. Fails with [`StoreError::DuplicateSlug`] on collision.
    async fn insert_blog(&self, post: BlogPost) -> Result<BlogPost, StoreError>;

    /// Look up a post by slug regardless of publish state.
    async fn find_blog(&self, slug: &str) -> Result<BlogPost, StoreError>;

    /// Look up a published post by slug.
    async fn find_published_blog(&self, slug: &str) -> Result<BlogPost, StoreError>;

    /// Atomically bump the view counter of the post with this slug.
    async fn increment_views(&self, slug: &str) -> Result<(), StoreError>;

    /// List published posts matching `query`, newest publish date first.
    async fn list_published(&self, query: &BlogQuery) -> Result<BlogPage, StoreError>;

    /// Replace the post currently holding `slug` with `post` (same document id).
    /// The replacement may carry a different slug; uniqueness is re-checked.
    async fn replace_blog(&self, slug: &str, post: BlogPost) -> Result<BlogPost, StoreError>;

    /// Hard-delete the post with this slug.
    async fn delete_blog(&self, slug: &str) -> Result<(), StoreError>;

    /// Insert an application. Fails with [`StoreError::DuplicateEmail`] if the
    /// email already has a record.
    async fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, StoreError>;
}
