//! Stand-in store for deployments without a configured backend.
//!
//! Every operation reports [`StoreError::Unavailable`]. Blog endpoints
//! surface that to the caller; application intake logs it and continues
//! with notification only.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{ApplicationRecord, BlogPost};
use crate::{BlogPage, BlogQuery, ContentStore};

#[derive(Debug, Default)]
pub struct DisabledStore;

impl DisabledStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentStore for DisabledStore {
    async fn insert_blog(&self, _post: BlogPost) -> Result<BlogPost, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_blog(&self, _slug: &str) -> Result<BlogPost, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_published_blog(&self, _slug: &str) -> Result<BlogPost, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn increment_views(&self, _slug: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn list_published(&self, _query: &BlogQuery) -> Result<BlogPage, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn replace_blog(&self, _slug: &str, _post: BlogPost) -> Result<BlogPost, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn delete_blog(&self, _slug: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert_application(
        &self,
        _record: ApplicationRecord,
    ) -> Result<ApplicationRecord, StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_lookup_reports_unavailable() {
        let store = DisabledStore::new();
        assert!(matches!(
            store.find_blog("anything").await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(
            store.list_published(&BlogQuery::default()).await,
            Err(StoreError::Unavailable)
        ));
    }
}
