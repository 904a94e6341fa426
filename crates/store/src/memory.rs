//! In-memory content store.
//!
//! Backs both collections with `RwLock`-guarded maps and enforces the same
//! unique indexes a document database would (`slug`, `email`). Every instance
//! is fully isolated, which is what the test harness relies on.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{ApplicationRecord, BlogPost};
use crate::{BlogPage, BlogQuery, ContentStore};

#[derive(Default)]
pub struct MemoryStore {
    blogs: RwLock<HashMap<Uuid, BlogPost>>,
    applications: RwLock<HashMap<Uuid, ApplicationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blog posts, published or not.
    pub fn blog_count(&self) -> usize {
        self.blogs.read().expect("blogs lock poisoned").len()
    }

    /// Number of stored application records.
    pub fn application_count(&self) -> usize {
        self.applications
            .read()
            .expect("applications lock poisoned")
            .len()
    }
}

fn matches_query(post: &BlogPost, query: &BlogQuery) -> bool {
    if !post.published {
        return false;
    }
    if let Some(category) = query.category {
        if post.category != category {
            return false;
        }
    }
    if let Some(tag) = &query.tag {
        if !post.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        let hit = post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle)
            || post.content.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    true
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_blog(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
        let mut blogs = self.blogs.write().expect("blogs lock poisoned");
        if blogs.values().any(|existing| existing.slug == post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }
        blogs.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_blog(&self, slug: &str) -> Result<BlogPost, StoreError> {
        let blogs = self.blogs.read().expect("blogs lock poisoned");
        blogs
            .values()
            .find(|post| post.slug == slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_published_blog(&self, slug: &str) -> Result<BlogPost, StoreError> {
        let blogs = self.blogs.read().expect("blogs lock poisoned");
        blogs
            .values()
            .find(|post| post.slug == slug && post.published)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn increment_views(&self, slug: &str) -> Result<(), StoreError> {
        let mut blogs = self.blogs.write().expect("blogs lock poisoned");
        let post = blogs
            .values_mut()
            .find(|post| post.slug == slug)
            .ok_or(StoreError::NotFound)?;
        // View bumps do not count as content edits, so updated_at stays.
        post.views += 1;
        Ok(())
    }

    async fn list_published(&self, query: &BlogQuery) -> Result<BlogPage, StoreError> {
        let blogs = self.blogs.read().expect("blogs lock poisoned");
        let mut matched: Vec<BlogPost> = blogs
            .values()
            .filter(|post| matches_query(post, query))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let total = matched.len();
        let page = query.page.max(1) as usize;
        let limit = query.limit.max(1) as usize;
        let blogs = matched
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(BlogPage { blogs, total })
    }

    async fn replace_blog(&self, slug: &str, post: BlogPost) -> Result<BlogPost, StoreError> {
        let mut blogs = self.blogs.write().expect("blogs lock poisoned");
        let id = blogs
            .values()
            .find(|existing| existing.slug == slug)
            .map(|existing| existing.id)
            .ok_or(StoreError::NotFound)?;
        if post.slug != slug && blogs.values().any(|existing| existing.slug == post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }
        let mut post = post;
        post.id = id;
        blogs.insert(id, post.clone());
        Ok(post)
    }

    async fn delete_blog(&self, slug: &str) -> Result<(), StoreError> {
        let mut blogs = self.blogs.write().expect("blogs lock poisoned");
        let id = blogs
            .values()
            .find(|post| post.slug == slug)
            .map(|post| post.id)
            .ok_or(StoreError::NotFound)?;
        blogs.remove(&id);
        Ok(())
    }

    async fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, StoreError> {
        let mut applications = self.applications.write().expect("applications lock poisoned");
        if applications
            .values()
            .any(|existing| existing.email == record.email)
        {
            return Err(StoreError::DuplicateEmail(record.email));
        }
        applications.insert(record.id, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlogCategory, Education, Occupation};
    use time::macros::datetime;
    use time::OffsetDateTime;

    fn post(slug: &str, published: bool) -> BlogPost {
        let now = OffsetDateTime::now_utc();
        BlogPost {
            id: Uuid::now_v7(),
            title: slug.replace('-', " "),
            slug: slug.to_string(),
            content: "agent commission basics".to_string(),
            excerpt: "A short excerpt".to_string(),
            author: "AgentPath Editorial Team".to_string(),
            category: BlogCategory::CareerGuidance,
            tags: vec!["career".to_string()],
            featured_image: None,
            published,
            published_at: published.then(OffsetDateTime::now_utc),
            read_time: 1,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn application(email: &str) -> ApplicationRecord {
        let now = OffsetDateTime::now_utc();
        ApplicationRecord {
            id: Uuid::now_v7(),
            full_name: "Ravi Kumar".to_string(),
            email: email.to_string(),
            mobile: "9876543210".to_string(),
            city: "Pune".to_string(),
            occupation: Occupation::Employed,
            education: Education::Graduate,
            sales_experience: false,
            reason: "Looking for a flexible second career".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_slug() {
        let store = MemoryStore::new();
        store.insert_blog(post("first-post", false)).await.unwrap();
        let err = store.insert_blog(post("first-post", true)).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(_)));
        assert_eq!(store.blog_count(), 1);
    }

    #[tokio::test]
    async fn published_lookup_skips_drafts() {
        let store = MemoryStore::new();
        store.insert_blog(post("draft-post", false)).await.unwrap();
        assert!(store.find_blog("draft-post").await.is_ok());
        assert!(matches!(
            store.find_published_blog("draft-post").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn increment_views_bumps_counter() {
        let store = MemoryStore::new();
        store.insert_blog(post("popular", true)).await.unwrap();
        store.increment_views("popular").await.unwrap();
        store.increment_views("popular").await.unwrap();
        let found = store.find_blog("popular").await.unwrap();
        assert_eq!(found.views, 2);
    }

    #[tokio::test]
    async fn listing_never_returns_drafts() {
        let store = MemoryStore::new();
        store.insert_blog(post("live", true)).await.unwrap();
        store.insert_blog(post("hidden", false)).await.unwrap();

        let page = store.list_published(&BlogQuery::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.blogs[0].slug, "live");

        // Drafts stay hidden under every filter combination.
        let query = BlogQuery {
            tag: Some("career".to_string()),
            search: Some("commission".to_string()),
            ..Default::default()
        };
        let page = store.list_published(&query).await.unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn listing_orders_by_publish_date_descending() {
        let store = MemoryStore::new();
        let mut older = post("older", true);
        older.published_at = Some(datetime!(2024-01-10 09:00 UTC));
        let mut newer = post("newer", true);
        newer.published_at = Some(datetime!(2024-06-01 09:00 UTC));
        store.insert_blog(older).await.unwrap();
        store.insert_blog(newer).await.unwrap();

        let page = store.list_published(&BlogQuery::default()).await.unwrap();
        let slugs: Vec<&str> = page.blogs.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn listing_filters_by_category_tag_and_search() {
        let store = MemoryStore::new();
        let mut training = post("exam-prep", true);
        training.category = BlogCategory::Training;
        training.tags = vec!["irda".to_string()];
        training.content = "How to prepare for the licensing exam".to_string();
        store.insert_blog(training).await.unwrap();
        store.insert_blog(post("career-advice", true)).await.unwrap();

        let by_category = BlogQuery {
            category: Some(BlogCategory::Training),
            ..Default::default()
        };
        assert_eq!(store.list_published(&by_category).await.unwrap().total, 1);

        let by_tag = BlogQuery {
            tag: Some("irda".to_string()),
            ..Default::default()
        };
        assert_eq!(store.list_published(&by_tag).await.unwrap().total, 1);

        let by_search = BlogQuery {
            search: Some("LICENSING".to_string()),
            ..Default::default()
        };
        let page = store.list_published(&by_search).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.blogs[0].slug, "exam-prep");
    }

    #[tokio::test]
    async fn listing_paginates_with_total() {
        let store = MemoryStore::new();
        for i in 0..5 {
            let mut p = post(&format!("post-{i}"), true);
            p.published_at = Some(datetime!(2024-01-01 00:00 UTC) + time::Duration::days(i));
            store.insert_blog(p).await.unwrap();
        }

        let query = BlogQuery {
            page: 2,
            limit: 2,
            ..Default::default()
        };
        let page = store.list_published(&query).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.blogs.len(), 2);
        assert_eq!(page.blogs[0].slug, "post-2");
    }

    #[tokio::test]
    async fn replace_allows_slug_change_but_not_collision() {
        let store = MemoryStore::new();
        store.insert_blog(post("original", false)).await.unwrap();
        store.insert_blog(post("taken", false)).await.unwrap();

        let mut renamed = store.find_blog("original").await.unwrap();
        renamed.slug = "renamed".to_string();
        store.replace_blog("original", renamed).await.unwrap();
        assert!(store.find_blog("renamed").await.is_ok());
        assert!(store.find_blog("original").await.is_err());

        let mut collides = store.find_blog("renamed").await.unwrap();
        collides.slug = "taken".to_string();
        let err = store.replace_blog("renamed", collides).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(_)));
    }

    #[tokio::test]
    async fn delete_missing_slug_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store.insert_blog(post("keeper", true)).await.unwrap();
        let err = store.delete_blog("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(store.blog_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_rejected_first_record_untouched() {
        let store = MemoryStore::new();
        let first = store
            .insert_application(application("ravi@example.com"))
            .await
            .unwrap();
        let err = store
            .insert_application(application("ravi@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(store.application_count(), 1);

        // Different email is still accepted.
        store
            .insert_application(application("meera@example.com"))
            .await
            .unwrap();
        assert_eq!(store.application_count(), 2);
        assert_eq!(first.full_name, "Ravi Kumar");
    }
}
