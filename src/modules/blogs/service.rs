//! Blog lifecycle service.
//!
//! Slug and read-time derivation are plain functions invoked here, before a
//! document reaches the store, so they stay independently testable. The
//! `published_at` stamp is applied on any first false→true transition of
//! `published`, whichever operation causes it.

use time::OffsetDateTime;
use uuid::Uuid;

use agentpath_http::error::AppError;
use agentpath_store::model::DEFAULT_AUTHOR;
use agentpath_store::{BlogCategory, BlogPage, BlogPost, BlogQuery, SharedStore};

use crate::validation;

use super::models::{BlogPayload, ListParams};

/// URL-safe key derived from a title: lowercase, each run of
/// non-alphanumeric characters collapsed to one hyphen, edge hyphens trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// A title made entirely of punctuation derives an empty slug, which would
/// never be routable and would collide with every later such title.
fn require_slug(slug: String) -> Result<String, AppError> {
    if slug.is_empty() {
        return Err(AppError::validation(
            vec![serde_json::json!({
                "field": "title",
                "error": "must contain at least one letter or digit"
            })],
            "Invalid form data",
        ));
    }
    Ok(slug)
}

/// Estimated reading time in whole minutes at 200 words per minute.
pub fn read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(200)
}

#[derive(Clone)]
pub struct BlogService {
    store: SharedStore,
}

impl BlogService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Create an unpublished-by-default post with derived slug and read time.
    pub async fn create(&self, payload: BlogPayload) -> Result<BlogPost, AppError> {
        validation::check(&payload)?;

        let now = OffsetDateTime::now_utc();
        let title = payload.title.trim().to_string();
        let post = BlogPost {
            id: Uuid::now_v7(),
            slug: require_slug(slugify(&title))?,
            read_time: read_time(&payload.content),
            title,
            content: payload.content,
            excerpt: payload.excerpt.trim().to_string(),
            author: payload
                .author
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: payload.category,
            tags: payload.tags.iter().map(|t| t.trim().to_string()).collect(),
            featured_image: payload.featured_image,
            published: payload.published,
            published_at: payload.published.then_some(now),
            views: 0,
            created_at: now,
            updated_at: now,
        };

        let created = self.store.insert_blog(post).await?;
        tracing::info!(slug = %created.slug, "blog post created");
        Ok(created)
    }

    /// Fetch one post. Public reads only match published posts and count as a
    /// view; admin reads match any state and leave the counter alone.
    pub async fn get(&self, slug: &str, as_admin: bool) -> Result<BlogPost, AppError> {
        if as_admin {
            return Ok(self.store.find_blog(slug).await?);
        }

        let mut post = self.store.find_published_blog(slug).await?;
        self.store.increment_views(slug).await?;
        post.views += 1;
        Ok(post)
    }

    /// List published posts, newest publish date first.
    pub async fn list(&self, params: ListParams) -> Result<(BlogPage, BlogQuery), AppError> {
        let category = match params.category.as_deref() {
            Some(raw) => Some(
                BlogCategory::parse(raw)
                    .ok_or_else(|| AppError::bad_request(format!("unknown category '{raw}'")))?,
            ),
            None => None,
        };

        let query = BlogQuery {
            category,
            tag: params.tag,
            search: params.search,
            page: params.page.unwrap_or(1).max(1),
            limit: params.limit.unwrap_or(10).clamp(1, 100),
        };
        let page = self.store.list_published(&query).await?;
        Ok((page, query))
    }

    /// Full-field overwrite. Re-derives the slug when the title changed and
    /// the read time when the content changed; `views`, `created_at`, and an
    /// already-set `published_at` are preserved.
    pub async fn update(&self, slug: &str, payload: BlogPayload) -> Result<BlogPost, AppError> {
        validation::check(&payload)?;

        let existing = self.store.find_blog(slug).await?;
        let now = OffsetDateTime::now_utc();

        let title = payload.title.trim().to_string();
        let new_slug = if title != existing.title {
            require_slug(slugify(&title))?
        } else {
            existing.slug.clone()
        };
        let new_read_time = if payload.content != existing.content {
            read_time(&payload.content)
        } else {
            existing.read_time
        };
        let published_at = if payload.published && existing.published_at.is_none() {
            Some(now)
        } else {
            existing.published_at
        };

        let post = BlogPost {
            id: existing.id,
            slug: new_slug,
            read_time: new_read_time,
            title,
            content: payload.content,
            excerpt: payload.excerpt.trim().to_string(),
            author: payload
                .author
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: payload.category,
            tags: payload.tags.iter().map(|t| t.trim().to_string()).collect(),
            featured_image: payload.featured_image,
            published: payload.published,
            published_at,
            views: existing.views,
            created_at: existing.created_at,
            updated_at: now,
        };

        let updated = self.store.replace_blog(slug, post).await?;
        tracing::info!(slug = %updated.slug, "blog post updated");
        Ok(updated)
    }

    /// Toggle publish state. The first transition to published stamps
    /// `published_at`; unpublishing leaves the stamp untouched.
    pub async fn set_published(&self, slug: &str, published: bool) -> Result<BlogPost, AppError> {
        let mut post = self.store.find_blog(slug).await?;
        post.published = published;
        if published && post.published_at.is_none() {
            post.published_at = Some(OffsetDateTime::now_utc());
        }
        post.updated_at = OffsetDateTime::now_utc();

        let updated = self.store.replace_blog(slug, post).await?;
        tracing::info!(slug = %updated.slug, published, "blog publish state changed");
        Ok(updated)
    }

    /// Hard delete. The caller confirms intent; there is no recovery path.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        self.store.delete_blog(slug).await?;
        tracing::info!(slug, "blog post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentpath_store::MemoryStore;
    use std::sync::Arc;

    fn service() -> BlogService {
        BlogService::new(Arc::new(MemoryStore::new()))
    }

    fn payload(title: &str, content: &str) -> BlogPayload {
        BlogPayload {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: "A short excerpt".to_string(),
            author: None,
            category: BlogCategory::Training,
            tags: vec![],
            featured_image: None,
            published: false,
        }
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("10 Tips for Success!"), "10-tips-for-success");
        assert_eq!(slugify("Hello --- World"), "hello-world");
        assert_eq!(slugify("  !!Leading & Trailing!!  "), "leading-trailing");
        assert_eq!(slugify("ALL CAPS"), "all-caps");
    }

    #[test]
    fn read_time_rounds_up_at_200_wpm() {
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(read_time(&words(1)), 1);
        assert_eq!(read_time(&words(199)), 1);
        assert_eq!(read_time(&words(200)), 1);
        assert_eq!(read_time(&words(201)), 2);
        assert_eq!(read_time(&words(401)), 3);
    }

    #[tokio::test]
    async fn create_derives_fields_and_defaults() {
        let service = service();
        let created = service
            .create(payload("10 Tips for Success!", "a short post"))
            .await
            .unwrap();

        assert_eq!(created.slug, "10-tips-for-success");
        assert_eq!(created.read_time, 1);
        assert!(!created.published);
        assert!(created.published_at.is_none());
        assert_eq!(created.author, DEFAULT_AUTHOR);
        assert_eq!(created.views, 0);
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let service = service();
        let err = service.create(payload("   ", "content")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn punctuation_only_title_is_rejected() {
        let service = service();
        let err = service.create(payload("!!!", "content")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        // Same rule on update, where a title change re-derives the slug.
        service.create(payload("Real title", "content")).await.unwrap();
        let err = service
            .update("real-title", payload("?!?", "content"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_with_published_true_stamps_published_at() {
        let service = service();
        let mut p = payload("Launch day", "content");
        p.published = true;
        let created = service.create(p).await.unwrap();
        assert!(created.published_at.is_some());
    }

    #[tokio::test]
    async fn publish_stamp_is_set_once_and_survives_unpublish() {
        let service = service();
        service.create(payload("Draft post", "content")).await.unwrap();

        let published = service.set_published("draft-post", true).await.unwrap();
        let first_stamp = published.published_at.expect("stamped on first publish");

        // true → true again
        let again = service.set_published("draft-post", true).await.unwrap();
        assert_eq!(again.published_at, Some(first_stamp));

        // unpublish then republish
        let unpublished = service.set_published("draft-post", false).await.unwrap();
        assert!(!unpublished.published);
        assert_eq!(unpublished.published_at, Some(first_stamp));

        let republished = service.set_published("draft-post", true).await.unwrap();
        assert_eq!(republished.published_at, Some(first_stamp));
    }

    #[tokio::test]
    async fn update_rederives_slug_and_read_time_only_on_change() {
        let service = service();
        service.create(payload("Original title", "old content")).await.unwrap();

        // Content unchanged: read_time untouched even at a new title.
        let mut p = payload("A Brand New Title", "old content");
        p.published = false;
        let updated = service.update("original-title", p).await.unwrap();
        assert_eq!(updated.slug, "a-brand-new-title");
        assert_eq!(updated.read_time, 1);

        let long_content = vec!["word"; 401].join(" ");
        let updated = service
            .update("a-brand-new-title", payload("A Brand New Title", &long_content))
            .await
            .unwrap();
        assert_eq!(updated.slug, "a-brand-new-title");
        assert_eq!(updated.read_time, 3);
    }

    #[tokio::test]
    async fn update_flipping_published_stamps_uniformly() {
        let service = service();
        service.create(payload("Quiet draft", "content")).await.unwrap();

        let mut p = payload("Quiet draft", "content");
        p.published = true;
        let updated = service.update("quiet-draft", p).await.unwrap();
        let first_stamp = updated.published_at.expect("generic update path stamps too");

        // A later update of an already-published post keeps the original stamp.
        let mut p = payload("Quiet draft", "edited content");
        p.published = true;
        let updated = service.update("quiet-draft", p).await.unwrap();
        assert_eq!(updated.published_at, Some(first_stamp));
    }

    #[tokio::test]
    async fn update_preserves_views_and_created_at() {
        let service = service();
        let created = service.create(payload("Sticky fields", "content")).await.unwrap();
        service.set_published("sticky-fields", true).await.unwrap();
        service.get("sticky-fields", false).await.unwrap();

        let mut p = payload("Sticky fields", "content");
        p.published = true;
        let updated = service.update("sticky-fields", p).await.unwrap();
        assert_eq!(updated.views, 1);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn public_get_counts_views_admin_get_does_not() {
        let service = service();
        let mut p = payload("View counter", "content");
        p.published = true;
        service.create(p).await.unwrap();

        let first = service.get("view-counter", false).await.unwrap();
        assert_eq!(first.views, 1);
        let second = service.get("view-counter", false).await.unwrap();
        assert_eq!(second.views, 2);

        let admin = service.get("view-counter", true).await.unwrap();
        assert_eq!(admin.views, 2);
    }

    #[tokio::test]
    async fn public_get_hides_drafts_admin_sees_them() {
        let service = service();
        service.create(payload("Hidden draft", "content")).await.unwrap();

        let err = service.get("hidden-draft", false).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(service.get("hidden-draft", true).await.is_ok());
    }

    #[tokio::test]
    async fn list_computes_pagination_and_rejects_unknown_category() {
        let service = service();
        for i in 0..3 {
            let mut p = payload(&format!("Post number {i}"), "content");
            p.published = true;
            service.create(p).await.unwrap();
        }

        let params = ListParams {
            limit: Some(2),
            ..Default::default()
        };
        let (page, query) = service.list(params).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.blogs.len(), 2);
        assert_eq!(query.page, 1);

        let err = service
            .list(ListParams {
                category: Some("Cooking".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn duplicate_slug_on_create_is_rejected() {
        let service = service();
        service.create(payload("Same Title", "content")).await.unwrap();
        let err = service.create(payload("Same Title", "other")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn delete_missing_slug_is_not_found() {
        let service = service();
        let err = service.delete("never-existed").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
