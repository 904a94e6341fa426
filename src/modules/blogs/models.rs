use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use agentpath_store::{BlogCategory, BlogPost};

/// Body for create and update. Update is a full-field overwrite, so the two
/// operations share one payload shape.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    #[validate(
        length(max = 200, message = "Title cannot be more than 200 characters"),
        custom = "crate::validation::non_blank"
    )]
    pub title: String,
    #[validate(custom = "crate::validation::non_blank")]
    pub content: String,
    #[validate(
        length(max = 300, message = "Excerpt cannot be more than 300 characters"),
        custom = "crate::validation::non_blank"
    )]
    pub excerpt: String,
    #[serde(default)]
    pub author: Option<String>,
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Body for the publish toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishPayload {
    pub published: bool,
}

/// Query parameters for listing published posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// Query parameters for fetching one post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetParams {
    /// Admin reads match drafts and never bump the view counter.
    #[serde(default)]
    pub admin: bool,
}

/// Listing entry: the full document minus `content`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    pub read_time: u32,
    pub views: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<BlogPost> for BlogSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            author: post.author,
            category: post.category,
            tags: post.tags,
            featured_image: post.featured_image,
            published: post.published,
            published_at: post.published_at,
            read_time: post.read_time,
            views: post.views,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub blogs: Vec<BlogSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub blog: BlogPost,
}
