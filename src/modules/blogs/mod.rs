pub mod models;
pub mod service;

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::json;

use agentpath_http::error::AppError;
use agentpath_kernel::{InitCtx, Module};
use agentpath_store::{BlogPost, SharedStore};

use crate::validation;

use models::{
    BlogPayload, BlogResponse, BlogSummary, GetParams, ListParams, ListResponse, Pagination,
    PublishPayload,
};
use service::BlogService;

/// Blog content management: CRUD, publish toggle, and the public listing.
pub struct BlogsModule {
    service: BlogService,
}

impl BlogsModule {
    pub fn new(store: SharedStore) -> Self {
        Self {
            service: BlogService::new(store),
        }
    }
}

#[async_trait]
impl Module for BlogsModule {
    fn name(&self) -> &'static str {
        "blogs"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "blogs module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_blogs).post(create_blog))
            .route(
                "/{slug}",
                get(get_blog).put(update_blog).delete(delete_blog),
            )
            .route("/{slug}/publish", patch(toggle_publish))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }
}

/// GET / - list published posts with filters and pagination
async fn list_blogs(
    State(service): State<BlogService>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, AppError> {
    let (page, query) = service.list(params).await?;

    let total_pages = (page.total as u32).div_ceil(query.limit);
    let pagination = Pagination {
        page: query.page,
        limit: query.limit,
        total: page.total,
        total_pages,
        has_next: query.page < total_pages,
        has_prev: query.page > 1,
    };

    Ok(Json(ListResponse {
        blogs: page.blogs.into_iter().map(BlogSummary::from).collect(),
        pagination,
    }))
}

/// POST / - create a post (admin)
async fn create_blog(
    State(service): State<BlogService>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    let payload: BlogPayload = validation::parse_payload(body)?;
    let created = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /{slug} - fetch one post; `?admin=true` skips the publish filter
/// and the view count
async fn get_blog(
    State(service): State<BlogService>,
    Path(slug): Path<String>,
    Query(params): Query<GetParams>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = service.get(&slug, params.admin).await?;
    Ok(Json(BlogResponse { blog }))
}

/// PUT /{slug} - full-field overwrite (admin)
async fn update_blog(
    State(service): State<BlogService>,
    Path(slug): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<BlogPost>, AppError> {
    let payload: BlogPayload = validation::parse_payload(body)?;
    let updated = service.update(&slug, payload).await?;
    Ok(Json(updated))
}

/// DELETE /{slug} - hard delete (admin)
async fn delete_blog(
    State(service): State<BlogService>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    service.delete(&slug).await?;
    Ok(Json(json!({"message": "Blog deleted successfully"})))
}

/// PATCH /{slug}/publish - toggle publish state (admin)
async fn toggle_publish(
    State(service): State<BlogService>,
    Path(slug): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<BlogPost>, AppError> {
    let payload: PublishPayload = validation::parse_payload(body)?;
    let updated = service.set_published(&slug, payload.published).await?;
    Ok(Json(updated))
}

fn openapi_fragment() -> serde_json::Value {
    json!({
        "paths": {
            "/": {
                "get": {
                    "summary": "List published blog posts",
                    "tags": ["Blogs"],
                    "parameters": [
                        {"name": "page", "in": "query", "schema": {"type": "integer", "default": 1}},
                        {"name": "limit", "in": "query", "schema": {"type": "integer", "default": 10}},
                        {"name": "category", "in": "query", "schema": {"type": "string"}},
                        {"name": "tag", "in": "query", "schema": {"type": "string"}},
                        {"name": "search", "in": "query", "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Published posts without content, newest first",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/BlogListResponse"}
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a blog post",
                    "tags": ["Blogs"],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/BlogPayload"}
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created post",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/BlogPost"}
                                }
                            }
                        },
                        "400": {
                            "description": "Validation failure or duplicate slug",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                }
            },
            "/{slug}": {
                "get": {
                    "summary": "Fetch one post by slug",
                    "tags": ["Blogs"],
                    "parameters": [
                        {"name": "slug", "in": "path", "required": true, "schema": {"type": "string"}},
                        {"name": "admin", "in": "query", "schema": {"type": "boolean", "default": false},
                         "description": "Admin reads match drafts and do not count a view"}
                    ],
                    "responses": {
                        "200": {
                            "description": "The post",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {"blog": {"$ref": "#/components/schemas/BlogPost"}}
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "No matching post",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                },
                "put": {
                    "summary": "Overwrite a post",
                    "tags": ["Blogs"],
                    "parameters": [
                        {"name": "slug", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/BlogPayload"}
                            }
                        }
                    },
                    "responses": {
                        "200": {"description": "Updated post"},
                        "404": {"description": "No matching post"}
                    }
                },
                "delete": {
                    "summary": "Hard-delete a post",
                    "tags": ["Blogs"],
                    "parameters": [
                        {"name": "slug", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {"description": "Deleted"},
                        "404": {"description": "No matching post"}
                    }
                }
            },
            "/{slug}/publish": {
                "patch": {
                    "summary": "Toggle publish state",
                    "tags": ["Blogs"],
                    "parameters": [
                        {"name": "slug", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {"published": {"type": "boolean"}},
                                    "required": ["published"]
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {"description": "Updated post"},
                        "404": {"description": "No matching post"}
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "BlogPost": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "string", "format": "uuid"},
                        "title": {"type": "string", "maxLength": 200},
                        "slug": {"type": "string"},
                        "content": {"type": "string"},
                        "excerpt": {"type": "string", "maxLength": 300},
                        "author": {"type": "string"},
                        "category": {
                            "type": "string",
                            "enum": [
                                "Insurance Tips", "Career Guidance", "Success Stories",
                                "Training", "Industry News", "Sales Techniques",
                                "Financial Planning"
                            ]
                        },
                        "tags": {"type": "array", "items": {"type": "string"}},
                        "featuredImage": {"type": "string"},
                        "published": {"type": "boolean"},
                        "publishedAt": {"type": "string", "format": "date-time"},
                        "readTime": {"type": "integer"},
                        "views": {"type": "integer"},
                        "createdAt": {"type": "string", "format": "date-time"},
                        "updatedAt": {"type": "string", "format": "date-time"}
                    },
                    "required": ["id", "title", "slug", "content", "excerpt", "author", "category", "published"]
                },
                "BlogPayload": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string", "maxLength": 200},
                        "content": {"type": "string"},
                        "excerpt": {"type": "string", "maxLength": 300},
                        "author": {"type": "string"},
                        "category": {"type": "string"},
                        "tags": {"type": "array", "items": {"type": "string"}},
                        "featuredImage": {"type": "string"},
                        "published": {"type": "boolean", "default": false}
                    },
                    "required": ["title", "content", "excerpt", "category"]
                },
                "BlogListResponse": {
                    "type": "object",
                    "properties": {
                        "blogs": {"type": "array", "items": {"$ref": "#/components/schemas/BlogPost"}},
                        "pagination": {
                            "type": "object",
                            "properties": {
                                "page": {"type": "integer"},
                                "limit": {"type": "integer"},
                                "total": {"type": "integer"},
                                "totalPages": {"type": "integer"},
                                "hasNext": {"type": "boolean"},
                                "hasPrev": {"type": "boolean"}
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Create a new instance of the blogs module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BlogsModule::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentpath_store::{DisabledStore, MemoryStore};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(store: SharedStore) -> Router {
        BlogsModule::new(store).routes()
    }

    fn create_body() -> String {
        json!({
            "title": "10 Tips for Success!",
            "content": "keep showing up",
            "excerpt": "Ten habits that compound",
            "category": "Training"
        })
        .to_string()
    }

    #[tokio::test]
    async fn create_then_public_get_of_draft_is_404() {
        let router = router(Arc::new(MemoryStore::new()));

        let response = router
            .clone()
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(create_body()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Draft: invisible to the public surface, visible to admin.
        let response = router
            .clone()
            .oneshot(
                Request::get("/10-tips-for-success")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router
            .oneshot(
                Request::get("/10-tips-for-success?admin=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_category_is_a_400() {
        let router = router(Arc::new(MemoryStore::new()));
        let body = json!({
            "title": "Bad category",
            "content": "text",
            "excerpt": "text",
            "category": "Cooking"
        });

        let response = router
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disabled_store_surfaces_503_on_blog_surface() {
        let router = router(Arc::new(DisabledStore::new()));

        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
