pub mod emails;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use agentpath_http::error::AppError;
use agentpath_kernel::{InitCtx, Module};
use agentpath_mailer::Mailer;

use crate::validation;

use models::ContactPayload;

/// Contact form pipeline: validate and forward by email, no persistence.
pub struct ContactModule {
    mailer: Option<Arc<Mailer>>,
}

impl ContactModule {
    pub fn new(mailer: Option<Arc<Mailer>>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl Module for ContactModule {
    fn name(&self) -> &'static str {
        "contact"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            mailer_configured = self.mailer.is_some(),
            "contact module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(submit_message))
            .with_state(self.mailer.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }
}

/// POST / - submit a contact message
async fn submit_message(
    State(mailer): State<Option<Arc<Mailer>>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let payload: ContactPayload = validation::parse_payload(body)?;
    validation::check(&payload)?;

    match &mailer {
        Some(mailer) => {
            let (subject, html) = emails::admin_notification(&payload);
            if let Err(error) = mailer.send_admin(&subject, &html).await {
                tracing::error!(%error, "failed to forward contact message");
            }

            let (subject, html) = emails::auto_reply(&payload);
            if let Err(error) = mailer.send(&payload.email, &subject, &html).await {
                tracing::error!(%error, "failed to send contact auto-reply");
            }
        }
        None => {
            tracing::debug!("mailer not configured; skipping contact notification");
        }
    }

    Ok(Json(json!({"message": "Message sent successfully"})))
}

fn openapi_fragment() -> serde_json::Value {
    json!({
        "paths": {
            "/": {
                "post": {
                    "summary": "Submit a contact message",
                    "tags": ["Contact"],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/ContactPayload"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Message forwarded",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {"message": {"type": "string"}}
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Validation failure",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ContactPayload": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "minLength": 2, "maxLength": 50},
                        "email": {"type": "string", "format": "email"},
                        "phone": {"type": "string", "pattern": "^[6-9]\\d{9}$"},
                        "subject": {"type": "string", "minLength": 5, "maxLength": 100},
                        "message": {"type": "string", "minLength": 10, "maxLength": 1000}
                    },
                    "required": ["name", "email", "subject", "message"]
                }
            }
        }
    })
}

/// Create a new instance of the contact module
pub fn create_module(mailer: Option<Arc<Mailer>>) -> Arc<dyn Module> {
    Arc::new(ContactModule::new(mailer))
}
