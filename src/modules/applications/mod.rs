pub mod emails;
pub mod models;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use agentpath_http::error::AppError;
use agentpath_kernel::{InitCtx, Module};
use agentpath_mailer::Mailer;
use agentpath_store::SharedStore;

use crate::validation;

use models::{ApplicationPayload, SubmitResponse};
use service::IntakeService;

/// Recruitment application intake.
pub struct ApplicationsModule {
    service: IntakeService,
}

impl ApplicationsModule {
    pub fn new(store: SharedStore, mailer: Option<Arc<Mailer>>) -> Self {
        Self {
            service: IntakeService::new(store, mailer),
        }
    }
}

#[async_trait]
impl Module for ApplicationsModule {
    fn name(&self) -> &'static str {
        "applications"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "applications module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(submit_application))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }
}

/// POST / - submit a recruitment application
async fn submit_application(
    State(service): State<IntakeService>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SubmitResponse>, AppError> {
    let payload: ApplicationPayload = validation::parse_payload(body)?;
    let application_id = service.submit(payload).await?;
    Ok(Json(SubmitResponse {
        message: "Application submitted successfully".to_string(),
        application_id,
    }))
}

fn openapi_fragment() -> serde_json::Value {
    json!({
        "paths": {
            "/": {
                "post": {
                    "summary": "Submit a recruitment application",
                    "tags": ["Applications"],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/ApplicationPayload"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Accepted; applicationId present when persisted",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "message": {"type": "string"},
                                            "applicationId": {"type": "string", "format": "uuid", "nullable": true}
                                        }
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
                        },
                        "409": {
                            "description": "An application with this email already exists",
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
                "ApplicationPayload": {
                    "type": "object",
                    "properties": {
                        "fullName": {"type": "string", "minLength": 2, "maxLength": 50},
                        "email": {"type": "string", "format": "email", "maxLength": 100},
                        "mobile": {"type": "string", "pattern": "^[6-9]\\d{9}$"},
                        "city": {"type": "string", "minLength": 2, "maxLength": 50},
                        "occupation": {
                            "type": "string",
                            "enum": ["employed", "self-employed", "homemaker", "student", "retired"]
                        },
                        "education": {
                            "type": "string",
                            "enum": ["10th", "12th", "graduate", "post-graduate"]
                        },
                        "salesExperience": {"type": "boolean"},
                        "reason": {"type": "string", "minLength": 10, "maxLength": 500}
                    },
                    "required": [
                        "fullName", "email", "mobile", "city",
                        "occupation", "education", "salesExperience", "reason"
                    ]
                }
            }
        }
    })
}

/// Create a new instance of the applications module
pub fn create_module(store: SharedStore, mailer: Option<Arc<Mailer>>) -> Arc<dyn Module> {
    Arc::new(ApplicationsModule::new(store, mailer))
}
