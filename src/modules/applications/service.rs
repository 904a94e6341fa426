//! Application intake: validate → best-effort persist → notify.
//!
//! Persistence and notification are deliberately not transactional. A
//! duplicate email is the one hard stop; any other store failure is logged
//! and the submission still proceeds to notification. Emails are awaited
//! before returning, but their failures never fail the submission.

use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use agentpath_http::error::AppError;
use agentpath_mailer::Mailer;
use agentpath_store::{ApplicationRecord, SharedStore, StoreError};

use crate::validation;

use super::emails;
use super::models::ApplicationPayload;

#[derive(Clone)]
pub struct IntakeService {
    store: SharedStore,
    mailer: Option<Arc<Mailer>>,
}

impl IntakeService {
    pub fn new(store: SharedStore, mailer: Option<Arc<Mailer>>) -> Self {
        Self { store, mailer }
    }

    /// Process one submission. Returns the record id when the save succeeded.
    pub async fn submit(&self, payload: ApplicationPayload) -> Result<Option<Uuid>, AppError> {
        validation::check(&payload)?;

        let now = OffsetDateTime::now_utc();
        let record = ApplicationRecord {
            id: Uuid::now_v7(),
            full_name: payload.full_name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            mobile: payload.mobile.clone(),
            city: payload.city.trim().to_string(),
            occupation: payload.occupation,
            education: payload.education,
            sales_experience: payload.sales_experience,
            reason: payload.reason.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        let application_id = match self.store.insert_application(record).await {
            Ok(saved) => {
                tracing::info!(id = %saved.id, "application saved");
                Some(saved.id)
            }
            // Resubmission with a known email must be blocked outright.
            Err(StoreError::DuplicateEmail(email)) => {
                return Err(StoreError::DuplicateEmail(email).into());
            }
            Err(error) => {
                tracing::warn!(%error, "application not persisted; continuing with notification");
                None
            }
        };

        self.notify(&payload).await;
        Ok(application_id)
    }

    async fn notify(&self, payload: &ApplicationPayload) {
        let Some(mailer) = &self.mailer else {
            tracing::debug!("mailer not configured; skipping application notification");
            return;
        };

        let (subject, html) = emails::admin_notification(payload);
        if let Err(error) = mailer.send_admin(&subject, &html).await {
            tracing::error!(%error, "failed to send admin notification");
        }

        let (subject, html) = emails::applicant_confirmation(payload);
        if let Err(error) = mailer.send(&payload.email, &subject, &html).await {
            tracing::error!(%error, "failed to send applicant confirmation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentpath_store::{DisabledStore, Education, MemoryStore, Occupation};

    fn payload(email: &str) -> ApplicationPayload {
        ApplicationPayload {
            full_name: "Ravi Kumar".to_string(),
            email: email.to_string(),
            mobile: "9876543210".to_string(),
            city: "Pune".to_string(),
            occupation: Occupation::Employed,
            education: Education::Graduate,
            sales_experience: false,
            reason: "Looking for a second income stream".to_string(),
        }
    }

    fn service(store: SharedStore) -> IntakeService {
        IntakeService::new(store, None)
    }

    #[tokio::test]
    async fn valid_submission_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let service = service(store.clone());

        let id = service.submit(payload("ravi@example.com")).await.unwrap();
        assert!(id.is_some());
        assert_eq!(store.application_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_hard_conflict() {
        let store = Arc::new(MemoryStore::new());
        let service = service(store.clone());

        service.submit(payload("ravi@example.com")).await.unwrap();
        // Same address with different casing still collides.
        let err = service
            .submit(payload("Ravi@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(store.application_count(), 1);
    }

    #[tokio::test]
    async fn unavailable_store_degrades_to_notification_only() {
        let service = service(Arc::new(DisabledStore::new()));
        let id = service.submit(payload("ravi@example.com")).await.unwrap();
        assert!(id.is_none(), "submission succeeds without persistence");
    }

    #[tokio::test]
    async fn mobile_must_start_with_six_to_nine() {
        let service = service(Arc::new(MemoryStore::new()));
        let mut bad = payload("ravi@example.com");
        bad.mobile = "5123456789".to_string();

        let err = service.submit(bad).await.unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details.iter().any(|d| d["field"] == "mobile"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[tokio::test]
    async fn name_with_digits_is_rejected() {
        let service = service(Arc::new(MemoryStore::new()));
        let mut bad = payload("ravi@example.com");
        bad.full_name = "Ravi 2nd".to_string();
        let err = service.submit(bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn short_reason_is_rejected() {
        let service = service(Arc::new(MemoryStore::new()));
        let mut bad = payload("ravi@example.com");
        bad.reason = "too short".to_string();
        let err = service.submit(bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
