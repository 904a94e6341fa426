use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use agentpath_store::{Education, Occupation};

/// Recruitment application form body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    #[validate(
        length(min = 2, max = 50, message = "Name must be 2-50 characters"),
        custom = "crate::validation::letters_and_spaces"
    )]
    pub full_name: String,
    #[validate(
        email(message = "Please enter a valid email address"),
        length(max = 100, message = "Email must be less than 100 characters")
    )]
    pub email: String,
    #[validate(regex(
        path = "crate::validation::MOBILE_RE",
        message = "Please enter a valid 10-digit mobile number"
    ))]
    pub mobile: String,
    #[validate(length(min = 2, max = 50, message = "City must be 2-50 characters"))]
    pub city: String,
    pub occupation: Occupation,
    pub education: Education,
    pub sales_experience: bool,
    #[validate(length(min = 10, max = 500, message = "Reason must be 10-500 characters"))]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    /// Present when the best-effort save succeeded.
    pub application_id: Option<Uuid>,
}
