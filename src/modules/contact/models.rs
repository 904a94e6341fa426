use serde::Deserialize;
use validator::Validate;

/// Contact form body. Not persisted; validated and forwarded by email.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(regex(
        path = "crate::validation::MOBILE_RE",
        message = "Please enter a valid 10-digit mobile number"
    ))]
    pub phone: Option<String>,
    #[validate(length(min = 5, max = 100, message = "Subject must be 5-100 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 1000, message = "Message must be 10-1000 characters"))]
    pub message: String,
}
