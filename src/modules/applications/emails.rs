//! Email bodies for the intake pipeline.
//!
//! Plain string templates; only the dynamic-field substitution is worth
//! testing. One message summarizes the applicant for the administrator,
//! the other confirms receipt to the applicant.

use super::models::ApplicationPayload;

/// Subject and HTML body for the administrator summary.
pub fn admin_notification(payload: &ApplicationPayload) -> (String, String) {
    let subject = format!("New Advisor Application - {}", payload.full_name);
    let html = format!(
        r#"<h2>New Advisor Application</h2>
<div style="background: #f5f5f5; padding: 20px; border-radius: 8px;">
  <h3>Applicant Details:</h3>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Mobile:</strong> {mobile}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>City:</strong> {city}</p>
  <p><strong>Occupation:</strong> {occupation}</p>
  <p><strong>Education:</strong> {education}</p>
  <p><strong>Sales Experience:</strong> {sales_experience}</p>
</div>
<div style="background: #f9f9f9; padding: 20px; border-radius: 8px;">
  <h3>Reason for Interest:</h3>
  <p>{reason}</p>
</div>"#,
        name = payload.full_name,
        mobile = payload.mobile,
        email = payload.email,
        city = payload.city,
        occupation = payload.occupation.as_str(),
        education = payload.education.as_str(),
        sales_experience = if payload.sales_experience { "yes" } else { "no" },
        reason = payload.reason,
    );
    (subject, html)
}

/// Subject and HTML body for the applicant auto-reply.
pub fn applicant_confirmation(payload: &ApplicationPayload) -> (String, String) {
    let subject = "Welcome to AgentPath - Application Received!".to_string();
    let html = format!(
        r#"<div style="max-width: 600px; margin: 0 auto; font-family: Arial, sans-serif;">
  <h1>Welcome to AgentPath!</h1>
  <p>Dear {name},</p>
  <p>Thank you for your interest in becoming an insurance advisor! We have
  received your application and will help you start your journey.</p>
  <h3>What happens next?</h3>
  <ul>
    <li>Our team will contact you within 24 hours</li>
    <li>You'll receive your free study materials via email</li>
    <li>We'll schedule your training session and licensing-exam guidance</li>
  </ul>
  <h3>Your Application Summary:</h3>
  <p><strong>Mobile:</strong> {mobile}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>City:</strong> {city}</p>
  <p><strong>Current Occupation:</strong> {occupation}</p>
  <p><strong>Education:</strong> {education}</p>
  <p>Best regards,<br><strong>AgentPath Careers Team</strong></p>
  <hr>
  <p style="font-size: 12px; color: #666;">This email was sent because you
  submitted an application on our website. If you did not request this,
  please ignore this email.</p>
</div>"#,
        name = payload.full_name,
        mobile = payload.mobile,
        email = payload.email,
        city = payload.city,
        occupation = payload.occupation.as_str(),
        education = payload.education.as_str(),
    );
    (subject, html)
}
