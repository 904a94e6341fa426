//! Email bodies for the contact pipeline.

use super::models::ContactPayload;

/// Subject and HTML body forwarding the message to the administrator.
pub fn admin_notification(payload: &ContactPayload) -> (String, String) {
    let subject = format!("Contact Form: {} - {}", payload.subject, payload.name);
    let phone_row = payload
        .phone
        .as_deref()
        .map(|phone| format!("<p><strong>Phone:</strong> {phone}</p>"))
        .unwrap_or_default();
    let html = format!(
        r#"<h2>New Contact Form Submission</h2>
<div style="background: #f5f5f5; padding: 20px; border-radius: 8px;">
  <h3>Contact Details:</h3>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  {phone_row}
  <p><strong>Subject:</strong> {subject}</p>
</div>
<div style="background: #f9f9f9; padding: 20px; border-radius: 8px;">
  <h3>Message:</h3>
  <p>{message}</p>
</div>"#,
        name = payload.name,
        email = payload.email,
        subject = payload.subject,
        message = payload.message,
    );
    (subject, html)
}

/// Subject and HTML body for the sender auto-reply. Long messages are
/// truncated to a 150-character preview.
pub fn auto_reply(payload: &ContactPayload) -> (String, String) {
    let subject = "Thank you for contacting AgentPath!".to_string();
    let preview: String = payload.message.chars().take(150).collect();
    let ellipsis = if payload.message.chars().count() > 150 {
        "..."
    } else {
        ""
    };
    let html = format!(
        r#"<div style="max-width: 600px; margin: 0 auto; font-family: Arial, sans-serif;">
  <h1>Thank You for Contacting Us!</h1>
  <p>Dear {name},</p>
  <p>We have received your message and appreciate your interest in our
  services. Our team will review it and respond within 24 hours.</p>
  <h3>Your Message Summary:</h3>
  <p><strong>Subject:</strong> {subject}</p>
  <p><strong>Message:</strong> {preview}{ellipsis}</p>
  <p>Best regards,<br><strong>AgentPath Careers Team</strong></p>
  <hr>
  <p style="font-size: 12px; color: #666;">This is an automated response.
  Please do not reply to this email.</p>
</div>"#,
        name = payload.name,
        subject = payload.subject,
    );
    (subject, html)
}
