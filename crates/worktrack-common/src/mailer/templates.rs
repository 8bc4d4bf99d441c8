//! Email body rendering
//!
//! Small inline templates; every email carries an HTML part and a plain-text
//! alternative.

/// Rendered email body
#[derive(Debug, Clone)]
pub struct EmailBody {
    pub html: String,
    pub text: String,
}

/// Render the task verification code email sent to a client
pub fn render_task_otp_email(code: &str, task_title: Option<&str>, ttl_hours: i64) -> EmailBody {
    let for_task = task_title
        .map(|t| format!(" for <strong>{t}</strong>"))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family:Arial,Helvetica,sans-serif;line-height:1.4;color:#111">
  <h2>Task verification code</h2>
  <p>Use the following verification code to confirm task completion{for_task}:</p>
  <p style="font-size:20px;font-weight:700;">{code}</p>
  <p>This code expires in {ttl_hours} hours.</p>
  <p>If you did not request this, please ignore this message.</p>
</div>"#
    );

    let text = format!("Your verification code is {code}. It expires in {ttl_hours} hours.");

    EmailBody { html, text }
}

/// Render the signup acknowledgement email
pub fn render_welcome_email(full_name: &str) -> EmailBody {
    let html = format!(
        "<p>Hello {full_name},</p><p>Thanks for signing up. An admin will review your account shortly.</p>"
    );
    let text = format!(
        "Hello {full_name}, thanks for signing up. An admin will review your account shortly."
    );
    EmailBody { html, text }
}

/// Render the onboarding approval email
pub fn render_approval_email(full_name: &str, app_url: &str) -> EmailBody {
    let html = format!(
        "<p>Hi {full_name},</p><p>Your account is approved. Please set your password via the app: {app_url}</p>"
    );
    let text = format!(
        "Hi {full_name}, your account is approved. Set your password via the app: {app_url}"
    );
    EmailBody { html, text }
}

/// Render the onboarding rejection email
pub fn render_rejection_email(full_name: &str, reason: Option<&str>) -> EmailBody {
    let reason = reason.unwrap_or("Not specified");
    let html = format!(
        "<p>Hi {full_name},</p><p>We are unable to approve your application at this time.</p><p>Reason: {reason}</p>"
    );
    let text =
        format!("Hi {full_name}, we are unable to approve your application. Reason: {reason}");
    EmailBody { html, text }
}
