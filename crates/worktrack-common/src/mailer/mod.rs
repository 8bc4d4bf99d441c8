//! Outbound email
//!
//! Delivery is best-effort: callers log failures and carry on. Nothing in
//! the mailer is transactional with storage.

mod smtp;
mod templates;

pub use smtp::{Mailer, MailerError};
pub use templates::{
    render_approval_email, render_rejection_email, render_task_otp_email, render_welcome_email,
    EmailBody,
};
