//! # worktrack-common
//!
//! Shared utilities including configuration, error handling, OTP code
//! hashing, the SMTP mailer, and telemetry.

pub mod config;
pub mod error;
pub mod mailer;
pub mod security;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, RedisConfig, ServerConfig, SmtpConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use mailer::{
    render_approval_email, render_rejection_email, render_task_otp_email, render_welcome_email,
    EmailBody, Mailer, MailerError,
};
pub use security::{hash_otp_code, verify_otp_code};
pub use telemetry::{
    init_tracing, try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
