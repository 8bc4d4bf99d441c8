//! OTP engine
//!
//! Issues, rate-limits, verifies, and consumes the one-time codes that gate
//! task completion. This service never transmits codes anywhere - the
//! plaintext is returned exactly once to the caller, which owns delivery.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use worktrack_common::{hash_otp_code, verify_otp_code};
use worktrack_core::entities::{
    generate_otp_code, OtpOutcome, OtpRecord, Task, OTP_BURST_WINDOW_MINUTES, OTP_DAILY_CAP,
    OTP_DAILY_WINDOW_HOURS, OTP_DEFAULT_TTL_HOURS,
};
use worktrack_core::{DomainError, RateLimitWindow};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A freshly minted code, returned to the caller exactly once for delivery.
/// The plaintext is never persisted.
#[derive(Debug)]
pub struct IssuedOtp {
    pub code: String,
    pub task: Task,
    pub ttl_hours: i64,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// OTP engine service
pub struct OtpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OtpService<'a> {
    /// Create a new OtpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mint a new code for a task
    ///
    /// Rate limits are evaluated against the record history before anything
    /// is generated: at most one issuance per 10 minutes and five per 24
    /// hours per task. On success one new record is inserted; no existing
    /// rows are touched - a racing older record simply becomes inert because
    /// verification only ever reads the latest one.
    #[instrument(skip(self), fields(task_id = %task_id))]
    pub async fn issue(&self, task_id: Uuid, ttl_hours: Option<i64>) -> ServiceResult<IssuedOtp> {
        let ttl_hours = ttl_hours.unwrap_or(OTP_DEFAULT_TTL_HOURS);

        let task = self
            .ctx
            .task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(task_id))?;

        let now = Utc::now();

        let burst_cutoff = now - Duration::minutes(OTP_BURST_WINDOW_MINUTES);
        let recent = self
            .ctx
            .otp_repo()
            .count_created_since(task_id, burst_cutoff)
            .await?;
        if recent > 0 {
            warn!(task_id = %task_id, "OTP issuance refused: burst window");
            return Err(DomainError::OtpRateLimited(RateLimitWindow::Burst).into());
        }

        let daily_cutoff = now - Duration::hours(OTP_DAILY_WINDOW_HOURS);
        let today = self
            .ctx
            .otp_repo()
            .count_created_since(task_id, daily_cutoff)
            .await?;
        if today >= OTP_DAILY_CAP {
            warn!(task_id = %task_id, count = today, "OTP issuance refused: daily cap");
            return Err(DomainError::OtpRateLimited(RateLimitWindow::Daily).into());
        }

        let code = generate_otp_code();

        // The hash is deliberately slow; run it off the async executor so
        // concurrent requests are not starved while it grinds.
        let code_for_hash = code.clone();
        let otp_hash = tokio::task::spawn_blocking(move || hash_otp_code(&code_for_hash))
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .map_err(ServiceError::from)?;

        let record = OtpRecord::new(task_id, otp_hash, ttl_hours);
        let expires_at = record.expires_at;
        self.ctx.otp_repo().create(&record).await?;

        info!(task_id = %task_id, ttl_hours, "Issued task verification code");

        Ok(IssuedOtp {
            code,
            task,
            ttl_hours,
            expires_at,
        })
    }

    /// Validate a submitted code against the task's current record and, on a
    /// match, consume the record so the same code can never succeed twice.
    ///
    /// Only the latest record by created_at is consulted. Expiry and the
    /// attempt ceiling are checked before the (slow) hash comparison, and
    /// neither of those paths mutates anything.
    #[instrument(skip(self, provided_code), fields(task_id = %task_id))]
    pub async fn verify_and_consume(
        &self,
        task_id: Uuid,
        provided_code: &str,
    ) -> ServiceResult<OtpOutcome> {
        let Some(record) = self.ctx.otp_repo().find_latest_for_task(task_id).await? else {
            return Ok(OtpOutcome::NotFound);
        };

        let now = Utc::now();

        if record.is_expired(now) {
            return Ok(OtpOutcome::Expired);
        }

        if record.attempts_exhausted() {
            warn!(task_id = %task_id, "Verification refused: attempt ceiling reached");
            return Ok(OtpOutcome::MaxAttemptsExceeded);
        }

        let code = provided_code.to_string();
        let hash = record.otp_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_otp_code(&code, &hash))
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .map_err(ServiceError::from)?;

        if !matches {
            self.ctx.otp_repo().record_failed_attempt(record.id).await?;
            warn!(task_id = %task_id, attempts = record.attempts + 1, "Invalid verification code");
            return Ok(OtpOutcome::Invalid);
        }

        self.ctx.otp_repo().consume(record.id, now).await?;
        info!(task_id = %task_id, "Verification code consumed");

        Ok(OtpOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{backdate_latest_expiry, seed_task, test_context};
    use worktrack_core::entities::{TaskStatus, OTP_MAX_ATTEMPTS};

    #[tokio::test]
    async fn test_issue_returns_six_digit_code() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        let issued = OtpService::new(&ctx).issue(task.id, None).await.unwrap();

        assert_eq!(issued.code.len(), 6);
        assert!(issued.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(issued.ttl_hours, OTP_DEFAULT_TTL_HOURS);

        // Stored record is hashed, never plaintext, with zero attempts
        let record = fakes.otps.latest(task.id).unwrap();
        assert_ne!(record.otp_hash, issued.code);
        assert!(record.otp_hash.starts_with("$argon2"));
        assert_eq!(record.attempts, 0);
    }

    #[tokio::test]
    async fn test_issue_unknown_task_is_not_found() {
        let (ctx, _fakes) = test_context();

        let err = OtpService::new(&ctx)
            .issue(Uuid::new_v4(), None)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_second_issue_within_burst_window_is_rate_limited() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        service.issue(task.id, None).await.unwrap();
        let err = service.issue(task.id, None).await.unwrap_err();

        assert_eq!(err.status_code(), 429);
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::OtpRateLimited(RateLimitWindow::Burst))
        ));
        // No second record was inserted
        assert_eq!(fakes.otps.count(task.id), 1);
    }

    #[tokio::test]
    async fn test_sixth_issue_within_daily_window_is_rate_limited() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        // Five prior issuances spaced outside the burst window but inside 24h
        for i in 1..=5 {
            fakes
                .otps
                .insert_backdated(task.id, Duration::minutes(15 * i));
        }

        let err = service.issue(task.id, None).await.unwrap_err();

        assert_eq!(err.status_code(), 429);
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::OtpRateLimited(RateLimitWindow::Daily))
        ));
    }

    #[tokio::test]
    async fn test_issuances_older_than_a_day_do_not_count() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        for i in 0..5 {
            fakes
                .otps
                .insert_backdated(task.id, Duration::hours(25 + i));
        }

        // The day-old history is inert; a fresh issuance goes through
        assert!(OtpService::new(&ctx).issue(task.id, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_round_trip_then_replay_is_expired() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        let issued = service.issue(task.id, None).await.unwrap();

        let outcome = service
            .verify_and_consume(task.id, &issued.code)
            .await
            .unwrap();
        assert_eq!(outcome, OtpOutcome::Success);

        // Consumption stamped the record: attempts counts the successful
        // call and expiry was forced to the verification instant
        let record = fakes.otps.latest(task.id).unwrap();
        assert!(record.attempts >= 1);
        assert!(record.is_expired(Utc::now() + Duration::seconds(1)));

        // Replaying the same (correct) code must never succeed twice
        let replay = service
            .verify_and_consume(task.id, &issued.code)
            .await
            .unwrap();
        assert_eq!(replay, OtpOutcome::Expired);
    }

    #[tokio::test]
    async fn test_wrong_code_increments_attempts_until_ceiling() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        let issued = service.issue(task.id, None).await.unwrap();
        let wrong = if issued.code == "000000" { "000001" } else { "000000" };

        for expected_attempts in 1..=OTP_MAX_ATTEMPTS {
            let outcome = service.verify_and_consume(task.id, wrong).await.unwrap();
            assert_eq!(outcome, OtpOutcome::Invalid);
            assert_eq!(fakes.otps.latest(task.id).unwrap().attempts, expected_attempts);
        }

        // Ceiling reached: even the correct code is refused, with no mutation
        let outcome = service
            .verify_and_consume(task.id, &issued.code)
            .await
            .unwrap();
        assert_eq!(outcome, OtpOutcome::MaxAttemptsExceeded);
        assert_eq!(fakes.otps.latest(task.id).unwrap().attempts, OTP_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_verify_without_issuance_is_not_found() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        let outcome = OtpService::new(&ctx)
            .verify_and_consume(task.id, "123456")
            .await
            .unwrap();

        assert_eq!(outcome, OtpOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_verify_after_ttl_is_expired_regardless_of_code() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        let issued = service.issue(task.id, None).await.unwrap();
        backdate_latest_expiry(&fakes, task.id);

        let outcome = service
            .verify_and_consume(task.id, &issued.code)
            .await
            .unwrap();
        assert_eq!(outcome, OtpOutcome::Expired);

        // Expiry is terminal and mutation-free
        assert_eq!(fakes.otps.latest(task.id).unwrap().attempts, 0);
    }

    #[tokio::test]
    async fn test_verify_tolerates_arbitrary_strings() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        service.issue(task.id, None).await.unwrap();

        for garbage in ["", "abc", "12345", "1234567", "!!@@##"] {
            let outcome = service.verify_and_consume(task.id, garbage).await.unwrap();
            assert_eq!(outcome, OtpOutcome::Invalid);
        }
    }

    #[tokio::test]
    async fn test_latest_record_wins_over_history() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);
        let service = OtpService::new(&ctx);

        // An older issuance exists (outside the burst window); a new issue
        // supersedes it for verification purposes
        fakes
            .otps
            .insert_backdated(task.id, Duration::minutes(30));
        let issued = service.issue(task.id, None).await.unwrap();

        let outcome = service
            .verify_and_consume(task.id, &issued.code)
            .await
            .unwrap();
        assert_eq!(outcome, OtpOutcome::Success);
    }

    #[tokio::test]
    async fn test_issue_does_not_touch_task_state() {
        let (ctx, fakes) = test_context();
        let task = seed_task(&fakes);

        OtpService::new(&ctx).issue(task.id, None).await.unwrap();

        let stored = fakes.tasks.get(task.id).unwrap();
        assert_eq!(stored.status, TaskStatus::Pending);
        assert!(stored.completed_at.is_none());
    }
}
