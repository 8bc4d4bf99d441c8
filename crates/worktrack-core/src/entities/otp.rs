//! One-time passcode record - the credential gating task completion
//!
//! A task accumulates OTP records over time; only the most recently created
//! one is ever consulted by verification. Records are never deleted - the
//! history doubles as the issuance rate-limit ledger and an audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of decimal digits in a generated code
pub const OTP_CODE_LENGTH: usize = 6;

/// Verification attempts allowed per record before it is refused outright
pub const OTP_MAX_ATTEMPTS: i32 = 5;

/// Minimum minutes between two issuances for the same task
pub const OTP_BURST_WINDOW_MINUTES: i64 = 10;

/// Length of the daily issuance window in hours
pub const OTP_DAILY_WINDOW_HOURS: i64 = 24;

/// Maximum issuances per task within the daily window
pub const OTP_DAILY_CAP: i64 = 5;

/// Default time-to-live for a freshly issued code, in hours
pub const OTP_DEFAULT_TTL_HOURS: i64 = 24;

/// One OTP issuance for a task
///
/// `otp_hash` is write-once; only `attempts` and `expires_at` mutate after
/// creation. Successful consumption forces `expires_at` to the verification
/// instant, so expiry doubles as the consumed marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub id: Uuid,
    pub task_id: Uuid,
    pub otp_hash: String,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Create a new record for a task with the given hash and TTL
    pub fn new(task_id: Uuid, otp_hash: String, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            task_id,
            otp_hash,
            attempts: 0,
            created_at: now,
            expires_at: now + chrono::Duration::hours(ttl_hours),
        }
    }

    /// Check if the record has passed its expiry instant
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check if the attempt ceiling has been reached
    #[inline]
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= OTP_MAX_ATTEMPTS
    }

    /// Check if the record can still be verified against
    #[inline]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired(now) && !self.attempts_exhausted()
    }
}

/// Outcome of a verification call
///
/// Every variant maps to a distinct user-facing message so the caller knows
/// whether to retry the same code, request a new one, or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OtpOutcome {
    /// Code matched; the record is now consumed and the task may complete
    Success,
    /// No code was ever issued for this task
    NotFound,
    /// The record's TTL elapsed (or it was already consumed)
    Expired,
    /// The attempt ceiling was reached; even the correct code is refused
    MaxAttemptsExceeded,
    /// Wrong code; retryable until the ceiling
    Invalid,
}

impl OtpOutcome {
    /// Stable code string for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "OTP_SUCCESS",
            Self::NotFound => "OTP_NOT_FOUND",
            Self::Expired => "OTP_EXPIRED",
            Self::MaxAttemptsExceeded => "OTP_MAX_ATTEMPTS",
            Self::Invalid => "OTP_INVALID",
        }
    }

    /// Whether the task state transition may proceed
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Generate a random 6-digit decimal code, `000000`-`999999`
///
/// The decimal space together with the attempt ceiling bounds brute-force
/// success probability to at most 5e-6 per record.
pub fn generate_otp_code() -> String {
    use rand::Rng;

    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_otp_code_format() {
        for _ in 0..100 {
            let code = generate_otp_code();
            assert_eq!(code.len(), OTP_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_otp_code_covers_range() {
        // Over many trials both halves of the space must show up; the zero
        // padding must also survive for small values.
        let mut low = false;
        let mut high = false;
        for _ in 0..10_000 {
            let code = generate_otp_code();
            let n: u32 = code.parse().unwrap();
            if n < 500_000 {
                low = true;
            } else {
                high = true;
            }
        }
        assert!(low && high, "codes should span the full decimal space");
    }

    #[test]
    fn test_record_active_when_fresh() {
        let record = OtpRecord::new(Uuid::new_v4(), "$argon2id$stub".to_string(), 24);
        let now = Utc::now();
        assert!(record.is_active(now));
        assert!(!record.is_expired(now));
        assert!(!record.attempts_exhausted());
    }

    #[test]
    fn test_record_expired_at_boundary() {
        let mut record = OtpRecord::new(Uuid::new_v4(), "$argon2id$stub".to_string(), 24);
        record.expires_at = record.created_at;
        // now >= expires_at counts as expired, not strictly greater
        assert!(record.is_expired(record.created_at));
        assert!(!record.is_active(record.created_at));
    }

    #[test]
    fn test_record_exhausted_at_ceiling() {
        let mut record = OtpRecord::new(Uuid::new_v4(), "$argon2id$stub".to_string(), 24);
        record.attempts = OTP_MAX_ATTEMPTS - 1;
        assert!(!record.attempts_exhausted());
        record.attempts = OTP_MAX_ATTEMPTS;
        assert!(record.attempts_exhausted());
        assert!(!record.is_active(Utc::now()));
    }

    #[test]
    fn test_outcome_codes_distinct() {
        let outcomes = [
            OtpOutcome::Success,
            OtpOutcome::NotFound,
            OtpOutcome::Expired,
            OtpOutcome::MaxAttemptsExceeded,
            OtpOutcome::Invalid,
        ];
        for (i, a) in outcomes.iter().enumerate() {
            for b in outcomes.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
        assert!(OtpOutcome::Success.is_success());
        assert!(!OtpOutcome::Invalid.is_success());
    }
}
