//! OTP code hashing and verification
//!
//! Uses Argon2id with a per-code random salt. The plaintext code is never
//! persisted; only this hash reaches storage. Verification latency is the
//! deliberate cost of a memory-hard hash, so callers in async contexts must
//! run both functions off the executor (see the OTP service).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash an OTP code using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_otp_code(code: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(code.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("OTP hashing failed: {e}")))
}

/// Verify a submitted code against a stored hash
///
/// The comparison inherits the hash algorithm's constant-time semantics.
/// Tolerates arbitrary input strings; a malformed submission simply fails to
/// match.
///
/// # Errors
/// Returns an error if the stored hash is not a valid PHC string
pub fn verify_otp_code(code: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid OTP hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(code.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_otp_code() {
        let code = "483920";
        let hash = hash_otp_code(code).unwrap();

        // Hash should carry the argon2 identifier and a fresh salt each time
        assert!(hash.starts_with("$argon2"));
        let hash2 = hash_otp_code(code).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_otp_code_success() {
        let code = "000042";
        let hash = hash_otp_code(code).unwrap();
        assert!(verify_otp_code(code, &hash).unwrap());
    }

    #[test]
    fn test_verify_otp_code_failure() {
        let hash = hash_otp_code("123456").unwrap();
        assert!(!verify_otp_code("654321", &hash).unwrap());
    }

    #[test]
    fn test_verify_tolerates_arbitrary_input() {
        let hash = hash_otp_code("123456").unwrap();
        // Not six digits, not even ASCII digits - must fail cleanly, not error
        assert!(!verify_otp_code("", &hash).unwrap());
        assert!(!verify_otp_code("not-a-code", &hash).unwrap());
        assert!(!verify_otp_code("1234567890", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_otp_code("123456", "not-a-phc-string").is_err());
    }
}
