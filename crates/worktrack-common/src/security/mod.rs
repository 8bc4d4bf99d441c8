//! Security primitives

mod otp_hash;

pub use otp_hash::{hash_otp_code, verify_otp_code};
