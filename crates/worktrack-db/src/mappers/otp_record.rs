//! OTP record entity <-> model mapper

use worktrack_core::entities::OtpRecord;

use crate::models::OtpRecordModel;

/// Convert OtpRecordModel to OtpRecord entity
impl From<OtpRecordModel> for OtpRecord {
    fn from(model: OtpRecordModel) -> Self {
        OtpRecord {
            id: model.id,
            task_id: model.task_id,
            otp_hash: model.otp_hash,
            attempts: model.attempts,
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
