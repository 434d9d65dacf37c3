//! Domain entities for phone verification

pub mod verification;

pub use verification::{MessageId, StatusResult, VerificationRequest, VerificationStatus};
