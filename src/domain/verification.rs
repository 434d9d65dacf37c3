//! Verification request and status entities

use std::fmt;

use serde_json::Value;

use crate::errors::{Error, Result};

/// A phone verification request
///
/// Immutable once constructed; the three identity fields are required and
/// must be non-empty. An optional payload is forwarded verbatim in the
/// request body.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// Application identifier assigned by the service
    pub id: String,
    /// Access token authorizing the request
    pub access_token: String,
    /// Phone number to verify
    pub phone: String,
    /// Optional opaque payload forwarded to the service
    pub payload: Option<Value>,
}

impl VerificationRequest {
    /// Create a new verification request
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if any of the identity fields is empty.
    pub fn new(
        id: impl Into<String>,
        access_token: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let access_token = access_token.into();
        let phone = phone.into();

        if id.trim().is_empty() {
            return Err(Error::Validation {
                message: "id must not be empty".to_string(),
            });
        }
        if access_token.trim().is_empty() {
            return Err(Error::Validation {
                message: "access_token must not be empty".to_string(),
            });
        }
        if phone.trim().is_empty() {
            return Err(Error::Validation {
                message: "phone must not be empty".to_string(),
            });
        }

        Ok(Self {
            id,
            access_token,
            phone,
            payload: None,
        })
    }

    /// Attach a payload to be forwarded in the request body.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Opaque handle identifying one verification attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a verification attempt as reported by the service
///
/// Any status other than `pending` is terminal. Unknown terminal values are
/// passed through verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Denied,
    Other(String),
}

impl VerificationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for VerificationStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "denied" => Self::Denied,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    pub status: VerificationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_requires_identity_fields() {
        assert!(VerificationRequest::new("123", "token", "+14155552671").is_ok());
        assert!(VerificationRequest::new("", "token", "+14155552671").is_err());
        assert!(VerificationRequest::new("123", "  ", "+14155552671").is_err());
        assert!(VerificationRequest::new("123", "token", "").is_err());
    }

    #[test]
    fn test_request_with_payload() {
        let request = VerificationRequest::new("123", "token", "+14155552671")
            .unwrap()
            .with_payload(json!({ "locale": "en" }));
        assert_eq!(request.payload, Some(json!({ "locale": "en" })));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            VerificationStatus::from("pending"),
            VerificationStatus::Pending
        );
        assert_eq!(
            VerificationStatus::from("approved"),
            VerificationStatus::Approved
        );
        assert_eq!(
            VerificationStatus::from("denied"),
            VerificationStatus::Denied
        );
        assert_eq!(
            VerificationStatus::from("expired"),
            VerificationStatus::Other("expired".to_string())
        );
    }

    #[test]
    fn test_status_terminality() {
        assert!(!VerificationStatus::Pending.is_terminal());
        assert!(VerificationStatus::Approved.is_terminal());
        assert!(VerificationStatus::Denied.is_terminal());
        assert!(VerificationStatus::Other("expired".to_string()).is_terminal());

        assert!(VerificationStatus::Approved.is_approved());
        assert!(!VerificationStatus::Denied.is_approved());
        assert!(!VerificationStatus::Other("approved ".to_string()).is_approved());
    }

    #[test]
    fn test_status_round_trip() {
        for raw in ["pending", "approved", "denied", "expired"] {
            assert_eq!(VerificationStatus::from(raw).as_str(), raw);
        }
    }
}
