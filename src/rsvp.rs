//! The RSVP request/response contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest party size a single RSVP may claim.
pub const MAX_GUESTS: u32 = 20;

/// Validation failure for an incoming RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpError {
    #[error("RSVP is missing the guest's name")]
    MissingName,
    #[error("RSVP does not reference an invitation")]
    MissingInvitation,
    #[error("guest count {given} is outside 1..={max}", max = MAX_GUESTS)]
    GuestCountOutOfRange { given: u32 },
}

/// An incoming RSVP submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub invitation_id: String,
    pub name: String,
    pub attending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_guest_count() -> u32 {
    1
}

impl RsvpRequest {
    pub fn new(invitation_id: impl Into<String>, name: impl Into<String>, attending: bool) -> Self {
        Self {
            invitation_id: invitation_id.into(),
            name: name.into(),
            attending,
            email: None,
            phone: None,
            guest_count: default_guest_count(),
            meal_preference: None,
            message: None,
        }
    }

    /// Checks the required fields and guest-count bounds.
    pub fn validate(&self) -> Result<(), RsvpError> {
        if self.invitation_id.trim().is_empty() {
            return Err(RsvpError::MissingInvitation);
        }
        if self.name.trim().is_empty() {
            return Err(RsvpError::MissingName);
        }
        if self.guest_count < 1 || self.guest_count > MAX_GUESTS {
            return Err(RsvpError::GuestCountOutOfRange {
                given: self.guest_count,
            });
        }
        Ok(())
    }
}

/// A stored RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRecord {
    pub id: String,
    #[serde(flatten)]
    pub request: RsvpRequest,
}

/// Wire response to an RSVP submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RsvpResponse {
    Ok { record: RsvpRecord },
    Error { message: String },
}

impl RsvpResponse {
    /// Collapses a store result into the wire shape, turning the failure
    /// into a human-readable message rather than dropping it.
    pub fn from_result<E: std::fmt::Display>(result: Result<RsvpRecord, E>) -> Self {
        match result {
            Ok(record) => RsvpResponse::Ok { record },
            Err(err) => RsvpResponse::Error {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_count_defaults_to_one() {
        let request: RsvpRequest =
            serde_json::from_str(r#"{"invitationId":"inv-1","name":"Meera","attending":true}"#)
                .unwrap();
        assert_eq!(request.guest_count, 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut request = RsvpRequest::new("inv-1", "", true);
        assert_eq!(request.validate(), Err(RsvpError::MissingName));

        request = RsvpRequest::new("  ", "Meera", true);
        assert_eq!(request.validate(), Err(RsvpError::MissingInvitation));
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut request = RsvpRequest::new("inv-1", "Meera", true);
        request.guest_count = 0;
        assert!(matches!(
            request.validate(),
            Err(RsvpError::GuestCountOutOfRange { given: 0 })
        ));
        request.guest_count = MAX_GUESTS + 1;
        assert!(request.validate().is_err());
        request.guest_count = MAX_GUESTS;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_wire_shape() {
        let record = RsvpRecord {
            id: "rsvp-1".into(),
            request: RsvpRequest::new("inv-1", "Meera", true),
        };
        let json = serde_json::to_value(RsvpResponse::Ok { record }).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["record"]["name"], "Meera");
        assert_eq!(json["record"]["guestCount"], 1);

        let err: Result<RsvpRecord, RsvpError> = Err(RsvpError::MissingName);
        let json = serde_json::to_value(RsvpResponse::from_result(err)).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().contains("name"));
    }
}
