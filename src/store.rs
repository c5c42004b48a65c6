//! The persistence collaborator seam.
//!
//! [`InvitationStore`] is the narrow interface the styling core consumes
//! but does not implement: a hosted backend sits behind it in production.
//! [`MemoryStore`] backs tests and local previews. Failures are explicit
//! [`StoreError`] values with human-readable messages; nothing here panics
//! or swallows an error.

use std::collections::HashMap;

use thiserror::Error;

use crate::document::{Invitation, Status};
use crate::rsvp::{RsvpError, RsvpRecord, RsvpRequest};

/// Failure surfaced by a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no invitation found for slug \"{slug}\"")]
    NotFound { slug: String },

    #[error("invitation \"{slug}\" is not published")]
    NotPublished { slug: String },

    #[error("no invitation with id \"{id}\"")]
    UnknownInvitation { id: String },

    #[error("invalid RSVP: {0}")]
    Rsvp(#[from] RsvpError),

    /// Backend/network failure, carried through for the UI to display.
    #[error("storage backend unavailable: {message}")]
    Backend { message: String },
}

/// Narrow contract with the invitation persistence backend.
pub trait InvitationStore {
    /// Fetches an invitation regardless of status (editor use).
    fn fetch(&self, slug: &str) -> Result<Invitation, StoreError>;

    /// Persists an invitation, replacing any existing document at its slug.
    fn save(&mut self, invitation: Invitation) -> Result<(), StoreError>;

    /// The public-page lookup: returns the invitation only if it is
    /// published, incrementing its view counter as a side effect.
    fn publish_view(&mut self, slug: &str) -> Result<Invitation, StoreError>;

    /// Validates and stores an RSVP against an existing invitation.
    fn record_rsvp(&mut self, request: RsvpRequest) -> Result<RsvpRecord, StoreError>;
}

/// In-memory store for tests and local previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    invitations: HashMap<String, Invitation>,
    rsvps: Vec<RsvpRecord>,
    next_rsvp_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// RSVPs recorded so far, in arrival order.
    pub fn rsvps(&self) -> &[RsvpRecord] {
        &self.rsvps
    }
}

impl InvitationStore for MemoryStore {
    fn fetch(&self, slug: &str) -> Result<Invitation, StoreError> {
        self.invitations
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                slug: slug.to_string(),
            })
    }

    fn save(&mut self, invitation: Invitation) -> Result<(), StoreError> {
        self.invitations.insert(invitation.slug.clone(), invitation);
        Ok(())
    }

    fn publish_view(&mut self, slug: &str) -> Result<Invitation, StoreError> {
        let invitation = self
            .invitations
            .get_mut(slug)
            .ok_or_else(|| StoreError::NotFound {
                slug: slug.to_string(),
            })?;
        if invitation.status != Status::Published {
            return Err(StoreError::NotPublished {
                slug: slug.to_string(),
            });
        }
        invitation.view_count += 1;
        Ok(invitation.clone())
    }

    fn record_rsvp(&mut self, request: RsvpRequest) -> Result<RsvpRecord, StoreError> {
        request.validate()?;
        if !self
            .invitations
            .values()
            .any(|inv| inv.id == request.invitation_id)
        {
            return Err(StoreError::UnknownInvitation {
                id: request.invitation_id,
            });
        }
        self.next_rsvp_id += 1;
        let record = RsvpRecord {
            id: format!("rsvp-{}", self.next_rsvp_id),
            request,
        };
        self.rsvps.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .save(Invitation {
                id: "inv-1".into(),
                slug: "riya-weds-arjun".into(),
                template: "royal-peacock".into(),
                bride_name: "Riya".into(),
                groom_name: "Arjun".into(),
                ..Default::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn test_fetch_missing_slug() {
        let store = seeded();
        let err = store.fetch("nobody").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                slug: "nobody".into()
            }
        );
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_publish_view_gates_on_status() {
        let mut store = seeded();
        let err = store.publish_view("riya-weds-arjun").unwrap_err();
        assert!(matches!(err, StoreError::NotPublished { .. }));

        let mut invitation = store.fetch("riya-weds-arjun").unwrap();
        invitation.status = Status::Published;
        store.save(invitation).unwrap();

        let viewed = store.publish_view("riya-weds-arjun").unwrap();
        assert_eq!(viewed.view_count, 1);
        let viewed = store.publish_view("riya-weds-arjun").unwrap();
        assert_eq!(viewed.view_count, 2);
    }

    #[test]
    fn test_draft_views_do_not_count() {
        let mut store = seeded();
        let _ = store.publish_view("riya-weds-arjun");
        assert_eq!(store.fetch("riya-weds-arjun").unwrap().view_count, 0);
    }

    #[test]
    fn test_record_rsvp() {
        let mut store = seeded();
        let record = store
            .record_rsvp(RsvpRequest::new("inv-1", "Meera", true))
            .unwrap();
        assert_eq!(record.id, "rsvp-1");
        assert_eq!(store.rsvps().len(), 1);
    }

    #[test]
    fn test_rsvp_against_unknown_invitation() {
        let mut store = seeded();
        let err = store
            .record_rsvp(RsvpRequest::new("inv-404", "Meera", true))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownInvitation { .. }));
        assert!(store.rsvps().is_empty());
    }

    #[test]
    fn test_invalid_rsvp_is_surfaced() {
        let mut store = seeded();
        let err = store
            .record_rsvp(RsvpRequest::new("inv-1", "", true))
            .unwrap_err();
        assert_eq!(err, StoreError::Rsvp(RsvpError::MissingName));
    }
}
