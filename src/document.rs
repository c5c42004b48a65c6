//! The persisted invitation document.
//!
//! An invitation is a slug-addressed document holding the wedding details
//! and an ordered list of sections. Each section embeds its characteristics
//! as a plain JSON sub-object; the characteristics have no identity of
//! their own and disappear with the section that owns them.

use serde::{Deserialize, Serialize};

use crate::characteristics::Characteristics;

/// Publication state of an invitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
    Archived,
}

/// One renderable section of an invitation page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    /// Template-defined section kind, e.g. "names", "venue", "countdown".
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Characteristics::is_empty")]
    pub characteristics: Characteristics,
}

impl Section {
    /// A fresh section: empty characteristics, everything inherited.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }
}

/// A complete invitation document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    /// Human-readable public address, e.g. "riya-weds-arjun".
    pub slug: String,
    /// Name of the visual template the page is built on.
    pub template: String,
    pub status: Status,
    pub bride_name: String,
    pub groom_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub sections: Vec<Section>,
    pub view_count: u64,
}

impl Invitation {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Removes a section, destroying its characteristics with it.
    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        Some(self.sections.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::{AnimationTraits, Entrance};

    fn sample() -> Invitation {
        let mut invitation = Invitation {
            id: "inv-1".into(),
            slug: "riya-weds-arjun".into(),
            template: "royal-peacock".into(),
            bride_name: "Riya".into(),
            groom_name: "Arjun".into(),
            ..Default::default()
        };
        let mut names = Section::new("s1", "names");
        names.heading = Some("Riya & Arjun".into());
        names.characteristics.animations = Some(AnimationTraits {
            entrance: Entrance::Fade,
            ..Default::default()
        });
        invitation.add_section(names);
        invitation.add_section(Section::new("s2", "venue"));
        invitation
    }

    #[test]
    fn test_document_round_trip() {
        let invitation = sample();
        let json = serde_json::to_string(&invitation).unwrap();
        let back: Invitation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invitation);
    }

    #[test]
    fn test_empty_characteristics_stay_out_of_the_document() {
        let invitation = sample();
        let json = serde_json::to_value(&invitation).unwrap();
        let sections = json["sections"].as_array().unwrap();
        assert!(sections[0].get("characteristics").is_some());
        assert!(sections[1].get("characteristics").is_none());
    }

    #[test]
    fn test_status_defaults_to_draft() {
        let invitation: Invitation = serde_json::from_str(r#"{"slug":"a"}"#).unwrap();
        assert_eq!(invitation.status, Status::Draft);
    }

    #[test]
    fn test_remove_section_takes_characteristics_with_it() {
        let mut invitation = sample();
        let removed = invitation.remove_section("s1").unwrap();
        assert!(removed.characteristics.animations.is_some());
        assert!(invitation.section("s1").is_none());
        assert_eq!(invitation.sections.len(), 1);
    }

    #[test]
    fn test_section_mut_edits_in_place() {
        let mut invitation = sample();
        invitation.section_mut("s2").unwrap().heading = Some("The Venue".into());
        assert_eq!(
            invitation.section("s2").unwrap().heading.as_deref(),
            Some("The Venue")
        );
    }
}
