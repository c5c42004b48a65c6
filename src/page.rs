//! Public page assembly.
//!
//! Turns a published invitation into one HTML fragment: every section's
//! characteristics are resolved (device-aware), framed by the presentation
//! wrapper, and concatenated under a page wrapper. A section that fails to
//! render degrades to its fallback view; only the page-level failures and
//! store failures propagate.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use crate::device::DeviceCapabilities;
use crate::document::{Invitation, Section};
use crate::present::{fallback_view, RenderError, SectionFrame};
use crate::resolve::resolve_for_device;
use crate::store::{InvitationStore, StoreError};

/// Failure while producing a public page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

// Named with an .html suffix so minijinja escapes the text fields.
const CONTENT_TEMPLATE: &str = "\
{% if heading %}<h2>{{ heading }}</h2>{% endif %}\
{% if body %}<p>{{ body }}</p>{% endif %}";

const PAGE_TEMPLATE: &str = r#"<main class="kankotri-page" data-template="{{ template }}">
{{ sections | safe }}
</main>"#;

#[derive(Serialize)]
struct ContentContext<'a> {
    kind: &'a str,
    heading: Option<&'a str>,
    body: Option<&'a str>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    template: &'a str,
    sections: String,
}

/// Renders invitation documents into public page fragments.
pub struct PageRenderer {
    frame: SectionFrame,
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("content.html", CONTENT_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self {
            frame: SectionFrame::new()?,
            env,
        })
    }

    /// Renders a full invitation page for the given device.
    pub fn render_page(
        &self,
        invitation: &Invitation,
        capabilities: &DeviceCapabilities,
    ) -> Result<String, RenderError> {
        let sections: Vec<String> = invitation
            .sections
            .iter()
            .map(|section| self.render_section(section, capabilities))
            .collect();

        let ctx = PageContext {
            template: &invitation.template,
            sections: sections.join("\n"),
        };
        Ok(self.env.get_template("page.html")?.render(&ctx)?)
    }

    /// Looks a published invitation up by slug (counting the view) and
    /// renders it.
    pub fn render_published(
        &self,
        store: &mut dyn InvitationStore,
        slug: &str,
        capabilities: &DeviceCapabilities,
    ) -> Result<String, PageError> {
        let invitation = store.publish_view(slug)?;
        Ok(self.render_page(&invitation, capabilities)?)
    }

    /// One section, degraded to the fallback view on any render failure.
    fn render_section(&self, section: &Section, capabilities: &DeviceCapabilities) -> String {
        let resolved = resolve_for_device(&section.characteristics, capabilities);
        let content = self
            .render_content(section)
            .unwrap_or_else(|_| String::new());
        match self.frame.render(&resolved, &content) {
            Ok(html) => html,
            Err(_) => fallback_view(&content),
        }
    }

    fn render_content(&self, section: &Section) -> Result<String, RenderError> {
        let ctx = ContentContext {
            kind: &section.kind,
            heading: section.heading.as_deref(),
            body: section.body.as_deref(),
        };
        Ok(self.env.get_template("content.html")?.render(&ctx)?)
    }
}
