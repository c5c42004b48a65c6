//! The presentation wrapper: resolved style + animation around content.
//!
//! [`SectionFrame`] renders one section's content inside a `<div>` carrying
//! the resolved inline style and, when an entrance is configured, the
//! declarative `{initial, animate, transition}` payload the client motion
//! runtime consumes, serialized as `data-motion-*` attributes. The
//! `entrance == none` path emits no motion attributes at all, so static
//! sections never touch the motion runtime.
//!
//! A failing render inside the frame is intercepted by
//! [`SectionFrame::render_or_fallback`], which substitutes a plain
//! default-styled view instead of propagating the failure up the page.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use crate::characteristics::Characteristics;
use crate::resolve::{resolve, Resolved};

/// Error raised while rendering a presentation fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
    #[error("motion payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

const FRAME_TEMPLATE: &str = r#"<div class="kankotri-section"{% if style %} style="{{ style }}"{% endif %}{% if motion %} data-motion-key="{{ motion.key }}" data-motion-initial='{{ motion.initial }}' data-motion-animate='{{ motion.animate }}' data-motion-transition='{{ motion.transition }}'{% endif %}{% if hover %} data-hover="{{ hover.name }}" data-hover-delta='{{ hover.delta }}'{% endif %}>{{ content }}</div>"#;

#[derive(Serialize)]
struct MotionAttrs {
    key: String,
    initial: String,
    animate: String,
    transition: String,
}

#[derive(Serialize)]
struct HoverAttrs {
    name: &'static str,
    delta: String,
}

#[derive(Serialize)]
struct FrameContext<'a> {
    style: String,
    content: &'a str,
    motion: Option<MotionAttrs>,
    hover: Option<HoverAttrs>,
}

/// Renders resolved presentation parameters around pre-rendered content.
///
/// # Example
///
/// ```rust
/// use kankotri::characteristics::Characteristics;
/// use kankotri::present::SectionFrame;
/// use kankotri::resolve::resolve;
///
/// let frame = SectionFrame::new().unwrap();
/// let resolved = resolve(&Characteristics::default());
/// let html = frame.render(&resolved, "<h1>Riya weds Arjun</h1>").unwrap();
/// assert!(html.contains("padding: 1rem"));
/// assert!(!html.contains("data-motion"));
/// ```
pub struct SectionFrame {
    env: Environment<'static>,
}

impl SectionFrame {
    /// Creates a frame with its template compiled up front.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("section", FRAME_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders `content` (trusted, pre-rendered markup) inside the frame.
    pub fn render(&self, resolved: &Resolved, content: &str) -> Result<String, RenderError> {
        let spec = &resolved.animation;

        // Still sections carry no motion payload; the runtime is never
        // engaged and re-renders cost nothing.
        let motion = if spec.is_still() {
            None
        } else {
            Some(MotionAttrs {
                key: spec.motion_key(),
                initial: serde_json::to_string(&spec.initial)?,
                animate: serde_json::to_string(&spec.animate)?,
                transition: serde_json::to_string(&spec.transition)?,
            })
        };

        let hover = match spec.hover_delta() {
            Some(delta) => Some(HoverAttrs {
                name: spec.hover.as_key(),
                delta: serde_json::to_string(&delta)?,
            }),
            None => None,
        };

        let ctx = FrameContext {
            style: resolved.style.to_string(),
            content,
            motion,
            hover,
        };
        let tmpl = self.env.get_template("section")?;
        Ok(tmpl.render(&ctx)?)
    }

    /// Renders like [`render`](Self::render), substituting the default-styled
    /// fallback view if anything in the frame fails. This is the render
    /// boundary for a section: a broken section degrades, the page survives.
    pub fn render_or_fallback(&self, resolved: &Resolved, content: &str) -> String {
        self.render(resolved, content)
            .unwrap_or_else(|_| fallback_view(content))
    }
}

/// The degraded view: baseline style, no animation, content untouched.
/// Built without the template engine so it cannot itself fail.
pub fn fallback_view(content: &str) -> String {
    let baseline = resolve(&Characteristics::default());
    format!(
        r#"<div class="kankotri-section" style="{}">{}</div>"#,
        baseline.style, content
    )
}
