//! Characteristics-driven styling and animation for invitation pages.
//!
//! Every section of an animated wedding invitation ("Kankotri") carries a
//! partial [`Characteristics`] record of visual traits. This crate turns
//! those records into concrete presentation:
//!
//! - [`characteristics`]: the typed trait vocabulary and its defaults
//! - [`resolve`]: the pure resolver mapping traits to CSS declarations and
//!   declarative animation parameters
//! - [`present`]: the wrapper rendering resolved parameters around content
//! - [`panels`]: the editor control panels that mutate a record, one closed
//!   field set each
//! - [`device`]: explicit device-capability values for render contexts
//! - [`document`], [`rsvp`], [`store`], [`page`]: the invitation document,
//!   the RSVP contract, the persistence seam and public page assembly
//!
//! # Example
//!
//! ```rust
//! use kankotri::characteristics::Characteristics;
//! use kankotri::panels::{Panel, PanelInput};
//! use kankotri::present::SectionFrame;
//! use kankotri::resolve::resolve;
//!
//! // The editor applies a change event...
//! let mut ch = Characteristics::default();
//! Panel::Animation
//!     .apply(&mut ch, "entrance", &PanelInput::Choice("fade".into()))
//!     .unwrap();
//!
//! // ...the resolver recomputes presentation parameters...
//! let resolved = resolve(&ch);
//! assert_eq!(resolved.animation.initial.opacity, 0.0);
//!
//! // ...and the wrapper re-renders the section.
//! let frame = SectionFrame::new().unwrap();
//! let html = frame.render(&resolved, "<h1>Riya weds Arjun</h1>").unwrap();
//! assert!(html.contains("data-motion-initial"));
//! ```

pub mod characteristics;
pub mod device;
pub mod document;
pub mod page;
pub mod panels;
pub mod present;
pub mod resolve;
pub mod rsvp;
pub mod store;

pub use characteristics::Characteristics;
pub use device::{detect_device, set_device_detector, DeviceCapabilities, Viewport};
pub use document::{Invitation, Section, Status};
pub use page::{PageError, PageRenderer};
pub use panels::{Panel, PanelError, PanelInput};
pub use present::{RenderError, SectionFrame};
pub use resolve::{resolve, resolve_for_device, AnimationSpec, Resolved, StyleDeclaration};
pub use rsvp::{RsvpRecord, RsvpRequest, RsvpResponse};
pub use store::{InvitationStore, MemoryStore, StoreError};
