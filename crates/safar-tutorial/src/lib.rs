//! # Guided tour
//!
//! A tutorial is a named [`Flow`] of [`TutorialStep`]s. Steps are plain data:
//! which screen they belong to, what the popup points at and which copy it
//! shows. The [`Tutorial`] machine moves through them and the
//! [`TutorialOverlay`] places the popup and highlights the target.
//!
//! Side effects (navigating, filling in mock data) are the host's job. The
//! host matches on [`StepId`] whenever an operation reports a newly active
//! step:
//!
//! ```rust
//! use safar_tutorial::*;
//!
//! let mut tour = Tutorial::new();
//! let first = tour.start(Flow::Ride.steps(), Box::new(|| {})).map(|s| s.id);
//! assert_eq!(first, Some(StepId::RideWelcome));
//! assert_eq!(tour.next().map(|s| s.id), Some(StepId::RidePickup));
//! ```

mod flows;
mod machine;
pub mod overlay;
mod step;

pub use flows::Flow;
pub use machine::{CloseOutcome, OnFinish, Phase, Tutorial};
pub use overlay::{
    Highlighter, OverlayLayout, TargetLocator, TutorialOverlay, highlight, layout_popup,
};
pub use step::{Placement, StepId, Target, TutorialStep};
