//! Animation support for the gallery.
//!
//! This module provides easing functions and the time-based highlight
//! transition used by the page indicator.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use pages_gallery::animation::{Easing, ease};
//!
//! let progress = 0.5;
//! let eased = ease(Easing::EaseOut, progress);
//! assert!(eased > progress);
//! ```

mod easing;
mod transition;

pub use easing::{Easing, ease};
pub use transition::{HIGHLIGHT_DURATION, HighlightTransition, TransitionState};
