//! Page indicator model.
//!
//! The indicator is a row of dots, one per item, with the dot of the active
//! item highlighted. This module only models the row: dot count, dot frames
//! and per-dot colors over time. Drawing is left to the host, which samples
//! [`PageIndicator::dot_color`] whenever it paints.
//!
//! Highlighting is fire-and-forget. Every dot drops back to the resting
//! color at once, and the newly highlighted dot eases toward the active color
//! over [`HIGHLIGHT_DURATION`](crate::animation::HIGHLIGHT_DURATION). A later
//! highlight simply replaces an earlier one.

use std::time::Instant;

use pages_gallery_core::logging::targets;

use crate::animation::HighlightTransition;
use crate::config::IndicatorStyle;
use crate::geometry::{Color, Rect, Size};

/// Model of the page indicator dots.
#[derive(Debug, Clone)]
pub struct PageIndicator {
    style: IndicatorStyle,
    visible: bool,
    dot_count: usize,
    transition: HighlightTransition,
}

impl PageIndicator {
    /// Create an indicator with no dots.
    ///
    /// A hidden indicator never grows any dots and ignores highlight requests.
    pub fn new(style: IndicatorStyle, visible: bool) -> Self {
        Self {
            style,
            visible,
            dot_count: 0,
            transition: HighlightTransition::new(),
        }
    }

    /// Replace the highlight transition, e.g. to change its easing or duration.
    pub fn with_transition(mut self, transition: HighlightTransition) -> Self {
        self.transition = transition;
        self
    }

    /// Rebuild the row with one dot per item.
    pub fn rebuild(&mut self, item_count: usize) {
        if !self.visible {
            return;
        }
        tracing::trace!(target: targets::INDICATOR, item_count, "rebuilding indicator dots");
        self.dot_count = item_count;
    }

    /// Highlight the dot at `index`, replacing any running highlight.
    ///
    /// An index without a dot (or `None`) leaves every dot at rest.
    pub fn highlight(&mut self, index: Option<usize>, now: Instant) {
        if !self.visible {
            return;
        }
        tracing::trace!(target: targets::INDICATOR, ?index, "highlight");
        self.transition.start(index, now);
    }

    /// Whether the indicator is shown at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of dots.
    #[inline]
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Appearance of the dots.
    #[inline]
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// The highlighted dot, if it exists.
    pub fn highlighted(&self) -> Option<usize> {
        self.transition
            .target()
            .filter(|&index| index < self.dot_count)
    }

    /// Whether the highlight is still animating at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.highlighted().is_some() && self.transition.state_at(now).is_running()
    }

    /// Color of the dot at `index` at time `now`.
    pub fn dot_color(&self, index: usize, now: Instant) -> Color {
        if self.highlighted() != Some(index) {
            return self.style.dot_color;
        }
        let progress = self.transition.progress_at(now);
        self.style.dot_color.lerp(self.style.active_dot_color, progress)
    }

    /// Colors of every dot at time `now`, in index order.
    pub fn dot_colors(&self, now: Instant) -> Vec<Color> {
        (0..self.dot_count)
            .map(|index| self.dot_color(index, now))
            .collect()
    }

    /// Frames of every dot, relative to the indicator's top-left corner.
    ///
    /// Dots sit on one row, left to right, `spacing` apart.
    pub fn dot_frames(&self) -> Vec<Rect> {
        let step = self.style.dot_size + self.style.spacing;
        (0..self.dot_count)
            .map(|index| {
                Rect::new(
                    index as f32 * step,
                    0.0,
                    self.style.dot_size,
                    self.style.dot_size,
                )
            })
            .collect()
    }

    /// Corner radius that draws each dot as a circle.
    #[inline]
    pub fn dot_corner_radius(&self) -> f32 {
        self.style.dot_size / 2.0
    }

    /// Size of the whole row of dots.
    pub fn size_hint(&self) -> Size {
        if self.dot_count == 0 {
            return Size::ZERO;
        }
        let count = self.dot_count as f32;
        Size::new(
            count * self.style.dot_size + (count - 1.0) * self.style.spacing,
            self.style.dot_size,
        )
    }
}

static_assertions::assert_impl_all!(PageIndicator: Send, Sync);
