//! Highlight transition state.
//!
//! A highlight transition moves one indicator dot from its resting color to
//! the active color. Starting a new transition replaces the running one
//! outright: there is no queue, and nothing waits for a transition to finish.

use std::time::{Duration, Instant};

use super::easing::{Easing, ease};

/// Duration of the indicator highlight animation.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(250);

/// Current state of a highlight transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// No transition in progress.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
        /// Index being highlighted.
        target: usize,
    },
}

impl TransitionState {
    /// Check if a transition is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// Get the current progress if running.
    pub fn progress(&self) -> Option<f32> {
        match self {
            TransitionState::Running { progress, .. } => Some(*progress),
            TransitionState::Idle => None,
        }
    }
}

/// A time-based highlight animation controller.
///
/// The transition is sampled by the host at paint time; it holds no timers
/// of its own.
#[derive(Debug, Clone)]
pub struct HighlightTransition {
    /// Easing function for the transition.
    easing: Easing,
    /// Duration of the transition.
    duration: Duration,
    /// When the latest transition started.
    start_time: Option<Instant>,
    /// Index being highlighted, if any.
    target: Option<usize>,
}

impl HighlightTransition {
    /// Create a new transition with the default ease-out curve and duration.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseOut,
            duration: HIGHLIGHT_DURATION,
            start_time: None,
            target: None,
        }
    }

    /// Set the easing function using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Get the transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The index currently being (or last) highlighted.
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Start highlighting `target`, replacing any running transition.
    ///
    /// `None` clears the highlight immediately.
    pub fn start(&mut self, target: Option<usize>, now: Instant) {
        self.target = target;
        self.start_time = target.map(|_| now);
    }

    /// Eased progress of the highlight at `now`.
    ///
    /// Returns 1.0 once the transition has completed and 0.0 when nothing
    /// is highlighted.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Some(start_time) = self.start_time else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(start_time);
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        ease(self.easing, raw_progress)
    }

    /// Sample the transition state at `now`.
    pub fn state_at(&self, now: Instant) -> TransitionState {
        let (Some(start_time), Some(target)) = (self.start_time, self.target) else {
            return TransitionState::Idle;
        };

        if now.saturating_duration_since(start_time) >= self.duration {
            return TransitionState::Idle;
        }

        TransitionState::Running {
            progress: self.progress_at(now),
            target,
        }
    }
}

impl Default for HighlightTransition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_creation() {
        let t = HighlightTransition::new();
        assert_eq!(t.easing(), Easing::EaseOut);
        assert_eq!(t.duration(), HIGHLIGHT_DURATION);
        assert_eq!(t.target(), None);
        assert_eq!(t.state_at(Instant::now()), TransitionState::Idle);
    }

    #[test]
    fn test_transition_progress() {
        let now = Instant::now();
        let mut t = HighlightTransition::new()
            .with_easing(Easing::Linear)
            .with_duration(Duration::from_millis(200));
        t.start(Some(2), now);

        assert_eq!(t.progress_at(now), 0.0);
        let mid = t.progress_at(now + Duration::from_millis(100));
        assert!((mid - 0.5).abs() < 0.001);
        assert_eq!(t.progress_at(now + Duration::from_millis(400)), 1.0);

        let state = t.state_at(now + Duration::from_millis(100));
        assert!(state.is_running());
        assert!(matches!(state, TransitionState::Running { target: 2, .. }));
        assert_eq!(t.state_at(now + Duration::from_millis(200)), TransitionState::Idle);
    }

    #[test]
    fn test_new_start_supersedes() {
        let now = Instant::now();
        let mut t = HighlightTransition::new().with_easing(Easing::Linear);
        t.start(Some(0), now);
        let later = now + Duration::from_millis(100);
        t.start(Some(1), later);

        assert_eq!(t.target(), Some(1));
        assert_eq!(t.progress_at(later), 0.0);
    }

    #[test]
    fn test_clear_highlight() {
        let now = Instant::now();
        let mut t = HighlightTransition::new();
        t.start(Some(3), now);
        t.start(None, now);
        assert_eq!(t.target(), None);
        assert_eq!(t.progress_at(now + HIGHLIGHT_DURATION), 0.0);
    }

    #[test]
    fn test_transition_state() {
        let state = TransitionState::Running {
            progress: 0.5,
            target: 1,
        };
        assert!(state.is_running());
        assert_eq!(state.progress(), Some(0.5));
        assert_eq!(TransitionState::Idle.progress(), None);
    }
}
