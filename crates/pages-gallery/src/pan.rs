//! Pointer pan tracking.
//!
//! Hosts that do not have a native pan recognizer can feed raw pointer
//! samples through a [`PanTracker`] to get the values the paging controller
//! needs: the cumulative translation of the drag and whether the strip
//! should keep moving with momentum after release. When it should, the
//! tracker also runs that momentum: [`PanTracker::update`] yields the
//! distance to travel on each frame until the velocity has decayed.

use std::time::{Duration, Instant};

use crate::geometry::Point;

/// Distance the pointer must travel before a press turns into a drag.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Minimum release speed, in pixels per second, that starts momentum.
pub const MIN_RELEASE_VELOCITY: f32 = 10.0;

/// Release velocity cap, in pixels per second.
pub const MAX_RELEASE_VELOCITY: f32 = 5000.0;

/// Momentum deceleration, in pixels per second squared.
pub const DECELERATION: f32 = 1500.0;

/// Window of recent samples used to measure release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Tracking state of the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanState {
    /// No pointer is down.
    #[default]
    Inactive,
    /// Pointer pressed, waiting for enough movement.
    Pressed,
    /// Following pointer movement.
    Dragging,
    /// Released with momentum that is still decaying.
    Decelerating,
}

/// One pointer move that the tracker accepted as part of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanMove {
    /// Pointer displacement since the press.
    pub translation: Point,
    /// Set on the move that crossed [`DRAG_THRESHOLD`] and started the drag.
    pub began: bool,
}

/// The outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRelease {
    /// Pointer displacement between press and release.
    pub translation: Point,
    /// Horizontal pointer velocity at release, in pixels per second.
    pub velocity: f32,
    /// Whether the strip should continue with native momentum.
    pub will_decelerate: bool,
}

/// Turns pointer press, move and release samples into pan gestures.
///
/// Only horizontal velocity decides momentum, since the strip only scrolls
/// along x.
#[derive(Debug, Clone)]
pub struct PanTracker {
    state: PanState,
    start: Point,
    last: Point,
    min_velocity: f32,
    history: Vec<(f32, Instant)>,
    /// Momentum velocity, in the direction the pointer moved.
    velocity: f32,
    last_update: Option<Instant>,
}

impl Default for PanTracker {
    fn default() -> Self {
        Self {
            state: PanState::Inactive,
            start: Point::ZERO,
            last: Point::ZERO,
            min_velocity: MIN_RELEASE_VELOCITY,
            history: Vec::with_capacity(10),
            velocity: 0.0,
            last_update: None,
        }
    }
}

impl PanTracker {
    /// Create a tracker with the default release velocity threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum release velocity using builder pattern.
    pub fn with_min_velocity(mut self, min_velocity: f32) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    /// Current tracking state.
    #[inline]
    pub fn state(&self) -> PanState {
        self.state
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state == PanState::Dragging
    }

    /// Whether released momentum is still running.
    #[inline]
    pub fn is_decelerating(&self) -> bool {
        self.state == PanState::Decelerating
    }

    /// Pointer went down at `position`.
    ///
    /// Any momentum still running is dropped.
    pub fn press(&mut self, position: Point, now: Instant) {
        self.reset();
        self.state = PanState::Pressed;
        self.start = position;
        self.last = position;
        self.record(position.x, now);
    }

    /// Pointer moved to `position`.
    ///
    /// Returns `None` until the pointer has moved past [`DRAG_THRESHOLD`],
    /// and while no press is being tracked.
    pub fn drag(&mut self, position: Point, now: Instant) -> Option<PanMove> {
        let mut began = false;
        if self.state == PanState::Pressed {
            let dx = (position.x - self.start.x).abs();
            let dy = (position.y - self.start.y).abs();
            if dx > DRAG_THRESHOLD || dy > DRAG_THRESHOLD {
                self.state = PanState::Dragging;
                began = true;
            }
        }

        if self.state != PanState::Dragging {
            return None;
        }

        self.last = position;
        self.record(position.x, now);
        Some(PanMove {
            translation: self.translation(),
            began,
        })
    }

    /// Pointer went up.
    ///
    /// Returns `None` if the press never became a drag. A release fast
    /// enough to decelerate leaves the tracker in [`PanState::Decelerating`];
    /// call [`update`](Self::update) every frame, or [`reset`](Self::reset)
    /// to cancel the momentum.
    pub fn release(&mut self, now: Instant) -> Option<PanRelease> {
        if self.state != PanState::Dragging {
            self.reset();
            return None;
        }

        self.record(self.last.x, now);
        let velocity = self
            .release_velocity()
            .clamp(-MAX_RELEASE_VELOCITY, MAX_RELEASE_VELOCITY);
        let release = PanRelease {
            translation: self.translation(),
            velocity,
            will_decelerate: velocity.abs() > self.min_velocity,
        };

        self.reset();
        if release.will_decelerate {
            self.state = PanState::Decelerating;
            self.velocity = velocity;
            self.last_update = Some(now);
        }
        Some(release)
    }

    /// Advance released momentum to `now`.
    ///
    /// Returns the distance travelled since the previous update, in the
    /// direction the pointer moved, or `None` once the momentum has died
    /// out (or was never started).
    pub fn update(&mut self, now: Instant) -> Option<f32> {
        if self.state != PanState::Decelerating {
            return None;
        }

        let speed = self.velocity.abs();
        if speed <= self.min_velocity {
            self.reset();
            return None;
        }

        let dt = self
            .last_update
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_update = Some(now);
        if dt <= 0.0 {
            return Some(0.0);
        }

        let decayed = (speed - DECELERATION * dt).max(0.0);
        self.velocity = self.velocity.signum() * decayed;
        Some(self.velocity * dt)
    }

    /// Abandon the current gesture and any momentum.
    pub fn reset(&mut self) {
        self.state = PanState::Inactive;
        self.history.clear();
        self.velocity = 0.0;
        self.last_update = None;
    }

    fn translation(&self) -> Point {
        Point::new(self.last.x - self.start.x, self.last.y - self.start.y)
    }

    fn record(&mut self, x: f32, now: Instant) {
        // Keep only the samples inside the velocity window.
        self.history
            .retain(|&(_, t)| now.saturating_duration_since(t) <= VELOCITY_WINDOW);
        self.history.push((x, now));
    }

    fn release_velocity(&self) -> f32 {
        let (Some(&(x1, t1)), Some(&(x2, t2))) = (self.history.first(), self.history.last()) else {
            return 0.0;
        };
        let dt = t2.saturating_duration_since(t1).as_secs_f32();
        if dt <= 0.001 {
            return 0.0;
        }
        (x2 - x1) / dt
    }
}
