//! Paging controller: the active-index state machine.
//!
//! The controller owns the active index and decides where the strip should
//! settle after the user lets go of it. It reacts to the scroll events the
//! host reports and answers with scroll commands on the [`ScrollSurface`].
//!
//! # States
//!
//! ```text
//!            begin_dragging                end_dragging / end_decelerating
//!   Idle ──────────────────> Dragging ───────────────────────────────────┐
//!    ^                          ^                                        │
//!    │ end_scroll_animation     │ begin_dragging         autoscroll snap │
//!    │                          │                                        v
//!    └─────────────────────── Settling <─────────────────────────────────┘
//! ```
//!
//! Scroll-offset changes never change the state; they only move the active
//! index, and only when the nearest item actually changes.

use pages_gallery_core::PerfSpan;
use pages_gallery_core::logging::{span_names, targets};

use crate::geometry::Point;
use crate::layout::{StripLayout, Viewport, nearest_index};
use crate::provider::ItemProvider;
use crate::surface::ScrollSurface;

/// Interaction state of the paging controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingState {
    /// Nothing in progress.
    #[default]
    Idle,
    /// The user is dragging the strip.
    Dragging,
    /// An animated scroll requested by the controller is in flight.
    Settling,
}

/// The active-index state machine behind a gallery.
///
/// The controller does not hold the item provider or the scroll surface;
/// both are passed into each event so the owner decides how they are stored.
#[derive(Debug, Clone)]
pub struct PagingController {
    state: PagingState,
    active_index: Option<usize>,
    allow_inertia: bool,
    allow_autoscroll: bool,
}

impl PagingController {
    /// Create a controller with the given scrolling policy.
    pub fn new(allow_inertia: bool, allow_autoscroll: bool) -> Self {
        Self {
            state: PagingState::Idle,
            active_index: None,
            allow_inertia,
            allow_autoscroll,
        }
    }

    /// Current interaction state.
    #[inline]
    pub fn state(&self) -> PagingState {
        self.state
    }

    /// The active item, if any.
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether native momentum is allowed to run after a drag.
    #[inline]
    pub fn allow_inertia(&self) -> bool {
        self.allow_inertia
    }

    /// Whether the strip snaps to the nearest item when scrolling stops.
    #[inline]
    pub fn allow_autoscroll(&self) -> bool {
        self.allow_autoscroll
    }

    fn set_state(&mut self, state: PagingState) {
        if self.state != state {
            tracing::debug!(target: targets::PAGING, from = ?self.state, to = ?state, "paging state changed");
            self.state = state;
        }
    }

    /// Establish the initial active index and jump to `start_index`.
    ///
    /// The active index is only set when `start_index` is in range. The jump
    /// is not animated and leaves the controller idle.
    pub fn start(
        &mut self,
        start_index: usize,
        items: &dyn ItemProvider,
        surface: &mut dyn ScrollSurface,
    ) {
        let item_count = items.item_count();
        self.active_index = (start_index < item_count).then_some(start_index);
        self.state = PagingState::Idle;
        tracing::debug!(
            target: targets::PAGING,
            start_index,
            item_count,
            active_index = ?self.active_index,
            "paging started"
        );
        self.scroll_to_item(start_index, false, items, surface);
    }

    /// Handle a scroll-offset change reported by the host.
    ///
    /// Returns the new active index when the nearest item differs from the
    /// current one, and `None` otherwise. Repeated offsets that map to the
    /// same item never report a change twice. An active index that no longer
    /// fits the item count is dropped first.
    pub fn scroll_offset_changed(
        &mut self,
        viewport: Viewport,
        items: &dyn ItemProvider,
    ) -> Option<usize> {
        let item_count = items.item_count();
        self.retain_in_range(item_count);
        let nearest = nearest_index(viewport.offset, viewport.size.width, item_count, |i| {
            items.size_for_item(i)
        })?;

        if self.active_index == Some(nearest) {
            return None;
        }

        tracing::debug!(
            target: targets::PAGING,
            from = ?self.active_index,
            to = nearest,
            offset = viewport.offset,
            "active index changed"
        );
        self.active_index = Some(nearest);
        Some(nearest)
    }

    /// The user started dragging the strip.
    pub fn begin_dragging(&mut self) {
        self.set_state(PagingState::Dragging);
    }

    /// The user released the strip.
    ///
    /// When the host will keep the strip moving with native momentum nothing
    /// is decided yet; the controller waits for the deceleration events.
    pub fn end_dragging(
        &mut self,
        will_decelerate: bool,
        items: &dyn ItemProvider,
        surface: &mut dyn ScrollSurface,
    ) {
        if will_decelerate {
            self.set_state(PagingState::Idle);
            return;
        }
        self.snap_to_nearest(items, surface);
    }

    /// Native momentum scrolling came to a stop.
    pub fn end_decelerating(&mut self, items: &dyn ItemProvider, surface: &mut dyn ScrollSurface) {
        self.snap_to_nearest(items, surface);
    }

    /// Native momentum scrolling is about to start after a drag.
    ///
    /// With inertia disabled the momentum is cancelled on the spot and the
    /// strip settles on a predicted item instead; see [`predicted_target`].
    /// With inertia enabled this does nothing.
    pub fn will_begin_decelerating(
        &mut self,
        translation: Point,
        items: &dyn ItemProvider,
        surface: &mut dyn ScrollSurface,
    ) {
        if self.allow_inertia {
            return;
        }

        let _span = PerfSpan::new(span_names::SNAP);
        let viewport = surface.viewport();
        surface.scroll_to_offset(viewport.offset, true);

        let item_count = items.item_count();
        let Some(nearest) = nearest_index(viewport.offset, viewport.size.width, item_count, |i| {
            items.size_for_item(i)
        }) else {
            self.set_state(PagingState::Idle);
            return;
        };

        let item_width = items.size_for_item(nearest).width;
        let target = predicted_target(nearest, translation.x, item_width, item_count);
        tracing::debug!(
            target: targets::PAGING,
            nearest,
            target,
            translation_x = translation.x,
            item_width,
            "inertia suppressed"
        );
        self.scroll_to_item(target, true, items, surface);
    }

    /// The animated scroll issued by the controller finished.
    pub fn end_scroll_animation(&mut self) {
        if self.state == PagingState::Settling {
            self.set_state(PagingState::Idle);
        }
    }

    /// Scroll to the item after the active one.
    ///
    /// Does nothing without an active index or at the last item. The active
    /// index itself only moves once the host reports the resulting offsets.
    pub fn next(&mut self, items: &dyn ItemProvider, surface: &mut dyn ScrollSurface) -> bool {
        self.retain_in_range(items.item_count());
        let Some(current) = self.active_index else {
            return false;
        };
        let next_index = current + 1;
        if next_index >= items.item_count() {
            tracing::trace!(target: targets::PAGING, current, "already at last item");
            return false;
        }
        self.scroll_to_item(next_index, true, items, surface)
    }

    /// Scroll to the item before the active one.
    ///
    /// Does nothing without an active index or at the first item.
    pub fn previous(&mut self, items: &dyn ItemProvider, surface: &mut dyn ScrollSurface) -> bool {
        self.retain_in_range(items.item_count());
        let Some(previous_index) = self.active_index.and_then(|i| i.checked_sub(1)) else {
            return false;
        };
        self.scroll_to_item(previous_index, true, items, surface)
    }

    /// Center the viewport on item `index`.
    ///
    /// Returns `false` without touching the surface when `index` is outside
    /// the current item range. An animated scroll moves the controller into
    /// [`PagingState::Settling`].
    pub fn scroll_to_item(
        &mut self,
        index: usize,
        animated: bool,
        items: &dyn ItemProvider,
        surface: &mut dyn ScrollSurface,
    ) -> bool {
        let item_count = items.item_count();
        if index >= item_count {
            tracing::trace!(target: targets::PAGING, index, item_count, "scroll to item ignored");
            return false;
        }

        let layout = StripLayout::measure(item_count, |i| items.size_for_item(i));
        let viewport = surface.viewport();
        let Some(offset) = layout.centered_offset(index, &viewport) else {
            return false;
        };

        tracing::trace!(target: targets::PAGING, index, offset, animated, "scroll to item");
        surface.scroll_to_offset(offset, animated);
        if animated {
            self.set_state(PagingState::Settling);
        }
        true
    }

    /// Drop the active index if it no longer fits `item_count`.
    ///
    /// Returns `true` if the active index was cleared.
    pub fn retain_in_range(&mut self, item_count: usize) -> bool {
        match self.active_index {
            Some(index) if index >= item_count => {
                tracing::debug!(target: targets::PAGING, index, item_count, "active index out of range");
                self.active_index = None;
                true
            }
            _ => false,
        }
    }

    fn snap_to_nearest(&mut self, items: &dyn ItemProvider, surface: &mut dyn ScrollSurface) {
        if !self.allow_autoscroll {
            self.set_state(PagingState::Idle);
            return;
        }

        let _span = PerfSpan::new(span_names::SNAP);
        let viewport = surface.viewport();
        let nearest = nearest_index(
            viewport.offset,
            viewport.size.width,
            items.item_count(),
            |i| items.size_for_item(i),
        );

        let snapped = nearest.is_some_and(|index| self.scroll_to_item(index, true, items, surface));
        if !snapped {
            self.set_state(PagingState::Idle);
        }
    }
}

/// Predict where a released drag should settle when inertia is disabled.
///
/// A short drag (less than half the width of the nearest item) is read as a
/// flick: negative translation moves on to the next item, positive
/// translation back to the previous one. A longer drag has already brought
/// the intended item nearest to the center, so it stays. A zero translation
/// counts as a short non-negative drag and steps back. The result is clamped
/// to `[0, item_count - 1]`.
pub fn predicted_target(
    nearest: usize,
    translation_x: f32,
    item_width: f32,
    item_count: usize,
) -> usize {
    let last_index = item_count.saturating_sub(1);
    let target = if translation_x.abs() < item_width * 0.5 {
        if translation_x < 0.0 {
            nearest.saturating_add(1)
        } else {
            nearest.saturating_sub(1)
        }
    } else {
        nearest
    };
    target.min(last_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::provider::SizeList;

    #[derive(Debug)]
    struct RecordingSurface {
        viewport: Viewport,
        commands: Vec<(f32, bool)>,
    }

    impl RecordingSurface {
        fn new(width: f32) -> Self {
            Self {
                viewport: Viewport::new(0.0, Size::new(width, 100.0)),
                commands: Vec::new(),
            }
        }
    }

    impl ScrollSurface for RecordingSurface {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
            self.commands.push((offset, animated));
            if !animated {
                self.viewport.offset = offset;
            }
        }
    }

    fn three_pages() -> SizeList {
        SizeList::uniform(3, Size::new(100.0, 100.0))
    }

    #[test]
    fn test_start_sets_active_index() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);

        controller.start(2, &items, &mut surface);
        assert_eq!(controller.active_index(), Some(2));
        assert_eq!(controller.state(), PagingState::Idle);
        assert_eq!(surface.commands, vec![(200.0, false)]);
        assert_eq!(surface.viewport.offset, 200.0);
    }

    #[test]
    fn test_start_out_of_range() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);

        controller.start(3, &items, &mut surface);
        assert_eq!(controller.active_index(), None);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_scroll_offset_change_is_edge_triggered() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(0, &items, &mut surface);

        let size = Size::new(100.0, 100.0);
        assert_eq!(controller.scroll_offset_changed(Viewport::new(10.0, size), &items), None);
        assert_eq!(controller.scroll_offset_changed(Viewport::new(40.0, size), &items), None);
        assert_eq!(controller.scroll_offset_changed(Viewport::new(51.0, size), &items), Some(1));
        assert_eq!(controller.scroll_offset_changed(Viewport::new(60.0, size), &items), None);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn test_scroll_offset_change_without_items() {
        let items = SizeList::default();
        let mut controller = PagingController::new(true, true);
        let viewport = Viewport::new(0.0, Size::new(100.0, 100.0));
        assert_eq!(controller.scroll_offset_changed(viewport, &items), None);
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn test_drag_end_snaps_with_autoscroll() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(0, &items, &mut surface);

        controller.begin_dragging();
        assert_eq!(controller.state(), PagingState::Dragging);
        surface.viewport.offset = 130.0;
        controller.end_dragging(false, &items, &mut surface);

        assert_eq!(surface.commands.last(), Some(&(100.0, true)));
        assert_eq!(controller.state(), PagingState::Settling);

        controller.end_scroll_animation();
        assert_eq!(controller.state(), PagingState::Idle);
    }

    #[test]
    fn test_drag_end_without_autoscroll() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, false);
        controller.start(0, &items, &mut surface);

        controller.begin_dragging();
        surface.viewport.offset = 130.0;
        controller.end_dragging(false, &items, &mut surface);
        controller.end_decelerating(&items, &mut surface);

        assert_eq!(surface.commands.len(), 1);
        assert_eq!(controller.state(), PagingState::Idle);
    }

    #[test]
    fn test_drag_end_with_deceleration_waits() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(0, &items, &mut surface);

        controller.begin_dragging();
        controller.end_dragging(true, &items, &mut surface);
        assert_eq!(surface.commands.len(), 1);
        assert_eq!(controller.state(), PagingState::Idle);

        surface.viewport.offset = 180.0;
        controller.end_decelerating(&items, &mut surface);
        assert_eq!(surface.commands.last(), Some(&(200.0, true)));
        assert_eq!(controller.state(), PagingState::Settling);
    }

    #[test]
    fn test_will_begin_decelerating_with_inertia_is_ignored() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(0, &items, &mut surface);

        controller.will_begin_decelerating(Point::new(-10.0, 0.0), &items, &mut surface);
        assert_eq!(surface.commands.len(), 1);
    }

    #[test]
    fn test_inertia_suppression_short_flick_advances() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(false, true);
        controller.start(0, &items, &mut surface);

        surface.viewport.offset = 20.0;
        controller.will_begin_decelerating(Point::new(-20.0, 0.0), &items, &mut surface);

        // Momentum cancelled at the current offset, then settle on item 1.
        assert_eq!(surface.commands[1..], [(20.0, true), (100.0, true)]);
        assert_eq!(controller.state(), PagingState::Settling);
    }

    #[test]
    fn test_inertia_suppression_long_drag_keeps_nearest() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(false, true);
        controller.start(0, &items, &mut surface);

        surface.viewport.offset = 80.0;
        controller.will_begin_decelerating(Point::new(-80.0, 0.0), &items, &mut surface);
        assert_eq!(surface.commands.last(), Some(&(100.0, true)));
    }

    #[test]
    fn test_inertia_suppression_clamps_at_edges() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(false, true);
        controller.start(0, &items, &mut surface);

        controller.will_begin_decelerating(Point::new(10.0, 0.0), &items, &mut surface);
        assert_eq!(surface.commands.last(), Some(&(0.0, true)));

        surface.viewport.offset = 200.0;
        controller.will_begin_decelerating(Point::new(-10.0, 0.0), &items, &mut surface);
        assert_eq!(surface.commands.last(), Some(&(200.0, true)));
    }

    #[test]
    fn test_predicted_target() {
        // Short flicks move by one.
        assert_eq!(predicted_target(1, -10.0, 100.0, 3), 2);
        assert_eq!(predicted_target(1, 10.0, 100.0, 3), 0);
        // Half the width or more keeps the nearest item.
        assert_eq!(predicted_target(1, -50.0, 100.0, 3), 1);
        assert_eq!(predicted_target(1, 75.0, 100.0, 3), 1);
        // Clamped at both ends.
        assert_eq!(predicted_target(2, -10.0, 100.0, 3), 2);
        assert_eq!(predicted_target(0, 10.0, 100.0, 3), 0);
        // No translation steps back, like a short positive drag.
        assert_eq!(predicted_target(1, 0.0, 100.0, 3), 0);
        assert_eq!(predicted_target(0, 0.0, 100.0, 3), 0);
    }

    #[test]
    fn test_next_and_previous() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(1, &items, &mut surface);

        assert!(controller.next(&items, &mut surface));
        assert_eq!(surface.commands.last(), Some(&(200.0, true)));
        // The active index waits for the host to report the new offset.
        assert_eq!(controller.active_index(), Some(1));

        assert!(controller.previous(&items, &mut surface));
        assert_eq!(surface.commands.last(), Some(&(0.0, true)));
    }

    #[test]
    fn test_next_at_last_item_is_noop() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(2, &items, &mut surface);
        let issued = surface.commands.len();

        assert!(!controller.next(&items, &mut surface));
        assert_eq!(surface.commands.len(), issued);
        assert_eq!(controller.active_index(), Some(2));
        assert_eq!(controller.state(), PagingState::Idle);
    }

    #[test]
    fn test_navigation_without_active_index() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);

        assert!(!controller.next(&items, &mut surface));
        assert!(!controller.previous(&items, &mut surface));
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_scroll_to_item_out_of_range() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);

        assert!(!controller.scroll_to_item(3, true, &items, &mut surface));
        assert!(surface.commands.is_empty());
        assert_eq!(controller.state(), PagingState::Idle);
    }

    #[test]
    fn test_shrunken_provider_drops_active_index() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(2, &items, &mut surface);

        items.truncate(2);
        let viewport = Viewport::new(200.0, Size::new(100.0, 100.0));
        // Item 1 is nearest; the stale index 2 is dropped before comparing.
        assert_eq!(controller.scroll_offset_changed(viewport, &items), Some(1));

        items.clear();
        assert_eq!(controller.scroll_offset_changed(viewport, &items), None);
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn test_navigation_after_items_removed() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(2, &items, &mut surface);
        let issued = surface.commands.len();

        items.truncate(1);
        assert!(!controller.previous(&items, &mut surface));
        assert!(!controller.next(&items, &mut surface));
        assert_eq!(controller.active_index(), None);
        assert_eq!(surface.commands.len(), issued);
    }

    #[test]
    fn test_retain_in_range() {
        let items = three_pages();
        let mut surface = RecordingSurface::new(100.0);
        let mut controller = PagingController::new(true, true);
        controller.start(2, &items, &mut surface);

        assert!(!controller.retain_in_range(3));
        assert!(controller.retain_in_range(2));
        assert_eq!(controller.active_index(), None);
    }
}
