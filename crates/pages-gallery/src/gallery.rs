//! The gallery widget shell.
//!
//! [`PagesGallery`] wires the paging controller and the indicator model to
//! the two host collaborators: the item provider and the scroll surface.
//! The host forwards its scroll events to the gallery and reads the
//! indicator back when it paints.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pages_gallery::geometry::Size;
//! use pages_gallery::{GalleryConfig, ItemProvider, PagesGallery, ScrollSurface, SizeList, Viewport};
//!
//! struct Strip {
//!     viewport: Viewport,
//! }
//!
//! impl ScrollSurface for Strip {
//!     fn viewport(&self) -> Viewport {
//!         self.viewport
//!     }
//!
//!     fn scroll_to_offset(&mut self, offset: f32, _animated: bool) {
//!         self.viewport.offset = offset;
//!     }
//! }
//!
//! let items: Arc<dyn ItemProvider> = Arc::new(SizeList::uniform(4, Size::new(320.0, 240.0)));
//! let strip = Strip {
//!     viewport: Viewport::new(0.0, Size::new(320.0, 240.0)),
//! };
//!
//! let config = GalleryConfig::new().with_start_index(1);
//! let mut gallery = PagesGallery::new(config, Arc::downgrade(&items), strip);
//! gallery.item_selected.connect(|index| println!("showing item {index}"));
//!
//! assert_eq!(gallery.current_selected_index(), Some(1));
//! assert_eq!(gallery.surface().viewport.offset, 320.0);
//!
//! gallery.next();
//! let viewport = gallery.surface().viewport();
//! assert_eq!(gallery.scroll_offset_changed(viewport), Some(2));
//! ```

use std::sync::{Arc, Weak};
use std::time::Instant;

use pages_gallery_core::{Signal, gallery_debug, gallery_trace, gallery_warn};

use crate::config::GalleryConfig;
use crate::controller::{PagingController, PagingState};
use crate::geometry::Point;
use crate::indicator::PageIndicator;
use crate::layout::{StripLayout, Viewport};
use crate::pan::{PanRelease, PanTracker};
use crate::provider::{ItemProvider, NoItems};
use crate::surface::ScrollSurface;

/// A horizontally paging gallery.
///
/// # Signals
///
/// - `item_selected(usize)`: Emitted once each time the active item changes
pub struct PagesGallery<S: ScrollSurface> {
    config: GalleryConfig,
    provider: Weak<dyn ItemProvider>,
    surface: S,
    controller: PagingController,
    indicator: PageIndicator,
    pan: PanTracker,
    /// Offset of the surface when the current pointer drag was pressed.
    pan_origin: f32,

    /// Signal emitted when the active item changes.
    pub item_selected: Signal<usize>,
}

impl<S: ScrollSurface> PagesGallery<S> {
    /// Create a gallery over `provider`, shown through `surface`.
    ///
    /// The surface jumps to `start_index` without animation. The gallery only
    /// keeps a weak reference to the provider; once the provider is dropped
    /// the gallery behaves as if it had no items.
    pub fn new(config: GalleryConfig, provider: Weak<dyn ItemProvider>, surface: S) -> Self {
        let controller = PagingController::new(config.allow_inertia(), config.allow_autoscroll());
        let indicator = PageIndicator::new(*config.indicator(), config.show_indicator());

        let mut gallery = Self {
            config,
            provider,
            surface,
            controller,
            indicator,
            pan: PanTracker::new(),
            pan_origin: 0.0,
            item_selected: Signal::new(),
        };

        let items = gallery.items();
        let start_index = gallery.config.start_index();
        gallery.indicator.rebuild(items.item_count());
        gallery
            .controller
            .start(start_index, &*items, &mut gallery.surface);
        gallery.indicator.highlight(Some(start_index), Instant::now());

        gallery_debug!(
            start_index,
            item_count = items.item_count(),
            "gallery created"
        );
        gallery
    }

    fn items(&self) -> Arc<dyn ItemProvider> {
        match self.provider.upgrade() {
            Some(items) => items,
            None => {
                gallery_trace!("item provider dropped, treating as empty");
                Arc::new(NoItems)
            }
        }
    }

    /// The configuration the gallery was built with.
    #[inline]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// The page indicator model, for drawing the dots.
    #[inline]
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    /// The host scroll surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host scroll surface.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current interaction state.
    #[inline]
    pub fn paging_state(&self) -> PagingState {
        self.controller.state()
    }

    /// The active item, if any.
    ///
    /// Never reports an index the provider no longer has, even before the
    /// next scroll event or [`reload`](Self::reload) clears it.
    pub fn current_selected_index(&self) -> Option<usize> {
        let item_count = self.item_count();
        self.controller
            .active_index()
            .filter(|&index| index < item_count)
    }

    /// Number of items the provider currently reports.
    pub fn item_count(&self) -> usize {
        self.items().item_count()
    }

    /// Scroll to the item after the active one.
    ///
    /// Returns `false` if there is no active item or it is the last one.
    pub fn next(&mut self) -> bool {
        let items = self.items();
        self.controller.next(&*items, &mut self.surface)
    }

    /// Scroll to the item before the active one.
    ///
    /// Returns `false` if there is no active item or it is the first one.
    pub fn previous(&mut self) -> bool {
        let items = self.items();
        self.controller.previous(&*items, &mut self.surface)
    }

    /// Center the viewport on item `index`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn scroll_to_item(&mut self, index: usize, animated: bool) -> bool {
        let items = self.items();
        self.controller
            .scroll_to_item(index, animated, &*items, &mut self.surface)
    }

    /// Re-read the provider after its items changed.
    ///
    /// Rebuilds the indicator dots, drops an active index that no longer
    /// exists and highlights the remaining one again.
    pub fn reload(&mut self) {
        if self.provider.strong_count() == 0 {
            gallery_warn!("reloading a gallery whose item provider was dropped");
        }
        let item_count = self.item_count();
        gallery_debug!(item_count, "reloading gallery");
        self.indicator.rebuild(item_count);
        self.controller.retain_in_range(item_count);
        self.indicator
            .highlight(self.controller.active_index(), Instant::now());
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// The host scrolled the strip to `viewport`.
    ///
    /// Returns the new active index when it changed. Each change highlights
    /// the matching dot, calls [`ItemProvider::item_selected`] and emits
    /// `item_selected`, all exactly once.
    pub fn scroll_offset_changed(&mut self, viewport: Viewport) -> Option<usize> {
        let items = self.items();
        let index = self.controller.scroll_offset_changed(viewport, &*items)?;

        self.indicator.highlight(Some(index), Instant::now());
        items.item_selected(index);
        self.item_selected.emit(index);
        Some(index)
    }

    /// The user started dragging the strip.
    pub fn begin_dragging(&mut self) {
        self.controller.begin_dragging();
    }

    /// The user released the strip.
    pub fn end_dragging(&mut self, will_decelerate: bool) {
        let items = self.items();
        self.controller
            .end_dragging(will_decelerate, &*items, &mut self.surface);
    }

    /// Native momentum scrolling is about to start.
    ///
    /// `translation` is the pan translation of the drag that just ended.
    pub fn will_begin_decelerating(&mut self, translation: Point) {
        let items = self.items();
        self.controller
            .will_begin_decelerating(translation, &*items, &mut self.surface);
    }

    /// Native momentum scrolling stopped.
    pub fn end_decelerating(&mut self) {
        let items = self.items();
        self.controller.end_decelerating(&*items, &mut self.surface);
    }

    /// An animated scroll finished.
    pub fn end_scroll_animation(&mut self) {
        self.controller.end_scroll_animation();
    }

    /// Dispatch the end of a pan gesture.
    ///
    /// Reports the drag end, then, when momentum follows, the start of the
    /// deceleration with the pan translation.
    pub fn finish_pan(&mut self, release: PanRelease) {
        self.end_dragging(release.will_decelerate);
        if release.will_decelerate {
            self.will_begin_decelerating(release.translation);
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer pressed on the strip.
    ///
    /// Hosts without a native pan recognizer feed raw pointer samples through
    /// the `pointer_*` methods. The surface follows the pointer without
    /// animation; the host still reports the resulting offsets through
    /// [`scroll_offset_changed`](Self::scroll_offset_changed).
    pub fn pointer_pressed(&mut self, position: Point, now: Instant) {
        self.pan_origin = self.surface.viewport().offset;
        self.pan.press(position, now);
    }

    /// Pointer moved.
    pub fn pointer_moved(&mut self, position: Point, now: Instant) {
        let Some(pan) = self.pan.drag(position, now) else {
            return;
        };
        if pan.began {
            self.begin_dragging();
        }
        self.surface
            .scroll_to_offset(self.pan_origin - pan.translation.x, false);
    }

    /// Pointer released.
    ///
    /// Returns the release details when the press had turned into a drag.
    /// A fast release with inertia allowed keeps the strip moving; drive it
    /// with [`tick`](Self::tick) until that returns `false`.
    pub fn pointer_released(&mut self, now: Instant) -> Option<PanRelease> {
        let release = self.pan.release(now)?;
        if !self.config.allow_inertia() {
            self.pan.reset();
        }
        self.finish_pan(release);
        Some(release)
    }

    /// Advance pointer momentum to `now`.
    ///
    /// Moves the surface without animation while momentum lasts. When it
    /// dies out, or the strip reaches either end, the deceleration ends and
    /// the strip snaps as after native momentum. Returns whether momentum is
    /// still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.pan.is_decelerating() {
            return false;
        }

        let Some(delta) = self.pan.update(now) else {
            gallery_trace!("pointer momentum finished");
            self.end_decelerating();
            return false;
        };

        let items = self.items();
        let viewport = self.surface.viewport();
        let content_width =
            StripLayout::measure(items.item_count(), |i| items.size_for_item(i)).content_width();
        let max_offset = (content_width - viewport.size.width).max(0.0);

        // Content moves against the pointer.
        let target = viewport.offset - delta;
        let offset = target.clamp(0.0, max_offset);
        self.surface.scroll_to_offset(offset, false);

        if offset != target {
            gallery_trace!(offset, "pointer momentum hit the strip edge");
            self.pan.reset();
            self.end_decelerating();
            return false;
        }
        true
    }
}

impl<S: ScrollSurface + std::fmt::Debug> std::fmt::Debug for PagesGallery<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagesGallery")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("controller", &self.controller)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}
