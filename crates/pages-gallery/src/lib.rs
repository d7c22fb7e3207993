//! A horizontally paging gallery widget for Pages Gallery.
//!
//! This crate provides the paging logic behind a scrollable strip of
//! variably sized items with an optional row of indicator dots. It does not
//! draw anything: the host owns the scroll view and the item views, forwards
//! its scroll events to a [`PagesGallery`], and reads the indicator model
//! back when it paints.
//!
//! # Pieces
//!
//! - [`layout`]: item frames and the nearest-item search
//! - [`controller`]: the active-index state machine and snap decisions
//! - [`indicator`]: per-dot colors and frames for the page indicator
//! - [`pan`]: raw pointer samples to pan translation and release velocity
//! - [`gallery`]: the widget shell wiring everything to the host
//!
//! # Getting Started
//!
//! Implement [`ScrollSurface`] for the host scroll view, hand the gallery a
//! weak reference to an [`ItemProvider`] such as [`SizeList`], and forward
//! scroll events:
//!
//! ```
//! use std::sync::Arc;
//!
//! use pages_gallery::geometry::Size;
//! use pages_gallery::{GalleryConfig, ItemProvider, PagesGallery, ScrollSurface, SizeList, Viewport};
//!
//! # struct HostScrollView { viewport: Viewport }
//! # impl ScrollSurface for HostScrollView {
//! #     fn viewport(&self) -> Viewport { self.viewport }
//! #     fn scroll_to_offset(&mut self, offset: f32, _animated: bool) { self.viewport.offset = offset; }
//! # }
//! let items: Arc<dyn ItemProvider> = Arc::new(SizeList::from_widths(&[300.0, 200.0, 300.0], 180.0));
//! let view = HostScrollView { viewport: Viewport::new(0.0, Size::new(300.0, 180.0)) };
//! let mut gallery = PagesGallery::new(GalleryConfig::new(), Arc::downgrade(&items), view);
//!
//! // The host reports scrolling; the gallery tracks the active item.
//! gallery.surface_mut().viewport.offset = 200.0;
//! let viewport = gallery.surface().viewport();
//! assert_eq!(gallery.scroll_offset_changed(viewport), Some(1));
//! assert_eq!(gallery.current_selected_index(), Some(1));
//!
//! // The user let go mid-way: the strip snaps to center the nearest item.
//! gallery.begin_dragging();
//! gallery.end_dragging(false);
//! assert_eq!(gallery.surface().viewport().offset, 250.0);
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod indicator;
pub mod layout;
pub mod pan;
pub mod provider;
pub mod surface;

pub use config::{GalleryConfig, IndicatorStyle};
pub use controller::{PagingController, PagingState};
pub use error::{ConfigError, ConfigResult};
pub use gallery::PagesGallery;
pub use indicator::PageIndicator;
pub use layout::{StripLayout, Viewport, nearest_index};
pub use pages_gallery_core::{ConnectionId, Signal};
pub use pan::{PanRelease, PanTracker};
pub use provider::{ItemProvider, SizeList};
pub use surface::ScrollSurface;
