//! Host scroll surface interface.

use crate::layout::Viewport;

/// The host's scrollable view, as seen by the paging controller.
///
/// The host owns the native scroll machinery (gesture recognition, momentum,
/// animated scrolling). The controller only reads the current viewport and
/// asks for new offsets; it never waits for a requested scroll to finish.
pub trait ScrollSurface {
    /// Current viewport: horizontal content offset and visible size.
    fn viewport(&self) -> Viewport;

    /// Move the content offset to `offset`.
    ///
    /// With `animated` set the host scrolls there over its native animation
    /// and reports progress through scroll-offset events; otherwise the move
    /// is immediate. Requesting the current offset with animation cancels any
    /// native momentum in flight.
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);
}
