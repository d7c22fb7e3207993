//! Layout model for the gallery strip.
//!
//! Items are laid out left to right with no spacing between them. Frames are
//! derived from the current item sizes on every measurement and never kept
//! between calls, since the provider may report different sizes at any time.

use pages_gallery_core::logging::targets;

use crate::geometry::{Rect, Size};

/// The visible window onto the strip, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Horizontal content offset of the viewport's left edge.
    pub offset: f32,
    /// Size of the viewport.
    pub size: Size,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(offset: f32, size: Size) -> Self {
        Self { offset, size }
    }

    /// The viewport's center along the scroll axis, in content coordinates.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.offset + self.size.width / 2.0
    }

    /// The same viewport moved to `offset`.
    #[inline]
    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }
}

/// The frames of every item in the strip for one measurement pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripLayout {
    frames: Vec<Rect>,
}

impl StripLayout {
    /// Measure `item_count` items, querying `size_of` once per index in order.
    pub fn measure(item_count: usize, size_of: impl Fn(usize) -> Size) -> Self {
        let mut frames = Vec::with_capacity(item_count);
        let mut x = 0.0;
        for index in 0..item_count {
            let size = size_of(index);
            frames.push(Rect::new(x, 0.0, size.width, size.height));
            x += size.width;
        }
        Self { frames }
    }

    /// Number of measured items.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the strip has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All frames in index order.
    #[inline]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// The frame of the item at `index`.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    /// Total width of the strip.
    pub fn content_width(&self) -> f32 {
        self.frames.last().map_or(0.0, Rect::right)
    }

    /// Index of the item whose center is closest to `center_x`.
    ///
    /// Ties go to the lowest index. Returns `None` for an empty strip.
    pub fn nearest_to(&self, center_x: f32) -> Option<usize> {
        let mut nearest: Option<(usize, f32)> = None;
        for (index, frame) in self.frames.iter().enumerate() {
            let distance = (frame.center_x() - center_x).abs();
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((index, distance)),
            }
        }
        nearest.map(|(index, _)| index)
    }

    /// The offset that centers item `index` in `viewport`.
    ///
    /// The result is clamped to the scrollable range
    /// `[0, content_width - viewport_width]`, so items near either end of the
    /// strip settle against the edge instead of leaving blank space.
    pub fn centered_offset(&self, index: usize, viewport: &Viewport) -> Option<f32> {
        let frame = self.frame(index)?;
        let max_offset = (self.content_width() - viewport.size.width).max(0.0);
        let offset = frame.center_x() - viewport.size.width / 2.0;
        Some(offset.clamp(0.0, max_offset))
    }
}

/// Index of the item whose center is nearest the viewport center.
///
/// Returns `None` when `item_count` is zero.
///
/// # Example
///
/// ```
/// use pages_gallery::geometry::Size;
/// use pages_gallery::layout::nearest_index;
///
/// let nearest = nearest_index(150.0, 100.0, 3, |_| Size::new(100.0, 80.0));
/// assert_eq!(nearest, Some(1));
/// ```
pub fn nearest_index(
    viewport_offset: f32,
    viewport_width: f32,
    item_count: usize,
    size_of: impl Fn(usize) -> Size,
) -> Option<usize> {
    if item_count == 0 {
        tracing::trace!(target: targets::LAYOUT, "no items, no nearest index");
        return None;
    }

    let layout = StripLayout::measure(item_count, size_of);
    let center_x = viewport_offset + viewport_width / 2.0;
    let nearest = layout.nearest_to(center_x);
    tracing::trace!(target: targets::LAYOUT, center_x, ?nearest, "nearest index");
    nearest
}
