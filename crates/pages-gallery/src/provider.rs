//! Item provider interface.
//!
//! The gallery never stores item content. It asks an [`ItemProvider`] for the
//! item count and per-item sizes whenever it needs them, so the provider is
//! free to change its answers between calls.
//!
//! # Ownership
//!
//! The gallery holds its provider through a `Weak` reference and never keeps
//! it alive. Once the last strong reference is dropped the gallery behaves as
//! if the provider reported zero items.

use parking_lot::RwLock;

use crate::geometry::Size;

/// Supplies item counts and sizes to a gallery.
///
/// Implementations must be cheap to query: the paging controller measures the
/// whole strip on every scroll event.
pub trait ItemProvider: Send + Sync {
    /// Returns the number of items in the gallery.
    fn item_count(&self) -> usize;

    /// Returns the size of the item at `index`.
    ///
    /// Only called with `index < item_count()`.
    fn size_for_item(&self, index: usize) -> Size;

    /// Called once each time the active item changes.
    ///
    /// The default implementation does nothing.
    fn item_selected(&self, _index: usize) {}
}

/// Stand-in provider used after the real provider has been dropped.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct NoItems;

impl ItemProvider for NoItems {
    fn item_count(&self) -> usize {
        0
    }

    fn size_for_item(&self, _index: usize) -> Size {
        Size::ZERO
    }
}

/// A simple thread-safe list of item sizes.
///
/// `SizeList` is the stock provider for galleries whose items are described
/// entirely by their sizes, with content supplied separately by the host.
///
/// # Example
///
/// ```
/// use pages_gallery::geometry::Size;
/// use pages_gallery::provider::{ItemProvider, SizeList};
///
/// let items = SizeList::uniform(3, Size::new(320.0, 200.0));
/// items.push(Size::new(160.0, 200.0));
/// assert_eq!(items.item_count(), 4);
/// assert_eq!(items.size_for_item(3).width, 160.0);
/// ```
#[derive(Debug, Default)]
pub struct SizeList {
    sizes: RwLock<Vec<Size>>,
}

impl SizeList {
    /// Create a provider from a list of sizes.
    pub fn new(sizes: Vec<Size>) -> Self {
        Self {
            sizes: RwLock::new(sizes),
        }
    }

    /// Create a provider with `count` items of the same size.
    pub fn uniform(count: usize, size: Size) -> Self {
        Self::new(vec![size; count])
    }

    /// Create a provider from item widths, all with the given height.
    pub fn from_widths(widths: &[f32], height: f32) -> Self {
        Self::new(widths.iter().map(|&w| Size::new(w, height)).collect())
    }

    /// Append an item.
    pub fn push(&self, size: Size) {
        self.sizes.write().push(size);
    }

    /// Change the size of an existing item.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_size(&self, index: usize, size: Size) -> bool {
        match self.sizes.write().get_mut(index) {
            Some(slot) => {
                *slot = size;
                true
            }
            None => false,
        }
    }

    /// Remove items past `len`.
    pub fn truncate(&self, len: usize) {
        self.sizes.write().truncate(len);
    }

    /// Remove all items.
    pub fn clear(&self) {
        self.sizes.write().clear();
    }
}

impl ItemProvider for SizeList {
    fn item_count(&self) -> usize {
        self.sizes.read().len()
    }

    fn size_for_item(&self, index: usize) -> Size {
        self.sizes.read().get(index).copied().unwrap_or(Size::ZERO)
    }
}

static_assertions::assert_impl_all!(SizeList: Send, Sync);
