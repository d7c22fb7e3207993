//! Core systems for Pages Gallery.
//!
//! This crate provides the shared infrastructure the gallery widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use pages_gallery_core::Signal;
//!
//! // Create a signal that notifies when the selected item changes
//! let item_selected = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = item_selected.connect(|index| {
//!     println!("Item {} selected", index);
//! });
//!
//! // Emit the signal
//! item_selected.emit(2);
//!
//! // Disconnect when done
//! item_selected.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
