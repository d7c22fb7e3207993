//! Logging facilities for Pages Gallery.
//!
//! This module provides:
//! - Target and span names for filtering gallery logs with `tracing` directives
//! - Performance tracing hooks for profiling
//! - Thin logging macros with consistent target naming
//!
//! # Tracing Integration
//!
//! Pages Gallery uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("pages_gallery::paging=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Pages Gallery for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Snap decision span (drag end, deceleration, inertia suppression).
    pub const SNAP: &str = "pages_gallery::snap";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Gallery shell target.
    pub const GALLERY: &str = "pages_gallery";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pages_gallery_core::signal";
    /// Layout model target.
    pub const LAYOUT: &str = "pages_gallery::layout";
    /// Paging controller target.
    pub const PAGING: &str = "pages_gallery::paging";
    /// Page indicator target.
    pub const INDICATOR: &str = "pages_gallery::indicator";
    /// Configuration loading target.
    pub const CONFIG: &str = "pages_gallery::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "pages_gallery::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are wrappers around the `tracing` crate macros that log under the
/// gallery shell target.
#[macro_export]
macro_rules! gallery_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "pages_gallery", $($arg)*)
    };
}

#[macro_export]
macro_rules! gallery_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "pages_gallery", $($arg)*)
    };
}

#[macro_export]
macro_rules! gallery_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "pages_gallery", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new(span_names::SNAP);
        gallery_trace!(index = 1usize, "inside span");
    }

    #[test]
    fn test_targets_share_prefix() {
        for target in [targets::LAYOUT, targets::PAGING, targets::INDICATOR, targets::CONFIG] {
            assert!(target.starts_with(targets::GALLERY));
        }
    }
}
