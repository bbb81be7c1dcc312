//! Video window placement geometry: monitor pixel aspect, autofit, and geometry overrides.
//!
//! Pure geometry — no window system calls, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Sizes, rects, and size/position directives with percent and far-edge semantics
//! - [`autofit`] — Aspect-preserving fit of a window into a bounding box
//! - [`aspect`] — Monitor pixel aspect correction
//! - [`window`] — The placement pipeline producing the final window rectangle
//! - `svg` — SVG diagram of each pipeline stage (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

/// Emit a `tracing` event for one pipeline stage. Compiles to nothing
/// without the `tracing` feature.
macro_rules! trace_stage {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "zenplace", $($arg)*);
    };
}
pub(crate) use trace_stage;

pub mod aspect;
pub mod autofit;
pub mod geometry;
#[cfg(feature = "svg")]
pub mod svg;
pub mod window;

pub use aspect::correct_monitor_aspect;
pub use autofit::{apply_autofit, fit_inside};
pub use geometry::{GeometrySpec, Length, Position, Rect, Size};
pub use window::{
    GeometryError, GeometryTrace, ResolvedGeometry, ScreenInfo, ScreenOptions,
    calc_window_geometry, trace_window_geometry, try_calc_window_geometry,
};
