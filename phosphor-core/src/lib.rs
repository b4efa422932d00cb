//! Board-agnostic rendering core for small displays
//!
//! This crate contains everything that does not depend on a specific
//! panel or transport:
//!
//! - ARGB color model and native pixel-format conversions
//! - Vertex/viewport geometry and the 8-way orientation transform
//! - Incremental scan-conversion algorithms (lines, boxes, circles,
//!   discs, triangles, arcs, sectors, anti-aliased lines)
//! - The `PanelDriver` capability contract concrete drivers implement
//! - The `Canvas` drawing context with present-lock batching and an
//!   optional per-pixel shader chain
//!
//! The rasterizer always operates in logical coordinates; orientation
//! and viewport offsets are applied by the driver at the point it
//! touches physical memory or protocol bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod geometry;
pub mod pipeline;
pub mod raster;
pub mod traits;

pub use color::{Argb, ClutCache, PixelFormat};
pub use geometry::{Orientation, Rect, Size, Vertex, Viewport};
pub use pipeline::{Canvas, Shader};
pub use traits::{PanelDriver, PanelError, PanelInfo};
