//! Incremental scan-conversion algorithms
//!
//! Every entry point is a free function over a [`Plotter`] and uses
//! integer or 16.16 fixed-point arithmetic only, so the emitted pixel
//! set is identical regardless of which hardware executes it. The
//! functions never bounds-check: a pixel outside the screen is
//! silently dropped by the pixel sink, not here.

mod aa;
mod curve;
mod fill;
mod line;

pub use aa::aa_line;
pub use curve::{arc, circle, disc, disc_quadrant, sector, Quadrant};
pub use fill::{fill_box, fill_triangle, polygon, rect, triangle};
pub use line::{hline, line, thick_line, vline};

use crate::color::Argb;
use crate::geometry::Vertex;

/// Abstract "write one pixel" capability the rasterizer draws through.
///
/// Implemented by the canvas pixel sink (shader chain, clip, device)
/// and by plain buffers in tests.
pub trait Plotter {
    fn pixel(&mut self, v: Vertex, color: Argb);
}

/// Plot a single point.
pub fn plot<P: Plotter>(p: &mut P, v: Vertex, color: Argb) {
    p.pixel(v, color);
}
