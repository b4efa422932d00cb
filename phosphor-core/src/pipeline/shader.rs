//! Per-pixel post-processing stages

use crate::color::Argb;
use crate::geometry::Vertex;

/// A post-processing stage between primitive drawing and the device.
///
/// Stages form an ordered chain on the canvas; each receives every
/// pixel write, may move it, recolor it, or drop it by returning
/// `None`. An empty chain is behaviorally identical to writing
/// straight to the device.
pub trait Shader {
    fn shade(&mut self, v: Vertex, color: Argb) -> Option<(Vertex, Argb)>;
}
