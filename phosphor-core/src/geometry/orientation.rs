//! Logical-to-physical coordinate transform
//!
//! A panel is mounted at one of four 90-degree rotations, optionally
//! combined with a vertical mirror. The orientation is fixed when the
//! driver instance is constructed; the rasterizer never sees it.
//! Drivers apply [`Orientation::to_physical`] at the point they touch
//! physical memory or protocol bytes, and [`Orientation::to_logical`]
//! on read-back paths.

use super::{Size, Vertex};

/// The eight mounting orientations: four rotations, each optionally
/// mirrored along the vertical axis after rotating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
    Rot0Mirror,
    Rot90Mirror,
    Rot180Mirror,
    Rot270Mirror,
}

impl Orientation {
    /// All eight orientations, for exhaustive iteration
    pub const ALL: [Orientation; 8] = [
        Orientation::Rot0,
        Orientation::Rot90,
        Orientation::Rot180,
        Orientation::Rot270,
        Orientation::Rot0Mirror,
        Orientation::Rot90Mirror,
        Orientation::Rot180Mirror,
        Orientation::Rot270Mirror,
    ];

    /// Whether logical width/height are exchanged on the panel
    pub const fn swaps_axes(self) -> bool {
        matches!(
            self,
            Orientation::Rot90
                | Orientation::Rot270
                | Orientation::Rot90Mirror
                | Orientation::Rot270Mirror
        )
    }

    const fn mirrored(self) -> bool {
        matches!(
            self,
            Orientation::Rot0Mirror
                | Orientation::Rot90Mirror
                | Orientation::Rot180Mirror
                | Orientation::Rot270Mirror
        )
    }

    /// Physical panel dimensions for a given logical canvas size
    pub const fn physical_size(self, logical: Size) -> Size {
        if self.swaps_axes() {
            Size::new(logical.height, logical.width)
        } else {
            logical
        }
    }

    /// Map a logical vertex onto the physical scan order.
    ///
    /// `logical` is the logical canvas size; the result is a valid
    /// physical coordinate whenever `v` is on the canvas, including
    /// every edge pixel (coordinate == size - 1).
    pub const fn to_physical(self, v: Vertex, logical: Size) -> Vertex {
        let w = logical.width as i16;
        let h = logical.height as i16;
        let rotated = match self {
            Orientation::Rot0 | Orientation::Rot0Mirror => v,
            Orientation::Rot90 | Orientation::Rot90Mirror => Vertex::new(h - 1 - v.y, v.x),
            Orientation::Rot180 | Orientation::Rot180Mirror => {
                Vertex::new(w - 1 - v.x, h - 1 - v.y)
            }
            Orientation::Rot270 | Orientation::Rot270Mirror => Vertex::new(v.y, w - 1 - v.x),
        };
        if self.mirrored() {
            let ph = self.physical_size(logical).height as i16;
            Vertex::new(rotated.x, ph - 1 - rotated.y)
        } else {
            rotated
        }
    }

    /// Invert [`Orientation::to_physical`]: recover the logical vertex
    /// a physical coordinate came from.
    pub const fn to_logical(self, v: Vertex, logical: Size) -> Vertex {
        let w = logical.width as i16;
        let h = logical.height as i16;
        let unmirrored = if self.mirrored() {
            let ph = self.physical_size(logical).height as i16;
            Vertex::new(v.x, ph - 1 - v.y)
        } else {
            v
        };
        match self {
            Orientation::Rot0 | Orientation::Rot0Mirror => unmirrored,
            Orientation::Rot90 | Orientation::Rot90Mirror => {
                Vertex::new(unmirrored.y, h - 1 - unmirrored.x)
            }
            Orientation::Rot180 | Orientation::Rot180Mirror => {
                Vertex::new(w - 1 - unmirrored.x, h - 1 - unmirrored.y)
            }
            Orientation::Rot270 | Orientation::Rot270Mirror => {
                Vertex::new(w - 1 - unmirrored.y, unmirrored.x)
            }
        }
    }
}
