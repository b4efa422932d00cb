//! Vertex, screen and viewport geometry
//!
//! The rasterizer works entirely in logical coordinates on the screen
//! canvas; the viewport describes the physically visible window into
//! it and the [`Orientation`] transform maps logical coordinates onto
//! a rotated or mirrored physical scan order.

mod orientation;

pub use orientation::Orientation;

use core::ops::{Add, Sub};

/// A 2-D point with signed 16-bit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

impl Vertex {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    pub fn component_min(self, other: Vertex) -> Vertex {
        Vertex::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    pub fn component_max(self, other: Vertex) -> Vertex {
        Vertex::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Translate by (dx, dy)
    pub const fn offset(self, dx: i16, dy: i16) -> Vertex {
        Vertex::new(self.x + dx, self.y + dy)
    }

    /// 2-D cross product of `self` and `other` as vectors.
    ///
    /// Sign gives the turn direction; widened to i32 so it cannot
    /// overflow for any pair of 16-bit vertices.
    pub const fn cross(self, other: Vertex) -> i32 {
        self.x as i32 * other.y as i32 - self.y as i32 * other.x as i32
    }
}

impl Add for Vertex {
    type Output = Vertex;
    fn add(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vertex {
    type Output = Vertex;
    fn sub(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Logical canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether a logical vertex lies on the canvas
    pub const fn contains(self, v: Vertex) -> bool {
        v.x >= 0 && v.y >= 0 && (v.x as u16) < self.width && (v.y as u16) < self.height
    }
}

/// The physically visible window into the logical screen canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub x_offset: u16,
    pub y_offset: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16, x_offset: u16, y_offset: u16) -> Self {
        Self {
            width,
            height,
            x_offset,
            y_offset,
        }
    }

    /// A viewport covering the whole screen
    pub const fn full(screen: Size) -> Self {
        Self::new(screen.width, screen.height, 0, 0)
    }

    /// Clamp this viewport so it lies within the screen bounds.
    ///
    /// Offsets are clamped first, then the extent is shrunk to fit.
    pub fn reconciled(self, screen: Size) -> Viewport {
        let x_offset = self.x_offset.min(screen.width.saturating_sub(1));
        let y_offset = self.y_offset.min(screen.height.saturating_sub(1));
        Viewport {
            width: self.width.min(screen.width - x_offset),
            height: self.height.min(screen.height - y_offset),
            x_offset,
            y_offset,
        }
    }

    /// Whether a logical vertex is inside the visible window
    pub const fn contains(self, v: Vertex) -> bool {
        v.x >= self.x_offset as i16
            && v.y >= self.y_offset as i16
            && (v.x as u16) < self.x_offset + self.width
            && (v.y as u16) < self.y_offset + self.height
    }
}

/// An inclusive clipping rectangle in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub min: Vertex,
    pub max: Vertex,
}

impl Rect {
    /// Build a rectangle from two arbitrary corners
    pub fn from_corners(a: Vertex, b: Vertex) -> Self {
        Self {
            min: a.component_min(b),
            max: a.component_max(b),
        }
    }

    /// Whether a vertex lies inside the rectangle (inclusive)
    pub const fn contains(self, v: Vertex) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_arithmetic() {
        let a = Vertex::new(3, -2);
        let b = Vertex::new(-1, 5);
        assert_eq!(a + b, Vertex::new(2, 3));
        assert_eq!(a - b, Vertex::new(4, -7));
        assert_eq!(a.component_min(b), Vertex::new(-1, -2));
        assert_eq!(a.component_max(b), Vertex::new(3, 5));
    }

    #[test]
    fn cross_sign_gives_turn_direction() {
        let right = Vertex::new(1, 0);
        let up = Vertex::new(0, 1);
        assert!(right.cross(up) > 0);
        assert!(up.cross(right) < 0);
        assert_eq!(right.cross(right), 0);
    }

    #[test]
    fn size_contains_is_half_open() {
        let s = Size::new(10, 5);
        assert!(s.contains(Vertex::new(0, 0)));
        assert!(s.contains(Vertex::new(9, 4)));
        assert!(!s.contains(Vertex::new(10, 0)));
        assert!(!s.contains(Vertex::new(0, 5)));
        assert!(!s.contains(Vertex::new(-1, 0)));
    }

    #[test]
    fn viewport_reconciled_against_screen() {
        let screen = Size::new(100, 60);
        let v = Viewport::new(200, 200, 90, 10).reconciled(screen);
        assert_eq!(v.x_offset, 90);
        assert_eq!(v.width, 10);
        assert_eq!(v.height, 50);

        let off = Viewport::new(10, 10, 500, 500).reconciled(screen);
        assert!(off.x_offset < screen.width);
        assert!(off.y_offset < screen.height);
    }

    #[test]
    fn viewport_contains_respects_offset() {
        let v = Viewport::new(10, 10, 5, 5);
        assert!(!v.contains(Vertex::new(4, 5)));
        assert!(v.contains(Vertex::new(5, 5)));
        assert!(v.contains(Vertex::new(14, 14)));
        assert!(!v.contains(Vertex::new(15, 14)));
    }

    #[test]
    fn rect_from_unordered_corners() {
        let r = Rect::from_corners(Vertex::new(7, 1), Vertex::new(2, 6));
        assert_eq!(r.min, Vertex::new(2, 1));
        assert_eq!(r.max, Vertex::new(7, 6));
        assert!(r.contains(Vertex::new(2, 6)));
        assert!(!r.contains(Vertex::new(8, 3)));
    }
}
