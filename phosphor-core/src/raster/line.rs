//! Straight-line scan conversion

use super::Plotter;
use crate::color::Argb;
use crate::geometry::Vertex;

/// Horizontal line from `x0` to `x1` (inclusive, either order) at `y`.
pub fn hline<P: Plotter>(p: &mut P, y: i16, x0: i16, x1: i16, color: Argb) {
    let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    for x in lo..=hi {
        p.pixel(Vertex::new(x, y), color);
    }
}

/// Vertical line from `y0` to `y1` (inclusive, either order) at `x`.
pub fn vline<P: Plotter>(p: &mut P, x: i16, y0: i16, y1: i16, color: Argb) {
    let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    for y in lo..=hi {
        p.pixel(Vertex::new(x, y), color);
    }
}

/// General line between two vertices, Bresenham error accumulator.
///
/// Horizontal and vertical spans take the dedicated fast paths.
pub fn line<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, color: Argb) {
    if a.y == b.y {
        return hline(p, a.y, a.x, b.x, color);
    }
    if a.x == b.x {
        return vline(p, a.x, a.y, b.y, color);
    }

    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let sx: i16 = if a.x < b.x { 1 } else { -1 };
    let sy: i16 = if a.y < b.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut v = a;
    loop {
        p.pixel(v, color);
        if v == b {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            v.x += sx;
        }
        if e2 < dx {
            err += dx;
            v.y += sy;
        }
    }
}

/// Line of the given width: a `width` x `width` square is stamped at
/// every step of the underlying Bresenham walk. Width 0 or 1 is the
/// plain line.
pub fn thick_line<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, width: u8, color: Argb) {
    if width <= 1 {
        return line(p, a, b, color);
    }
    let half = (width / 2) as i16;
    let w = width as i16;
    let stamp = |p: &mut P, v: Vertex| {
        for dy in 0..w {
            for dx in 0..w {
                p.pixel(Vertex::new(v.x - half + dx, v.y - half + dy), color);
            }
        }
    };

    if a.x == b.x && a.y == b.y {
        return stamp(p, a);
    }
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let sx: i16 = if a.x < b.x { 1 } else { -1 };
    let sy: i16 = if a.y < b.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut v = a;
    loop {
        stamp(p, v);
        if v == b {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            v.x += sx;
        }
        if e2 < dx {
            err += dx;
            v.y += sy;
        }
    }
}
