//! Boxes, polygons and solid triangle fill

use super::line::{hline, line, vline};
use super::Plotter;
use crate::color::Argb;
use crate::geometry::Vertex;

/// Rectangle frame between two opposite corners (inclusive).
pub fn rect<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, color: Argb) {
    let lo = a.component_min(b);
    let hi = a.component_max(b);
    hline(p, lo.y, lo.x, hi.x, color);
    if hi.y != lo.y {
        hline(p, hi.y, lo.x, hi.x, color);
    }
    if hi.y - lo.y > 1 {
        vline(p, lo.x, lo.y + 1, hi.y - 1, color);
        if hi.x != lo.x {
            vline(p, hi.x, lo.y + 1, hi.y - 1, color);
        }
    }
}

/// Solid box between two opposite corners (inclusive).
pub fn fill_box<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, color: Argb) {
    let lo = a.component_min(b);
    let hi = a.component_max(b);
    for y in lo.y..=hi.y {
        hline(p, y, lo.x, hi.x, color);
    }
}

/// Closed polygon outline through the given vertices.
pub fn polygon<P: Plotter>(p: &mut P, vertices: &[Vertex], color: Argb) {
    match vertices {
        [] => {}
        [v] => p.pixel(*v, color),
        _ => {
            for pair in vertices.windows(2) {
                line(p, pair[0], pair[1], color);
            }
            line(p, vertices[vertices.len() - 1], vertices[0], color);
        }
    }
}

/// Triangle outline.
pub fn triangle<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, c: Vertex, color: Argb) {
    line(p, a, b, color);
    line(p, b, c, color);
    line(p, c, a, color);
}

/// 16.16 fixed-point slope dx/dy of an edge; caller guarantees dy != 0
fn edge_slope(a: Vertex, b: Vertex) -> i32 {
    (((b.x - a.x) as i32) << 16) / ((b.y - a.y) as i32)
}

/// Round a 16.16 value up to the next integer
fn ceil16(v: i32) -> i16 {
    ((v + 0xFFFF) >> 16) as i16
}

/// Solid triangle fill.
///
/// Vertices are sorted by ascending y and the triangle is scanned in
/// two bands (top vertex to middle, middle to bottom) with two 16.16
/// fixed-point edge accumulators. Spans are half-open on both axes
/// (`ceil(xl) <= x < ceil(xr)`, `y0 <= y < y2`), so two triangles
/// sharing an edge tile it exactly: no double-drawn pixel, no gap.
/// Degenerate triangles (all on one row or one column) collapse to a
/// single line.
pub fn fill_triangle<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, c: Vertex, color: Argb) {
    let mut v = [a, b, c];
    v.sort_unstable_by_key(|v| (v.y, v.x));
    let [v0, v1, v2] = v;

    if v0.y == v2.y {
        return hline(p, v0.y, v0.x, v2.x.max(v1.x).max(v0.x), color);
    }
    if v0.x == v1.x && v1.x == v2.x {
        return vline(p, v0.x, v0.y, v2.y, color);
    }

    // One accumulator rides the long edge (v0 -> v2) the whole way,
    // the other switches from v0 -> v1 to v1 -> v2 at the middle row.
    let long = edge_slope(v0, v2);
    let mut xa = (v0.x as i32) << 16;

    let span = |p: &mut P, y: i16, xa: i32, xb: i32| {
        let (xl, xr) = if xa <= xb { (xa, xb) } else { (xb, xa) };
        for x in ceil16(xl)..ceil16(xr) {
            p.pixel(Vertex::new(x, y), color);
        }
    };

    if v1.y > v0.y {
        let short = edge_slope(v0, v1);
        let mut xb = (v0.x as i32) << 16;
        for y in v0.y..v1.y {
            span(p, y, xa, xb);
            xa += long;
            xb += short;
        }
    }

    if v2.y > v1.y {
        let short = edge_slope(v1, v2);
        let mut xb = (v1.x as i32) << 16;
        for y in v1.y..v2.y {
            span(p, y, xa, xb);
            xa += long;
            xb += short;
        }
    }
}
