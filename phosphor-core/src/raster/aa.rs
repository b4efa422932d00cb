//! Anti-aliased lines (Wu's algorithm)

use super::line::line;
use super::Plotter;
use crate::color::Argb;
use crate::geometry::Vertex;

/// Anti-aliased line between two vertices.
///
/// The major axis is walked pixel-by-pixel while the minor-axis
/// position runs in a 16-bit fixed-point accumulator; at every step
/// the accumulator's high fraction byte blends the draw color toward
/// `bg` for the two minor-adjacent pixels, with complementary weights
/// summing to 255. Endpoints are always plotted at full intensity.
///
/// Horizontal, vertical and exact-diagonal lines have no minor-axis
/// fraction to blend with and fall back to the plain line drawer.
pub fn aa_line<P: Plotter>(p: &mut P, a: Vertex, b: Vertex, fg: Argb, bg: Argb) {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    if dx == 0 || dy == 0 || dx == dy {
        return line(p, a, b, fg);
    }

    p.pixel(a, fg);
    p.pixel(b, fg);

    if dx > dy {
        let (lo, hi) = if a.x < b.x { (a, b) } else { (b, a) };
        let gradient = (((hi.y - lo.y) as i32) << 16) / (hi.x - lo.x) as i32;
        let mut minor = (lo.y as i32) << 16;
        for x in lo.x + 1..hi.x {
            minor += gradient;
            let y = (minor >> 16) as i16;
            let w = ((minor >> 8) & 0xFF) as u8;
            p.pixel(Vertex::new(x, y), Argb::mix(fg, bg, 255 - w));
            p.pixel(Vertex::new(x, y + 1), Argb::mix(fg, bg, w));
        }
    } else {
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        let gradient = (((hi.x - lo.x) as i32) << 16) / (hi.y - lo.y) as i32;
        let mut minor = (lo.x as i32) << 16;
        for y in lo.y + 1..hi.y {
            minor += gradient;
            let x = (minor >> 16) as i16;
            let w = ((minor >> 8) & 0xFF) as u8;
            p.pixel(Vertex::new(x, y), Argb::mix(fg, bg, 255 - w));
            p.pixel(Vertex::new(x + 1, y), Argb::mix(fg, bg, w));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::grid::Grid;
    use super::*;

    const RED: Argb = Argb::rgb(255, 0, 0);
    const BG: Argb = Argb::BLACK;

    #[test]
    fn endpoints_are_full_intensity() {
        let mut g: Grid<8, 8> = Grid::new();
        aa_line(&mut g, Vertex::new(0, 0), Vertex::new(4, 2), RED, BG);
        assert_eq!(g.at(0, 0), Some(RED));
        assert_eq!(g.at(4, 2), Some(RED));
    }

    /// At every interior major-axis step the two minor-adjacent
    /// pixels carry complementary weights summing to 255.
    #[test]
    fn interior_weights_are_complementary() {
        let mut g: Grid<8, 8> = Grid::new();
        aa_line(&mut g, Vertex::new(0, 0), Vertex::new(4, 2), RED, BG);
        // gradient 0.5: step 1 splits 127/128, step 2 is exact
        assert_eq!(g.at(1, 0), Some(Argb::mix(RED, BG, 127)));
        assert_eq!(g.at(1, 1), Some(Argb::mix(RED, BG, 128)));
        assert_eq!(g.at(2, 1), Some(RED));
        assert_eq!(g.at(2, 2), Some(BG));
        assert_eq!(g.at(3, 1), Some(Argb::mix(RED, BG, 127)));
        assert_eq!(g.at(3, 2), Some(Argb::mix(RED, BG, 128)));

        for (x, y) in [(1, 0), (3, 1)] {
            let top = g.at(x, y).unwrap();
            let bottom = g.at(x, y + 1).unwrap();
            assert_eq!(top.r() as u16 + bottom.r() as u16, 255);
        }
    }

    #[test]
    fn horizontal_and_vertical_fall_back_to_plain() {
        let mut h: Grid<8, 8> = Grid::new();
        aa_line(&mut h, Vertex::new(0, 3), Vertex::new(6, 3), RED, BG);
        for x in 0..=6 {
            assert_eq!(h.at(x, 3), Some(RED));
        }
        assert_eq!(h.count(), 7);

        let mut v: Grid<8, 8> = Grid::new();
        aa_line(&mut v, Vertex::new(2, 1), Vertex::new(2, 6), RED, BG);
        for y in 1..=6 {
            assert_eq!(v.at(2, y), Some(RED));
        }
        assert_eq!(v.count(), 6);
    }

    #[test]
    fn exact_diagonal_falls_back_to_plain() {
        let mut g: Grid<8, 8> = Grid::new();
        aa_line(&mut g, Vertex::new(0, 0), Vertex::new(5, 5), RED, BG);
        for i in 0..=5 {
            assert_eq!(g.at(i, i), Some(RED));
        }
        // No blended side pixels at all
        assert_eq!(g.count(), 6);
    }

    #[test]
    fn steep_line_blends_along_x() {
        let mut g: Grid<8, 8> = Grid::new();
        aa_line(&mut g, Vertex::new(0, 0), Vertex::new(2, 4), RED, BG);
        assert_eq!(g.at(0, 0), Some(RED));
        assert_eq!(g.at(2, 4), Some(RED));
        let left = g.at(0, 1).unwrap();
        let right = g.at(1, 1).unwrap();
        assert_eq!(left.r() as u16 + right.r() as u16, 255);
    }

    #[test]
    fn direction_independent() {
        let mut fwd: Grid<8, 8> = Grid::new();
        let mut rev: Grid<8, 8> = Grid::new();
        aa_line(&mut fwd, Vertex::new(0, 0), Vertex::new(4, 2), RED, BG);
        aa_line(&mut rev, Vertex::new(4, 2), Vertex::new(0, 0), RED, BG);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fwd.at(x, y), rev.at(x, y));
            }
        }
    }
}
