//! Circles, discs, arcs and annular sectors

use super::line::{hline, line};
use super::Plotter;
use crate::color::Argb;
use crate::geometry::Vertex;

/// Circle outline, midpoint decision variable.
///
/// Emits the exact 8-way symmetric point set: radius 0 is a single
/// pixel and radius 1 is the 4-neighborhood, with no duplicate or
/// missing boundary pixel.
pub fn circle<P: Plotter>(p: &mut P, center: Vertex, r: u16, color: Argb) {
    if r == 0 {
        return p.pixel(center, color);
    }
    let r = r as i16;
    let (cx, cy) = (center.x, center.y);

    p.pixel(Vertex::new(cx, cy + r), color);
    p.pixel(Vertex::new(cx, cy - r), color);
    p.pixel(Vertex::new(cx + r, cy), color);
    p.pixel(Vertex::new(cx - r, cy), color);

    let mut x: i16 = 0;
    let mut y: i16 = r;
    let mut d: i32 = 1 - r as i32;
    while x < y {
        if d < 0 {
            d += 2 * x as i32 + 3;
        } else {
            d += 2 * (x - y) as i32 + 5;
            y -= 1;
        }
        x += 1;
        if x > y {
            break;
        }
        if x == y {
            // The 45-degree points coincide pairwise; emit only 4
            p.pixel(Vertex::new(cx + x, cy + y), color);
            p.pixel(Vertex::new(cx - x, cy + y), color);
            p.pixel(Vertex::new(cx + x, cy - y), color);
            p.pixel(Vertex::new(cx - x, cy - y), color);
        } else {
            p.pixel(Vertex::new(cx + x, cy + y), color);
            p.pixel(Vertex::new(cx - x, cy + y), color);
            p.pixel(Vertex::new(cx + x, cy - y), color);
            p.pixel(Vertex::new(cx - x, cy - y), color);
            p.pixel(Vertex::new(cx + y, cy + x), color);
            p.pixel(Vertex::new(cx - y, cy + x), color);
            p.pixel(Vertex::new(cx + y, cy - x), color);
            p.pixel(Vertex::new(cx - y, cy - x), color);
        }
    }
}

/// Filled disc.
///
/// Runs the same midpoint walk as [`circle`] and fills a horizontal
/// span per emitted octant step, so the fill covers exactly the
/// outline plus its interior on every radius.
pub fn disc<P: Plotter>(p: &mut P, center: Vertex, r: u16, color: Argb) {
    if r == 0 {
        return p.pixel(center, color);
    }
    let r = r as i16;
    let (cx, cy) = (center.x, center.y);

    hline(p, cy, cx - r, cx + r, color);
    p.pixel(Vertex::new(cx, cy + r), color);
    p.pixel(Vertex::new(cx, cy - r), color);

    let mut x: i16 = 0;
    let mut y: i16 = r;
    let mut d: i32 = 1 - r as i32;
    while x < y {
        if d < 0 {
            d += 2 * x as i32 + 3;
        } else {
            d += 2 * (x - y) as i32 + 5;
            y -= 1;
        }
        x += 1;
        if x > y {
            break;
        }
        hline(p, cy + y, cx - x, cx + x, color);
        hline(p, cy - y, cx - x, cx + x, color);
        if x != y {
            hline(p, cy + x, cx - y, cx + y, color);
            hline(p, cy - x, cx - y, cx + y, color);
        }
    }
}

/// One quarter of a filled disc, screen orientation (y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    /// +x, -y
    TopRight,
    /// -x, -y
    TopLeft,
    /// -x, +y
    BottomLeft,
    /// +x, +y
    BottomRight,
}

impl Quadrant {
    const fn signs(self) -> (i16, i16) {
        match self {
            Quadrant::TopRight => (1, -1),
            Quadrant::TopLeft => (-1, -1),
            Quadrant::BottomLeft => (-1, 1),
            Quadrant::BottomRight => (1, 1),
        }
    }
}

/// Quarter-disc fill restricted to one quadrant.
///
/// Same midpoint walk as [`disc`] with half spans. The axis row and
/// column belong to both adjacent quadrants, so the four quadrants
/// union to the full disc.
pub fn disc_quadrant<P: Plotter>(
    p: &mut P,
    center: Vertex,
    r: u16,
    quadrant: Quadrant,
    color: Argb,
) {
    if r == 0 {
        return p.pixel(center, color);
    }
    let r = r as i16;
    let (cx, cy) = (center.x, center.y);
    let (sx, sy) = quadrant.signs();

    hline(p, cy, cx, cx + sx * r, color);
    p.pixel(Vertex::new(cx, cy + sy * r), color);

    let mut x: i16 = 0;
    let mut y: i16 = r;
    let mut d: i32 = 1 - r as i32;
    while x < y {
        if d < 0 {
            d += 2 * x as i32 + 3;
        } else {
            d += 2 * (x - y) as i32 + 5;
            y -= 1;
        }
        x += 1;
        if x > y {
            break;
        }
        hline(p, cy + sy * y, cx, cx + sx * x, color);
        if x != y {
            hline(p, cy + sy * x, cx, cx + sx * y, color);
        }
    }
}

/// sin(0..=90 degrees) scaled by 1024
const SIN_LUT: [i32; 91] = [
    0, 18, 36, 54, 71, 89, 107, 125, 143, 160, 178, 195, 213, 230, 248, 265, 282, 299, 316, 333,
    350, 367, 384, 400, 416, 433, 449, 465, 481, 496, 512, 527, 543, 558, 573, 587, 602, 616, 630,
    644, 658, 672, 685, 698, 711, 724, 737, 749, 761, 773, 784, 796, 807, 818, 828, 839, 849, 859,
    868, 878, 887, 896, 904, 912, 920, 928, 935, 943, 949, 956, 962, 968, 974, 979, 984, 989, 994,
    998, 1002, 1005, 1008, 1011, 1014, 1016, 1018, 1020, 1022, 1023, 1023, 1024, 1024,
];

/// Unit vector for an angle in degrees, scaled by 1024.
///
/// Angles grow clockwise on screen (y-down coordinates): 0 points
/// right, 90 points down.
fn unit_vector(deg: u16) -> (i32, i32) {
    let a = (deg % 360) as usize;
    match a {
        0..=90 => (SIN_LUT[90 - a], SIN_LUT[a]),
        91..=180 => (-SIN_LUT[a - 90], SIN_LUT[180 - a]),
        181..=270 => (-SIN_LUT[270 - a], -SIN_LUT[a - 180]),
        _ => (SIN_LUT[a - 270], -SIN_LUT[360 - a]),
    }
}

/// Annular sector between two angles (degrees, clockwise on screen).
///
/// A pixel is drawn when `inner_r^2 <= dist^2 < outer_r^2` and it lies
/// angularly between the two bounding unit vectors. The pure angular
/// test is only valid for spans under a half turn, so wider sectors
/// are split into two passes at the midpoint angle. Start == end
/// degenerates to the single radius ray at that angle.
pub fn sector<P: Plotter>(
    p: &mut P,
    center: Vertex,
    inner_r: u16,
    outer_r: u16,
    start_deg: u16,
    end_deg: u16,
    color: Argb,
) {
    if outer_r == 0 || inner_r >= outer_r {
        return;
    }
    let start = start_deg % 360;
    let end = end_deg % 360;
    let span = (end + 360 - start) % 360;
    if span > 180 {
        let mid = (start + span / 2) % 360;
        sector(p, center, inner_r, outer_r, start, mid, color);
        sector(p, center, inner_r, outer_r, mid, end, color);
        return;
    }
    if span == 0 {
        // Collinear bounding vectors cannot form an angular test;
        // draw the radius ray itself
        let (vx, vy) = unit_vector(start);
        let near = inner_r as i32;
        let far = outer_r as i32 - 1;
        let a = Vertex::new(
            (center.x as i32 + vx * near / 1024) as i16,
            (center.y as i32 + vy * near / 1024) as i16,
        );
        let b = Vertex::new(
            (center.x as i32 + vx * far / 1024) as i16,
            (center.y as i32 + vy * far / 1024) as i16,
        );
        return line(p, a, b, color);
    }

    let (sx, sy) = unit_vector(start);
    let (ex, ey) = unit_vector(end);
    let inner2 = inner_r as i32 * inner_r as i32;
    let outer2 = outer_r as i32 * outer_r as i32;
    let reach = outer_r as i32;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let d2 = dx * dx + dy * dy;
            if d2 < inner2 || d2 >= outer2 {
                continue;
            }
            // Between the bounding vectors, going clockwise from
            // start to end (span <= 180 makes this test sound)
            let after_start = sx * dy - sy * dx >= 0;
            let before_end = ex * dy - ey * dx <= 0;
            if after_start && before_end {
                p.pixel(
                    Vertex::new(
                        (center.x as i32 + dx) as i16,
                        (center.y as i32 + dy) as i16,
                    ),
                    color,
                );
            }
        }
    }
}

/// Circular-ish arc through three control points.
///
/// The curvature sign comes from the cross product of the
/// start-to-control and control-to-end vectors. When those two
/// vectors disagree in direction on either axis the gradient would
/// have to reverse, which three points cannot describe as one
/// monotonic arc; the call then fails closed and draws the straight
/// chord. Collinear points also draw the chord.
pub fn arc<P: Plotter>(p: &mut P, start: Vertex, control: Vertex, end: Vertex, color: Argb) {
    let d1 = control - start;
    let d2 = end - control;
    let curvature = d1.cross(d2);

    let reverses = (d1.x as i32) * (d2.x as i32) < 0 || (d1.y as i32) * (d2.y as i32) < 0;
    if curvature == 0 || reverses {
        return line(p, start, end, color);
    }

    // Quadratic sweep through the control point, integer arithmetic
    // widened to i64 so n^2 cannot overflow
    let n = (d1.x.abs() + d1.y.abs() + d2.x.abs() + d2.y.abs()) as i64;
    let n2 = n * n;
    let mut prev = start;
    for u in 1..=n {
        let a = (n - u) * (n - u);
        let b = 2 * u * (n - u);
        let c = u * u;
        let x = (a * start.x as i64 + b * control.x as i64 + c * end.x as i64) / n2;
        let y = (a * start.y as i64 + b * control.y as i64 + c * end.y as i64) / n2;
        let next = Vertex::new(x as i16, y as i16);
        if next != prev {
            line(p, prev, next, color);
            prev = next;
        }
    }
    if prev != end {
        line(p, prev, end, color);
    }
}
