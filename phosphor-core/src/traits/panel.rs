//! Panel driver capability contract
//!
//! Every concrete panel implements the mandatory set; the accelerated
//! primitives have default bodies synthesized from `set_pixel` and
//! `get_pixel`, so a driver only overrides the operations its hardware
//! can genuinely do faster. The rasterizer and the drawing context
//! operate exclusively through this trait.

use crate::color::Argb;
use crate::geometry::Vertex;

/// Errors a panel driver can report.
///
/// Pixel operations never fail; only lifecycle and transport-facing
/// operations carry a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Transport-level failure (bad ack, short read)
    Transport,
    /// The bounded wait for a response elapsed
    Timeout,
    /// Operation before `init` or after `shutdown`
    NotInitialized,
    /// The panel cannot perform the requested operation
    Unsupported,
}

/// Static identity of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelInfo {
    /// Driver name, e.g. "framebuffer" or "serial-mono"
    pub name: &'static str,
    /// Logical canvas width in pixels (columns for text panels)
    pub width: u16,
    /// Logical canvas height in pixels (rows for text panels)
    pub height: u16,
    /// Graphic panel (pixel-addressable) vs. character panel
    pub graphic: bool,
}

/// The capability set every concrete panel driver satisfies.
///
/// `set_pixel` silently ignores coordinates outside the screen; it
/// never errors and never partially writes. `get_pixel` on a
/// write-only transport returns an implementation-defined placeholder
/// the driver chooses at construction; callers must treat that value
/// as unknown, not as black.
pub trait PanelDriver {
    /// Identity and dimensions of this panel
    fn info(&self) -> PanelInfo;

    /// Bring the hardware up
    fn init(&mut self) -> Result<(), PanelError>;

    /// Shut the hardware down
    fn shutdown(&mut self) -> Result<(), PanelError>;

    /// Reset every pixel to the background color
    fn clear(&mut self, background: Argb);

    /// Write one logical pixel; out-of-bounds writes are dropped
    fn set_pixel(&mut self, v: Vertex, color: Argb);

    /// Read one logical pixel back, or the driver's placeholder when
    /// the transport cannot read
    fn get_pixel(&self, v: Vertex) -> Argb;

    /// Push buffered pixels to the hardware
    fn flush(&mut self) -> Result<(), PanelError>;

    /// Accelerated horizontal line; generic fallback via `set_pixel`
    fn draw_hline(&mut self, y: i16, x0: i16, x1: i16, color: Argb) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.set_pixel(Vertex::new(x, y), color);
        }
    }

    /// Accelerated vertical line; generic fallback via `set_pixel`
    fn draw_vline(&mut self, x: i16, y0: i16, y1: i16, color: Argb) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in lo..=hi {
            self.set_pixel(Vertex::new(x, y), color);
        }
    }

    /// Accelerated solid box; generic fallback via `draw_hline`
    fn fill_box(&mut self, a: Vertex, b: Vertex, color: Argb) {
        let lo = a.component_min(b);
        let hi = a.component_max(b);
        for y in lo.y..=hi.y {
            self.draw_hline(y, lo.x, hi.x, color);
        }
    }

    /// Move a rectangular region to a new top-left corner.
    ///
    /// The fallback copies through `get_pixel`, so on write-only
    /// transports the destination holds placeholder values; such
    /// drivers should override this or leave it unused.
    fn move_region(&mut self, src_min: Vertex, src_max: Vertex, dst_min: Vertex) {
        let lo = src_min.component_min(src_max);
        let hi = src_min.component_max(src_max);
        let w = hi.x - lo.x;
        let h = hi.y - lo.y;
        // Walk away from the destination so overlapping regions copy
        // each source pixel before it is overwritten
        let down = dst_min.y > lo.y;
        let right = dst_min.x > lo.x;
        let mut dy = 0;
        while dy <= h {
            let y = if down { h - dy } else { dy };
            let mut dx = 0;
            while dx <= w {
                let x = if right { w - dx } else { dx };
                let c = self.get_pixel(Vertex::new(lo.x + x, lo.y + y));
                self.set_pixel(Vertex::new(dst_min.x + x, dst_min.y + y), c);
                dx += 1;
            }
            dy += 1;
        }
    }
}
