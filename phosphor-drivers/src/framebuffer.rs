//! In-memory frame-buffer panel
//!
//! Backs the logical canvas with an ARGB array in physical scan
//! order. Used for simulated/desktop-emulated panels and as the
//! reference driver in tests: it supports true pixel read-back, so
//! everything the rasterizer emits can be verified against it.

use phosphor_core::color::Argb;
use phosphor_core::geometry::{Orientation, Size, Vertex, Viewport};
use phosphor_core::traits::{PanelDriver, PanelError, PanelInfo};

/// Frame-buffer panel over a `W` x `H` physical pixel array.
///
/// `W` and `H` are the physical panel dimensions; with an
/// axis-swapping orientation the logical canvas is `H` x `W`.
pub struct FrameBufferPanel<const W: usize, const H: usize> {
    /// Physical scan order: `px[row][column]`
    px: [[Argb; W]; H],
    orientation: Orientation,
    viewport: Viewport,
    background: Argb,
    initialized: bool,
    flushes: u32,
}

impl<const W: usize, const H: usize> FrameBufferPanel<W, H> {
    /// Create a panel mounted at the given orientation with a
    /// full-screen viewport.
    pub fn new(orientation: Orientation) -> Self {
        let logical = Self::logical_size(orientation);
        Self {
            px: [[Argb::BLACK; W]; H],
            orientation,
            viewport: Viewport::full(logical),
            background: Argb::BLACK,
            initialized: false,
            flushes: 0,
        }
    }

    /// Restrict the visible window; the viewport is reconciled
    /// against the logical screen bounds.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport.reconciled(Self::logical_size(self.orientation));
        self
    }

    fn logical_size(orientation: Orientation) -> Size {
        if orientation.swaps_axes() {
            Size::new(H as u16, W as u16)
        } else {
            Size::new(W as u16, H as u16)
        }
    }

    fn logical(&self) -> Size {
        Self::logical_size(self.orientation)
    }

    /// Number of flushes performed so far
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Direct read of a physical cell, for presentation layers that
    /// copy the buffer out in scan order
    pub fn physical(&self, x: usize, y: usize) -> Option<Argb> {
        (x < W && y < H).then(|| self.px[y][x])
    }
}

impl<const W: usize, const H: usize> PanelDriver for FrameBufferPanel<W, H> {
    fn info(&self) -> PanelInfo {
        let logical = self.logical();
        PanelInfo {
            name: "framebuffer",
            width: logical.width,
            height: logical.height,
            graphic: true,
        }
    }

    fn init(&mut self) -> Result<(), PanelError> {
        self.initialized = true;
        self.px = [[self.background; W]; H];
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PanelError> {
        self.initialized = false;
        Ok(())
    }

    fn clear(&mut self, background: Argb) {
        self.background = background;
        self.px = [[background; W]; H];
    }

    fn set_pixel(&mut self, v: Vertex, color: Argb) {
        if !self.logical().contains(v) || !self.viewport.contains(v) {
            return;
        }
        let p = self.orientation.to_physical(v, self.logical());
        self.px[p.y as usize][p.x as usize] = color;
    }

    fn get_pixel(&self, v: Vertex) -> Argb {
        if !self.logical().contains(v) {
            return self.background;
        }
        let p = self.orientation.to_physical(v, self.logical());
        self.px[p.y as usize][p.x as usize]
    }

    fn flush(&mut self) -> Result<(), PanelError> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phosphor_core::pipeline::Canvas;

    const RED: Argb = Argb::rgb(255, 0, 0);

    #[test]
    fn reports_logical_dimensions() {
        let flat: FrameBufferPanel<32, 16> = FrameBufferPanel::new(Orientation::Rot0);
        assert_eq!(flat.info().width, 32);
        assert_eq!(flat.info().height, 16);

        let turned: FrameBufferPanel<32, 16> = FrameBufferPanel::new(Orientation::Rot90);
        assert_eq!(turned.info().width, 16);
        assert_eq!(turned.info().height, 32);
    }

    #[test]
    fn rot90_lands_in_physical_scan_order() {
        let mut panel: FrameBufferPanel<8, 4> = FrameBufferPanel::new(Orientation::Rot90);
        // Logical canvas is 4x8; logical origin maps to physical (7,0)
        panel.set_pixel(Vertex::new(0, 0), RED);
        assert_eq!(panel.physical(7, 0), Some(RED));
        assert_eq!(panel.get_pixel(Vertex::new(0, 0)), RED);
    }

    #[test]
    fn every_orientation_keeps_edge_pixels() {
        for orientation in Orientation::ALL {
            let mut panel: FrameBufferPanel<8, 4> = FrameBufferPanel::new(orientation);
            let info = panel.info();
            let corner = Vertex::new(info.width as i16 - 1, info.height as i16 - 1);
            panel.set_pixel(corner, RED);
            assert_eq!(
                panel.get_pixel(corner),
                RED,
                "{orientation:?} corner round trip"
            );
        }
    }

    #[test]
    fn out_of_bounds_is_dropped_silently() {
        let mut panel: FrameBufferPanel<8, 4> = FrameBufferPanel::new(Orientation::Rot0);
        panel.set_pixel(Vertex::new(8, 0), RED);
        panel.set_pixel(Vertex::new(0, -1), RED);
        for y in 0..4usize {
            for x in 0..8usize {
                assert_eq!(panel.physical(x, y), Some(Argb::BLACK));
            }
        }
    }

    #[test]
    fn viewport_masks_invisible_pixels() {
        let mut panel: FrameBufferPanel<8, 8> = FrameBufferPanel::new(Orientation::Rot0)
            .with_viewport(Viewport::new(4, 4, 2, 2));
        panel.set_pixel(Vertex::new(0, 0), RED);
        panel.set_pixel(Vertex::new(3, 3), RED);
        assert_eq!(panel.get_pixel(Vertex::new(0, 0)), Argb::BLACK);
        assert_eq!(panel.get_pixel(Vertex::new(3, 3)), RED);
    }

    /// Full drawing-contract scenario against a real driver: a
    /// full-screen box reads back red everywhere, an inset box leaves
    /// background corners.
    #[test]
    fn canvas_box_scenario_end_to_end() {
        let panel: FrameBufferPanel<10, 10> = FrameBufferPanel::new(Orientation::Rot0);
        let mut canvas = Canvas::new(panel);
        canvas.set_color(RED);
        canvas
            .fill_box(Vertex::new(0, 0), Vertex::new(9, 9))
            .unwrap();
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.get_pixel(Vertex::new(x, y)), RED);
            }
        }

        canvas.clear().unwrap();
        canvas
            .fill_box(Vertex::new(2, 2), Vertex::new(7, 7))
            .unwrap();
        assert_eq!(canvas.get_pixel(Vertex::new(0, 0)), Argb::BLACK);
        assert_eq!(canvas.get_pixel(Vertex::new(2, 2)), RED);
    }

    #[test]
    fn drawing_on_a_rotated_panel_is_orientation_blind() {
        // The same logical line must read back identically no matter
        // how the panel is mounted
        for orientation in Orientation::ALL {
            let panel: FrameBufferPanel<10, 10> = FrameBufferPanel::new(orientation);
            let mut canvas = Canvas::new(panel);
            canvas.set_color(RED);
            canvas.line(Vertex::new(0, 0), Vertex::new(9, 3)).unwrap();
            assert_eq!(
                canvas.get_pixel(Vertex::new(0, 0)),
                RED,
                "{orientation:?}"
            );
            assert_eq!(
                canvas.get_pixel(Vertex::new(9, 3)),
                RED,
                "{orientation:?}"
            );
        }
    }
}
