//! The drawing context
//!
//! A [`Canvas`] owns a panel driver plus all mutable drawing state:
//! current draw and background colors, the anti-aliasing flag, the
//! text cursor, an optional clip rectangle, the present-lock counter
//! and the shader chain. Primitives flush immediately while the
//! present-lock counter is zero; `hold`/`release` pairs batch any
//! number of primitives into a single flush.

use super::shader::Shader;
use super::MAX_SHADERS;
use crate::color::Argb;
use crate::geometry::{Rect, Vertex};
use crate::raster;
use crate::raster::{Plotter, Quadrant};
use crate::traits::{PanelDriver, PanelError, PanelInfo};
use heapless::Vec;

/// Pixel sink routing writes through the shader chain and clip
/// rectangle into the driver.
struct PixelSink<'s, 'a, D: PanelDriver> {
    driver: &'s mut D,
    shaders: &'s mut [&'a mut (dyn Shader + 'a)],
    clip: Option<Rect>,
}

impl<D: PanelDriver> Plotter for PixelSink<'_, '_, D> {
    fn pixel(&mut self, v: Vertex, color: Argb) {
        let mut v = v;
        let mut color = color;
        for stage in self.shaders.iter_mut() {
            match stage.shade(v, color) {
                Some((nv, nc)) => {
                    v = nv;
                    color = nc;
                }
                None => return,
            }
        }
        if let Some(clip) = self.clip {
            if !clip.contains(v) {
                return;
            }
        }
        self.driver.set_pixel(v, color);
    }
}

/// Drawing context over a panel driver.
pub struct Canvas<'a, D: PanelDriver> {
    driver: D,
    color: Argb,
    background: Argb,
    anti_alias: bool,
    cursor: Vertex,
    clip: Option<Rect>,
    hold_count: u16,
    shaders: Vec<&'a mut (dyn Shader + 'a), MAX_SHADERS>,
}

impl<'a, D: PanelDriver> Canvas<'a, D> {
    /// Wrap a driver with white-on-black drawing state
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            color: Argb::WHITE,
            background: Argb::BLACK,
            anti_alias: false,
            cursor: Vertex::new(0, 0),
            clip: None,
            hold_count: 0,
            shaders: Vec::new(),
        }
    }

    pub fn info(&self) -> PanelInfo {
        self.driver.info()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Unwrap the canvas back into its driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    pub fn set_color(&mut self, color: Argb) {
        self.color = color;
    }

    pub fn color(&self) -> Argb {
        self.color
    }

    pub fn set_background(&mut self, background: Argb) {
        self.background = background;
    }

    pub fn background(&self) -> Argb {
        self.background
    }

    pub fn set_anti_alias(&mut self, on: bool) {
        self.anti_alias = on;
    }

    /// Text cursor for alpha-numeric rendering
    pub fn set_cursor(&mut self, cursor: Vertex) {
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> Vertex {
        self.cursor
    }

    /// Clip all further pixel writes to a rectangle
    pub fn set_clip(&mut self, clip: Rect) {
        self.clip = Some(clip);
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Append a post-processing stage behind the existing chain.
    ///
    /// Fails when [`MAX_SHADERS`] stages are already chained.
    pub fn push_shader(
        &mut self,
        stage: &'a mut (dyn Shader + 'a),
    ) -> Result<(), &'a mut (dyn Shader + 'a)> {
        self.shaders.push(stage)
    }

    /// Drop the whole shader chain
    pub fn clear_shaders(&mut self) {
        self.shaders.clear();
    }

    /// Defer flushing until the matching `release`.
    ///
    /// Holds nest; only the outermost release flushes.
    pub fn hold(&mut self) {
        self.hold_count += 1;
    }

    /// Undo one `hold`; flushes exactly when the counter reaches zero.
    ///
    /// An unmatched release is a no-op, never an error.
    pub fn release(&mut self) -> Result<(), PanelError> {
        match self.hold_count {
            0 => Ok(()),
            1 => {
                self.hold_count = 0;
                self.driver.flush()
            }
            _ => {
                self.hold_count -= 1;
                Ok(())
            }
        }
    }

    /// Read one pixel back from the driver.
    ///
    /// On write-only transports this is the driver's placeholder
    /// value; treat it as unknown.
    pub fn get_pixel(&self, v: Vertex) -> Argb {
        self.driver.get_pixel(v)
    }

    fn present(&mut self) -> Result<(), PanelError> {
        if self.hold_count == 0 {
            self.driver.flush()
        } else {
            Ok(())
        }
    }

    /// Whether driver-accelerated primitives may bypass the per-pixel
    /// path
    fn direct(&self) -> bool {
        self.shaders.is_empty() && self.clip.is_none()
    }

    fn sink(&mut self) -> PixelSink<'_, 'a, D> {
        PixelSink {
            driver: &mut self.driver,
            shaders: &mut self.shaders,
            clip: self.clip,
        }
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) -> Result<(), PanelError> {
        let bg = self.background;
        self.driver.clear(bg);
        self.present()
    }

    /// Plot a single point in the current color
    pub fn plot(&mut self, v: Vertex) -> Result<(), PanelError> {
        let c = self.color;
        self.sink().pixel(v, c);
        self.present()
    }

    /// Line between two vertices; anti-aliased when the flag is set
    pub fn line(&mut self, a: Vertex, b: Vertex) -> Result<(), PanelError> {
        let (fg, bg) = (self.color, self.background);
        if self.anti_alias {
            raster::aa_line(&mut self.sink(), a, b, fg, bg);
        } else {
            raster::line(&mut self.sink(), a, b, fg);
        }
        self.present()
    }

    /// Horizontal line, driver-accelerated when possible
    pub fn hline(&mut self, y: i16, x0: i16, x1: i16) -> Result<(), PanelError> {
        let c = self.color;
        if self.direct() {
            self.driver.draw_hline(y, x0, x1, c);
        } else {
            raster::hline(&mut self.sink(), y, x0, x1, c);
        }
        self.present()
    }

    /// Vertical line, driver-accelerated when possible
    pub fn vline(&mut self, x: i16, y0: i16, y1: i16) -> Result<(), PanelError> {
        let c = self.color;
        if self.direct() {
            self.driver.draw_vline(x, y0, y1, c);
        } else {
            raster::vline(&mut self.sink(), x, y0, y1, c);
        }
        self.present()
    }

    /// Line of the given pixel width
    pub fn thick_line(&mut self, a: Vertex, b: Vertex, width: u8) -> Result<(), PanelError> {
        let c = self.color;
        raster::thick_line(&mut self.sink(), a, b, width, c);
        self.present()
    }

    /// Rectangle frame between two opposite corners
    pub fn rect(&mut self, a: Vertex, b: Vertex) -> Result<(), PanelError> {
        let c = self.color;
        raster::rect(&mut self.sink(), a, b, c);
        self.present()
    }

    /// Solid box, driver-accelerated when possible
    pub fn fill_box(&mut self, a: Vertex, b: Vertex) -> Result<(), PanelError> {
        let c = self.color;
        if self.direct() {
            self.driver.fill_box(a, b, c);
        } else {
            raster::fill_box(&mut self.sink(), a, b, c);
        }
        self.present()
    }

    /// Closed polygon outline
    pub fn polygon(&mut self, vertices: &[Vertex]) -> Result<(), PanelError> {
        let c = self.color;
        raster::polygon(&mut self.sink(), vertices, c);
        self.present()
    }

    /// Triangle outline
    pub fn triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) -> Result<(), PanelError> {
        let col = self.color;
        raster::triangle(&mut self.sink(), a, b, c, col);
        self.present()
    }

    /// Solid triangle
    pub fn fill_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) -> Result<(), PanelError> {
        let col = self.color;
        raster::fill_triangle(&mut self.sink(), a, b, c, col);
        self.present()
    }

    /// Circle outline
    pub fn circle(&mut self, center: Vertex, r: u16) -> Result<(), PanelError> {
        let c = self.color;
        raster::circle(&mut self.sink(), center, r, c);
        self.present()
    }

    /// Filled disc
    pub fn disc(&mut self, center: Vertex, r: u16) -> Result<(), PanelError> {
        let c = self.color;
        raster::disc(&mut self.sink(), center, r, c);
        self.present()
    }

    /// Quarter-disc fill
    pub fn disc_quadrant(
        &mut self,
        center: Vertex,
        r: u16,
        quadrant: Quadrant,
    ) -> Result<(), PanelError> {
        let c = self.color;
        raster::disc_quadrant(&mut self.sink(), center, r, quadrant, c);
        self.present()
    }

    /// Annular sector between two angles (degrees, clockwise)
    pub fn sector(
        &mut self,
        center: Vertex,
        inner_r: u16,
        outer_r: u16,
        start_deg: u16,
        end_deg: u16,
    ) -> Result<(), PanelError> {
        let c = self.color;
        raster::sector(&mut self.sink(), center, inner_r, outer_r, start_deg, end_deg, c);
        self.present()
    }

    /// Arc through three control points
    pub fn arc(&mut self, start: Vertex, control: Vertex, end: Vertex) -> Result<(), PanelError> {
        let c = self.color;
        raster::arc(&mut self.sink(), start, control, end, c);
        self.present()
    }
}
