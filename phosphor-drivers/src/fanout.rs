//! Panel fan-out
//!
//! Composes several panels into one logical surface. Each member is
//! registered with the offset of its top-left corner in the composite
//! coordinate space; every capability call is translated into member
//! coordinates and forwarded to the members it touches.
//!
//! Fan-out offers no cross-member atomicity: a failing member leaves
//! earlier members already updated.

use heapless::Vec;
use phosphor_core::color::Argb;
use phosphor_core::geometry::{Rect, Size, Vertex};
use phosphor_core::traits::{PanelDriver, PanelError, PanelInfo};

/// Maximum number of member panels
pub const MAX_PANELS: usize = 4;

struct Member<'a> {
    offset: Vertex,
    panel: &'a mut dyn PanelDriver,
}

impl Member<'_> {
    fn bounds(&self) -> Rect {
        let info = self.panel.info();
        Rect::from_corners(
            self.offset,
            self.offset
                .offset(info.width as i16 - 1, info.height as i16 - 1),
        )
    }
}

/// Composite driver over up to [`MAX_PANELS`] member panels.
pub struct FanOutPanel<'a> {
    members: Vec<Member<'a>, MAX_PANELS>,
    size: Size,
}

impl<'a> FanOutPanel<'a> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            size: Size::new(0, 0),
        }
    }

    /// Register a member whose top-left corner sits at `offset` in the
    /// composite space. The composite grows to the union bounding box.
    ///
    /// Returns the panel back when the member table is full.
    pub fn attach(
        &mut self,
        offset: Vertex,
        panel: &'a mut dyn PanelDriver,
    ) -> Result<(), &'a mut dyn PanelDriver> {
        let info = panel.info();
        let right = offset.x as i32 + info.width as i32;
        let bottom = offset.y as i32 + info.height as i32;
        if let Err(rejected) = self.members.push(Member { offset, panel }) {
            return Err(rejected.panel);
        }
        self.size = Size::new(
            (self.size.width as i32).max(right) as u16,
            (self.size.height as i32).max(bottom) as u16,
        );
        Ok(())
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl Default for FanOutPanel<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelDriver for FanOutPanel<'_> {
    fn info(&self) -> PanelInfo {
        let graphic = self.members.iter().all(|m| m.panel.info().graphic);
        PanelInfo {
            name: "fan-out",
            width: self.size.width,
            height: self.size.height,
            graphic,
        }
    }

    fn init(&mut self) -> Result<(), PanelError> {
        for m in self.members.iter_mut() {
            m.panel.init()?;
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PanelError> {
        for m in self.members.iter_mut() {
            m.panel.shutdown()?;
        }
        Ok(())
    }

    fn clear(&mut self, background: Argb) {
        for m in self.members.iter_mut() {
            m.panel.clear(background);
        }
    }

    fn set_pixel(&mut self, v: Vertex, color: Argb) {
        for m in self.members.iter_mut() {
            if m.bounds().contains(v) {
                let local = Vertex::new(v.x - m.offset.x, v.y - m.offset.y);
                m.panel.set_pixel(local, color);
            }
        }
    }

    fn get_pixel(&self, v: Vertex) -> Argb {
        // First member containing the point wins on overlap
        for m in self.members.iter() {
            if m.bounds().contains(v) {
                let local = Vertex::new(v.x - m.offset.x, v.y - m.offset.y);
                return m.panel.get_pixel(local);
            }
        }
        Argb::BLACK
    }

    fn flush(&mut self) -> Result<(), PanelError> {
        for m in self.members.iter_mut() {
            m.panel.flush()?;
        }
        Ok(())
    }

    fn draw_hline(&mut self, y: i16, x0: i16, x1: i16, color: Argb) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for m in self.members.iter_mut() {
            let b = m.bounds();
            if y < b.min.y || y > b.max.y {
                continue;
            }
            let cx0 = lo.max(b.min.x);
            let cx1 = hi.min(b.max.x);
            if cx0 > cx1 {
                continue;
            }
            m.panel
                .draw_hline(y - m.offset.y, cx0 - m.offset.x, cx1 - m.offset.x, color);
        }
    }

    fn draw_vline(&mut self, x: i16, y0: i16, y1: i16, color: Argb) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for m in self.members.iter_mut() {
            let b = m.bounds();
            if x < b.min.x || x > b.max.x {
                continue;
            }
            let cy0 = lo.max(b.min.y);
            let cy1 = hi.min(b.max.y);
            if cy0 > cy1 {
                continue;
            }
            m.panel
                .draw_vline(x - m.offset.x, cy0 - m.offset.y, cy1 - m.offset.y, color);
        }
    }

    fn fill_box(&mut self, a: Vertex, b: Vertex, color: Argb) {
        let lo = a.component_min(b);
        let hi = a.component_max(b);
        for m in self.members.iter_mut() {
            let mb = m.bounds();
            let clipped_lo = lo.component_max(mb.min);
            let clipped_hi = hi.component_min(mb.max);
            if clipped_lo.x > clipped_hi.x || clipped_lo.y > clipped_hi.y {
                continue;
            }
            m.panel.fill_box(
                Vertex::new(clipped_lo.x - m.offset.x, clipped_lo.y - m.offset.y),
                Vertex::new(clipped_hi.x - m.offset.x, clipped_hi.y - m.offset.y),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBufferPanel;
    use phosphor_core::geometry::Orientation;
    use phosphor_core::pipeline::Canvas;

    #[test]
    fn composite_size_is_the_union_bounding_box() {
        let mut left = FrameBufferPanel::<8, 8>::new(Orientation::Rot0);
        let mut right = FrameBufferPanel::<8, 8>::new(Orientation::Rot0);
        let mut fan = FanOutPanel::new();
        fan.attach(Vertex::new(0, 0), &mut left).ok().unwrap();
        fan.attach(Vertex::new(8, 0), &mut right).ok().unwrap();

        let info = fan.info();
        assert_eq!((info.width, info.height), (16, 8));
        assert_eq!(fan.member_count(), 2);
    }

    #[test]
    fn pixels_route_to_the_containing_member() {
        let mut left = FrameBufferPanel::<8, 8>::new(Orientation::Rot0);
        let mut right = FrameBufferPanel::<8, 8>::new(Orientation::Rot0);
        {
            let mut fan = FanOutPanel::new();
            fan.attach(Vertex::new(0, 0), &mut left).ok().unwrap();
            fan.attach(Vertex::new(8, 0), &mut right).ok().unwrap();
            fan.init().unwrap();

            fan.set_pixel(Vertex::new(3, 2), Argb::WHITE);
            fan.set_pixel(Vertex::new(11, 5), Argb::WHITE);
            assert_eq!(fan.get_pixel(Vertex::new(3, 2)), Argb::WHITE);
            assert_eq!(fan.get_pixel(Vertex::new(11, 5)), Argb::WHITE);
        }
        assert_eq!(left.get_pixel(Vertex::new(3, 2)), Argb::WHITE);
        assert_eq!(right.get_pixel(Vertex::new(3, 5)), Argb::WHITE);
        // Nothing leaked to the other member
        assert_eq!(right.get_pixel(Vertex::new(3, 2)), Argb::BLACK);
    }

    #[test]
    fn hline_splits_across_the_seam() {
        let mut left = FrameBufferPanel::<8, 4>::new(Orientation::Rot0);
        let mut right = FrameBufferPanel::<8, 4>::new(Orientation::Rot0);
        {
            let mut fan = FanOutPanel::new();
            fan.attach(Vertex::new(0, 0), &mut left).ok().unwrap();
            fan.attach(Vertex::new(8, 0), &mut right).ok().unwrap();
            fan.draw_hline(1, 5, 10, Argb::WHITE);
        }
        for x in 5..8 {
            assert_eq!(left.get_pixel(Vertex::new(x, 1)), Argb::WHITE);
        }
        for x in 0..3 {
            assert_eq!(right.get_pixel(Vertex::new(x, 1)), Argb::WHITE);
        }
        assert_eq!(left.get_pixel(Vertex::new(4, 1)), Argb::BLACK);
        assert_eq!(right.get_pixel(Vertex::new(3, 1)), Argb::BLACK);
    }

    #[test]
    fn fill_box_clips_per_member() {
        let mut top = FrameBufferPanel::<8, 4>::new(Orientation::Rot0);
        let mut bottom = FrameBufferPanel::<8, 4>::new(Orientation::Rot0);
        {
            let mut fan = FanOutPanel::new();
            fan.attach(Vertex::new(0, 0), &mut top).ok().unwrap();
            fan.attach(Vertex::new(0, 4), &mut bottom).ok().unwrap();
            fan.fill_box(Vertex::new(2, 2), Vertex::new(5, 5), Argb::WHITE);
        }
        assert_eq!(top.get_pixel(Vertex::new(2, 3)), Argb::WHITE);
        assert_eq!(bottom.get_pixel(Vertex::new(5, 1)), Argb::WHITE);
        assert_eq!(top.get_pixel(Vertex::new(2, 1)), Argb::BLACK);
        assert_eq!(bottom.get_pixel(Vertex::new(5, 2)), Argb::BLACK);
    }

    #[test]
    fn canvas_draws_across_a_composite() {
        let mut left = FrameBufferPanel::<4, 8>::new(Orientation::Rot0);
        let mut right = FrameBufferPanel::<4, 8>::new(Orientation::Rot0);
        {
            let mut fan = FanOutPanel::new();
            fan.attach(Vertex::new(0, 0), &mut left).ok().unwrap();
            fan.attach(Vertex::new(4, 0), &mut right).ok().unwrap();
            fan.init().unwrap();
            let mut canvas = Canvas::new(fan);
            canvas.set_color(Argb::WHITE);
            canvas.line(Vertex::new(0, 0), Vertex::new(7, 7)).unwrap();
        }
        assert_eq!(left.get_pixel(Vertex::new(0, 0)), Argb::WHITE);
        assert_eq!(left.get_pixel(Vertex::new(3, 3)), Argb::WHITE);
        assert_eq!(right.get_pixel(Vertex::new(0, 4)), Argb::WHITE);
        assert_eq!(right.get_pixel(Vertex::new(3, 7)), Argb::WHITE);
    }
}
