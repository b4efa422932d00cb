//! ARGB color model and dimming/mixing arithmetic
//!
//! Colors are carried internally as 32-bit ARGB. The alpha channel is
//! inverted with respect to the usual convention: 0 is fully opaque
//! and 255 is fully transparent. Native panel encodings are handled
//! by [`PixelFormat`] in [`native`].

mod clut;
mod native;

pub use clut::ClutCache;
pub use native::PixelFormat;

/// A 32-bit ARGB color value.
///
/// Byte order is alpha, red, green, blue from the most significant
/// byte down. Alpha 0 means opaque and 255 means fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black
    pub const BLACK: Argb = Argb(0x0000_0000);
    /// Opaque white
    pub const WHITE: Argb = Argb(0x00FF_FFFF);
    /// Fully transparent (alpha 255, channels zero)
    pub const TRANSPARENT: Argb = Argb(0xFF00_0000);

    /// Build an opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Argb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build a color from all four channels (alpha 0 = opaque)
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha channel (0 = opaque, 255 = transparent)
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color is fully opaque (alpha 0)
    pub const fn is_opaque(self) -> bool {
        self.a() == 0
    }

    /// Scale each color channel by `level / 255`.
    ///
    /// `level` 255 leaves the color unchanged, 0 dims to black. Alpha
    /// is never touched.
    pub const fn dim(self, level: u8) -> Argb {
        let l = level as u32;
        let r = (self.r() as u32 * l) / 255;
        let g = (self.g() as u32 * l) / 255;
        let b = (self.b() as u32 * l) / 255;
        Argb(((self.a() as u32) << 24) | (r << 16) | (g << 8) | b)
    }

    /// Per-channel weighted average of two colors.
    ///
    /// `weight` 255 yields `fg` exactly, 0 yields `bg` exactly.
    /// Integer arithmetic only, so the result is bit-for-bit
    /// reproducible everywhere. The alpha channel comes from `fg`
    /// unchanged.
    pub const fn mix(fg: Argb, bg: Argb, weight: u8) -> Argb {
        let w = weight as u32;
        let iw = 255 - w;
        let r = (fg.r() as u32 * w + bg.r() as u32 * iw) / 255;
        let g = (fg.g() as u32 * w + bg.g() as u32 * iw) / 255;
        let b = (fg.b() as u32 * w + bg.b() as u32 * iw) / 255;
        Argb(((fg.a() as u32) << 24) | (r << 16) | (g << 8) | b)
    }

    /// Integer luminance of the color channels (0-255).
    ///
    /// Uses the BT.601 weights 77/151/28, summed and shifted, so the
    /// same input always produces the same gray level.
    pub const fn luminance(self) -> u8 {
        ((self.r() as u32 * 77 + self.g() as u32 * 151 + self.b() as u32 * 28) >> 8) as u8
    }
}
