//! Native panel pixel encodings
//!
//! Conversion between the internal ARGB model and the wire encodings
//! panel firmware actually consumes. Narrowing always keeps the most
//! significant bits of each 8-bit channel (truncation, never
//! rounding); widening replicates the kept high bits into the vacated
//! low bits. Together that makes every narrowing a stable projection:
//! narrow-widen-narrow returns the same native value, so conversions
//! are lossy but deterministic.

use super::Argb;

/// Native pixel encodings understood by panel drivers.
///
/// Bit layouts are fixed per format to match existing panel firmware,
/// e.g. `Rgb565` packs red in the top 5 bits, green in the middle 6,
/// blue in the low 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// 1-bit luminance
    Gray1,
    /// 2-bit luminance
    Gray2,
    /// 4-bit luminance
    Gray4,
    /// 8-bit luminance
    Gray8,
    /// 8-bit color-lookup index (reserved, unsupported)
    Clut8,
    /// 8-bit RGB, 3-3-2
    Rgb332,
    /// 15-bit RGB, 5-5-5
    Rgb555,
    /// 16-bit RGB, 5-6-5
    Rgb565,
    /// 18-bit RGB, 6-6-6
    Rgb666,
    /// 24-bit RGB, 8-8-8
    Rgb888,
    /// 32-bit ARGB passthrough
    Argb8888,
}

impl PixelFormat {
    /// Bits one native pixel occupies on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Gray1 => 1,
            PixelFormat::Gray2 => 2,
            PixelFormat::Gray4 => 4,
            PixelFormat::Gray8 | PixelFormat::Clut8 | PixelFormat::Rgb332 => 8,
            PixelFormat::Rgb555 => 15,
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb666 => 18,
            PixelFormat::Rgb888 => 24,
            PixelFormat::Argb8888 => 32,
        }
    }

    /// Whether the format carries color rather than luminance
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            PixelFormat::Rgb332
                | PixelFormat::Rgb555
                | PixelFormat::Rgb565
                | PixelFormat::Rgb666
                | PixelFormat::Rgb888
                | PixelFormat::Argb8888
        )
    }
}

/// Replicate the top `bits` bits of a channel value into a full byte
const fn widen(v: u32, bits: u8) -> u32 {
    match bits {
        1 => v * 0xFF,
        2 => v * 0x55,
        3 => (v << 5) | (v << 2) | (v >> 1),
        4 => v * 0x11,
        5 => (v << 3) | (v >> 2),
        6 => (v << 2) | (v >> 4),
        _ => v,
    }
}

impl Argb {
    /// Convert to the native encoding of `format`.
    ///
    /// Total over the input domain; the alpha channel is dropped by
    /// every format except [`PixelFormat::Argb8888`].
    pub const fn to_native(self, format: PixelFormat) -> u32 {
        let r = self.r() as u32;
        let g = self.g() as u32;
        let b = self.b() as u32;
        match format {
            PixelFormat::Gray1 => (self.luminance() >> 7) as u32,
            PixelFormat::Gray2 => (self.luminance() >> 6) as u32,
            PixelFormat::Gray4 => (self.luminance() >> 4) as u32,
            PixelFormat::Gray8 => self.luminance() as u32,
            // Reserved: no palette model exists yet
            PixelFormat::Clut8 => 0,
            PixelFormat::Rgb332 => ((r >> 5) << 5) | ((g >> 5) << 2) | (b >> 6),
            PixelFormat::Rgb555 => ((r >> 3) << 10) | ((g >> 3) << 5) | (b >> 3),
            PixelFormat::Rgb565 => ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3),
            PixelFormat::Rgb666 => ((r >> 2) << 12) | ((g >> 2) << 6) | (b >> 2),
            PixelFormat::Rgb888 => (r << 16) | (g << 8) | b,
            PixelFormat::Argb8888 => self.0,
        }
    }

    /// Widen a native value of `format` back to ARGB.
    ///
    /// The result is opaque (alpha 0) for every format except
    /// [`PixelFormat::Argb8888`], which passes alpha through.
    pub const fn from_native(format: PixelFormat, native: u32) -> Argb {
        match format {
            PixelFormat::Gray1 => Argb::gray(widen(native & 0x1, 1)),
            PixelFormat::Gray2 => Argb::gray(widen(native & 0x3, 2)),
            PixelFormat::Gray4 => Argb::gray(widen(native & 0xF, 4)),
            PixelFormat::Gray8 => Argb::gray(native & 0xFF),
            // Reserved: indices cannot be resolved without a palette
            PixelFormat::Clut8 => Argb::BLACK,
            PixelFormat::Rgb332 => Argb::from_channels(
                widen((native >> 5) & 0x7, 3),
                widen((native >> 2) & 0x7, 3),
                widen(native & 0x3, 2),
            ),
            PixelFormat::Rgb555 => Argb::from_channels(
                widen((native >> 10) & 0x1F, 5),
                widen((native >> 5) & 0x1F, 5),
                widen(native & 0x1F, 5),
            ),
            PixelFormat::Rgb565 => Argb::from_channels(
                widen((native >> 11) & 0x1F, 5),
                widen((native >> 5) & 0x3F, 6),
                widen(native & 0x1F, 5),
            ),
            PixelFormat::Rgb666 => Argb::from_channels(
                widen((native >> 12) & 0x3F, 6),
                widen((native >> 6) & 0x3F, 6),
                widen(native & 0x3F, 6),
            ),
            PixelFormat::Rgb888 => Argb(native & 0x00FF_FFFF),
            PixelFormat::Argb8888 => Argb(native),
        }
    }

    const fn gray(level: u32) -> Argb {
        Argb((level << 16) | (level << 8) | level)
    }

    const fn from_channels(r: u32, g: u32, b: u32) -> Argb {
        Argb((r << 16) | (g << 8) | b)
    }
}
