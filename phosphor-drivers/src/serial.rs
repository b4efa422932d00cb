//! Serial-attached mono panel
//!
//! Drives a 1-bpp panel behind a byte-oriented serial link. Pixels
//! are packed into a local shadow buffer; `flush` ships the whole
//! buffer through the block handshake, one acknowledged frame at a
//! time. The transport is write-only: `get_pixel` returns the
//! configurable placeholder from [`SerialPanelConfig`], which callers
//! must treat as unknown.
//!
//! Controller bring-up stays opaque to this driver: whatever register
//! sequence a concrete panel needs is pushed through
//! [`SerialPanel::write_command`] as raw bytes.

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;
use phosphor_core::color::{Argb, PixelFormat};
use phosphor_core::geometry::{Orientation, Size, Vertex};
use phosphor_core::traits::{PanelDriver, PanelError, PanelInfo};
use phosphor_protocol::{BlockWriter, LinkError, SerialLink};

/// Shadow buffer capacity in bytes (1 bpp: 4096 bytes = 32768 pixels)
pub const MAX_SHADOW: usize = 4096;

/// Command bytes understood by the panel firmware
mod cmd {
    /// Wake the controller and set dimensions
    pub const INIT: u8 = 0x10;
    /// Enter low-power state
    pub const SLEEP: u8 = 0x11;
    /// Full-buffer blit; followed by packed rows
    pub const BLIT: u8 = 0x20;
}

/// Construction-time configuration of a serial panel.
#[derive(Debug, Clone, Copy)]
pub struct SerialPanelConfig {
    /// Physical panel width in pixels
    pub width: u16,
    /// Physical panel height in pixels
    pub height: u16,
    /// Mounting orientation
    pub orientation: Orientation,
    /// Value `get_pixel` reports on this write-only transport
    pub readback: Argb,
    /// Device's maximum handshake block size in bytes
    pub max_block: usize,
    /// Acknowledgement timeout per block
    pub timeout_ms: u32,
}

impl Default for SerialPanelConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            orientation: Orientation::Rot0,
            readback: Argb::BLACK,
            max_block: 64,
            timeout_ms: 100,
        }
    }
}

/// Mono panel behind an acknowledged serial link.
pub struct SerialPanel<L: SerialLink> {
    link: L,
    writer: BlockWriter,
    config: SerialPanelConfig,
    /// Packed 1-bpp shadow, physical scan order, one stride per row
    shadow: Vec<u8, MAX_SHADOW>,
    stride: usize,
    initialized: bool,
}

impl<L: SerialLink> SerialPanel<L> {
    /// Wrap a serial link.
    ///
    /// Returns `None` when the configured dimensions exceed the
    /// shadow buffer capacity.
    pub fn new(link: L, config: SerialPanelConfig) -> Option<Self> {
        let stride = (config.width as usize).div_ceil(8);
        let len = stride * config.height as usize;
        if len > MAX_SHADOW {
            return None;
        }
        let mut shadow = Vec::new();
        shadow.resize(len, 0).ok()?;
        Some(Self {
            writer: BlockWriter::new(config.max_block, config.timeout_ms),
            link,
            config,
            shadow,
            stride,
            initialized: false,
        })
    }

    fn logical(&self) -> Size {
        if self.config.orientation.swaps_axes() {
            Size::new(self.config.height, self.config.width)
        } else {
            Size::new(self.config.width, self.config.height)
        }
    }

    /// Push an opaque controller command through the handshake.
    ///
    /// Used by bring-up code for register sequences this driver does
    /// not interpret.
    pub fn write_command(&mut self, bytes: &[u8]) -> Result<(), PanelError> {
        self.writer
            .send(&mut self.link, bytes)
            .map_err(map_link_error)
    }

    /// Access the packed shadow buffer (physical scan order)
    pub fn shadow(&self) -> &[u8] {
        &self.shadow
    }
}

fn map_link_error(e: LinkError) -> PanelError {
    match e {
        LinkError::Timeout => PanelError::Timeout,
        LinkError::ShortRead | LinkError::Nak(_) | LinkError::Transport => PanelError::Transport,
    }
}

impl<L: SerialLink> PanelDriver for SerialPanel<L> {
    fn info(&self) -> PanelInfo {
        let logical = self.logical();
        PanelInfo {
            name: "serial-mono",
            width: logical.width,
            height: logical.height,
            graphic: true,
        }
    }

    fn init(&mut self) -> Result<(), PanelError> {
        let w = self.config.width.to_le_bytes();
        let h = self.config.height.to_le_bytes();
        self.writer
            .send(&mut self.link, &[cmd::INIT, w[0], w[1], h[0], h[1]])
            .map_err(map_link_error)?;
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PanelError> {
        self.writer
            .send(&mut self.link, &[cmd::SLEEP])
            .map_err(map_link_error)?;
        self.initialized = false;
        Ok(())
    }

    fn clear(&mut self, background: Argb) {
        let fill = if background.to_native(PixelFormat::Gray1) != 0 {
            0xFF
        } else {
            0x00
        };
        for byte in self.shadow.iter_mut() {
            *byte = fill;
        }
    }

    fn set_pixel(&mut self, v: Vertex, color: Argb) {
        if !self.logical().contains(v) {
            return;
        }
        let p = self.config.orientation.to_physical(v, self.logical());
        let idx = p.y as usize * self.stride + p.x as usize / 8;
        let mask = 0x80u8 >> (p.x as usize % 8);
        if color.to_native(PixelFormat::Gray1) != 0 {
            self.shadow[idx] |= mask;
        } else {
            self.shadow[idx] &= !mask;
        }
    }

    fn get_pixel(&self, _v: Vertex) -> Argb {
        // Write-only transport; the placeholder means "unknown"
        self.config.readback
    }

    fn flush(&mut self) -> Result<(), PanelError> {
        if !self.initialized {
            return Err(PanelError::NotInitialized);
        }
        let mut command: Vec<u8, { MAX_SHADOW + 1 }> = Vec::new();
        // Capacity is shadow capacity plus the command byte, so these
        // pushes cannot fail
        let _ = command.push(cmd::BLIT);
        let _ = command.extend_from_slice(&self.shadow);
        self.writer
            .send(&mut self.link, &command)
            .map_err(map_link_error)
    }
}

/// Adapt an `embedded-io` transport plus a delay source into a
/// [`SerialLink`].
///
/// The bounded read polls `read_ready` once per millisecond until the
/// buffer fills or the timeout elapses; data that stops halfway is a
/// short read, not a timeout.
pub struct IoLink<T, D> {
    transport: T,
    delay: D,
}

impl<T, D> IoLink<T, D>
where
    T: Read + ReadReady + Write,
    D: DelayNs,
{
    pub fn new(transport: T, delay: D) -> Self {
        Self { transport, delay }
    }

    pub fn release(self) -> T {
        self.transport
    }
}

impl<T, D> SerialLink for IoLink<T, D>
where
    T: Read + ReadReady + Write,
    D: DelayNs,
{
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.transport
            .write_all(bytes)
            .map_err(|_| LinkError::Transport)?;
        self.transport.flush().map_err(|_| LinkError::Transport)
    }

    fn read_exact(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<(), LinkError> {
        let mut got = 0;
        let mut waited_ms = 0;
        while got < buf.len() {
            if self
                .transport
                .read_ready()
                .map_err(|_| LinkError::Transport)?
            {
                let n = self
                    .transport
                    .read(&mut buf[got..])
                    .map_err(|_| LinkError::Transport)?;
                if n == 0 {
                    return Err(LinkError::ShortRead);
                }
                got += n;
            } else {
                if waited_ms >= timeout_ms {
                    return Err(if got == 0 {
                        LinkError::Timeout
                    } else {
                        LinkError::ShortRead
                    });
                }
                self.delay.delay_ms(1);
                waited_ms += 1;
            }
        }
        Ok(())
    }
}
