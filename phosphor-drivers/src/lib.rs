//! Concrete panel drivers for the Phosphor rendering core
//!
//! Three drivers cover the three transport families the core targets:
//!
//! - [`FrameBufferPanel`]: pixels live in local memory, for simulated
//!   and desktop-emulated panels (and as the test vehicle)
//! - [`SerialPanel`]: a link-constrained panel behind a byte-oriented
//!   serial transport, flushed through the block handshake
//! - [`FanOutPanel`]: several panels composed into one logical canvas
//!
//! Every driver implements the `PanelDriver` capability contract from
//! `phosphor-core`; orientation and viewport transforms are applied
//! here, at the point pixels touch physical memory or protocol bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod fanout;
pub mod framebuffer;
pub mod serial;

pub use fanout::FanOutPanel;
pub use framebuffer::FrameBufferPanel;
pub use serial::{IoLink, SerialPanel, SerialPanelConfig};
