//! Link protocol for serial-attached panels
//!
//! Byte-oriented serial panels cannot take arbitrarily long commands
//! in one write: the transport is slow, often half-duplex, and the
//! panel firmware buffers one bounded block at a time. This crate
//! implements the canonical handshake pattern such devices use:
//!
//! - A caller-supplied command of any length is split into frames no
//!   larger than the device's fixed maximum block size
//! - Each frame carries a small fixed header (type tag, block length)
//! - After every frame the driver blocks, up to a bounded timeout,
//!   for a fixed-length status response and validates it
//! - Frames are never pipelined; any bad acknowledgement, short read
//!   or timeout aborts the whole multi-frame operation
//!
//! On abort, the already-transmitted prefix is considered to have had
//! undefined effect on the device; there is no retry and no resume.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod link;

pub use frame::{BlockFrame, ACK_LEN, HEADER_LEN, STATUS_ERROR_MASK, TAG_ACK, TAG_DATA};
pub use link::{BlockWriter, LinkError, LinkState, SerialLink};
