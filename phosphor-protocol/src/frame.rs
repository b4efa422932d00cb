//! Block frame wire format
//!
//! Frame layout:
//! - TYPE (1 byte): frame-type tag
//! - RESERVED (1 byte): always 0x00
//! - LENGTH (1 byte): data block length (0-255)
//! - DATA (0..length bytes)
//!
//! Expected response, 4 bytes:
//! - byte 0: must equal [`TAG_ACK`]
//! - byte 1: status; all bits of [`STATUS_ERROR_MASK`] must be clear
//! - bytes 2-3: device-specific, ignored

/// Frame-type tag for a data block
pub const TAG_DATA: u8 = 0x02;

/// Leading byte of a valid acknowledgement
pub const TAG_ACK: u8 = 0x06;

/// Frame header size: type, reserved, length
pub const HEADER_LEN: usize = 3;

/// Fixed acknowledgement length
pub const ACK_LEN: usize = 4;

/// Status bits that invalidate an acknowledgement
pub const STATUS_ERROR_MASK: u8 = STATUS_FAULT | STATUS_OVERRUN | STATUS_BUSY;

/// Device fault flag in the status byte
pub const STATUS_FAULT: u8 = 0x80;
/// Receive buffer overrun flag
pub const STATUS_OVERRUN: u8 = 0x40;
/// Device busy flag
pub const STATUS_BUSY: u8 = 0x20;

/// One bounded data block with its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockFrame<'a> {
    pub data: &'a [u8],
}

impl<'a> BlockFrame<'a> {
    /// Wrap one block of at most 255 bytes.
    ///
    /// Returns `None` when the block would not fit the length byte.
    pub fn new(data: &'a [u8]) -> Option<Self> {
        (data.len() <= u8::MAX as usize).then_some(Self { data })
    }

    /// The three header bytes preceding the data block
    pub fn header(&self) -> [u8; HEADER_LEN] {
        [TAG_DATA, 0x00, self.data.len() as u8]
    }

    /// Total bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.data.len()
    }
}

/// Validate a 4-byte acknowledgement.
///
/// Returns the status byte on failure so callers can report which
/// error bits the device raised.
pub fn validate_ack(resp: &[u8; ACK_LEN]) -> Result<(), u8> {
    if resp[0] != TAG_ACK {
        return Err(resp[0]);
    }
    if resp[1] & STATUS_ERROR_MASK != 0 {
        return Err(resp[1]);
    }
    Ok(())
}
