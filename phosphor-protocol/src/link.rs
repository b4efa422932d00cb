//! Segmented block writer with acknowledgement and timeout
//!
//! State machine for one multi-frame send:
//!
//! ```text
//! Idle -> Framing -> AwaitingAck -> (Idle | Failed)
//!            ^            |
//!            +------------+  next block, previous ack validated
//! ```
//!
//! Frames are never pipelined: the next block goes out only after the
//! previous acknowledgement validated. Any bad ack, short read or
//! timeout aborts the whole operation.

use crate::frame::{validate_ack, BlockFrame, ACK_LEN};

/// Errors surfaced by a block transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The bounded wait for a response elapsed
    Timeout,
    /// Response arrived but was shorter than expected
    ShortRead,
    /// The response tag or status byte was invalid; carries the
    /// offending byte
    Nak(u8),
    /// The underlying transport failed to accept bytes
    Transport,
}

/// Phase of the block-transfer state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No transfer in flight
    #[default]
    Idle,
    /// Transmitting a block frame
    Framing,
    /// Blocked on the device's status response
    AwaitingAck,
    /// Last transfer aborted; prefix already sent has undefined
    /// effect on the device
    Failed,
}

/// Byte-oriented serial transport a panel link runs over.
///
/// `read_exact` blocks until `buf` is full or the timeout elapses;
/// partial data at expiry is a [`LinkError::ShortRead`].
pub trait SerialLink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;

    fn read_exact(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<(), LinkError>;
}

/// Splits arbitrarily long commands into acknowledged block frames.
#[derive(Debug, Clone)]
pub struct BlockWriter {
    max_block: usize,
    timeout_ms: u32,
    state: LinkState,
}

impl BlockWriter {
    /// Create a writer for a device with the given maximum block
    /// size; clamped into 1..=255 so every block fits the length byte.
    pub fn new(max_block: usize, timeout_ms: u32) -> Self {
        Self {
            max_block: max_block.clamp(1, u8::MAX as usize),
            timeout_ms,
            state: LinkState::Idle,
        }
    }

    /// Maximum data bytes per frame
    pub fn max_block(&self) -> usize {
        self.max_block
    }

    /// Phase of the last or current transfer
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Number of frames `len` payload bytes occupy
    pub fn frame_count(&self, len: usize) -> usize {
        len.div_ceil(self.max_block)
    }

    /// Send a whole command through the handshake.
    ///
    /// An empty command transmits nothing and succeeds. On any
    /// failure the operation aborts immediately: blocks already
    /// acknowledged stay sent, the failing and all following blocks
    /// are never retried.
    pub fn send<L: SerialLink>(&mut self, link: &mut L, command: &[u8]) -> Result<(), LinkError> {
        let mut offset = 0;
        while offset < command.len() {
            let end = (offset + self.max_block).min(command.len());
            // max_block is clamped to 255, so every chunk fits the
            // length byte
            let frame = BlockFrame {
                data: &command[offset..end],
            };

            self.state = LinkState::Framing;
            if let Err(e) = self.transfer(link, &frame) {
                self.state = LinkState::Failed;
                return Err(e);
            }
            offset = end;
        }
        self.state = LinkState::Idle;
        Ok(())
    }

    fn transfer<L: SerialLink>(
        &mut self,
        link: &mut L,
        frame: &BlockFrame<'_>,
    ) -> Result<(), LinkError> {
        link.write_all(&frame.header())?;
        link.write_all(frame.data)?;

        self.state = LinkState::AwaitingAck;
        let mut resp = [0u8; ACK_LEN];
        link.read_exact(&mut resp, self.timeout_ms)?;
        validate_ack(&resp).map_err(LinkError::Nak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{HEADER_LEN, STATUS_FAULT, TAG_ACK, TAG_DATA};
    use heapless::Vec;
    use proptest::prelude::*;

    /// Scripted transport: records every write, answers reads from a
    /// fixed list of responses.
    struct MockLink {
        written: Vec<u8, 512>,
        frames_seen: usize,
        /// Per-frame response script; `None` simulates a timeout
        responses: Vec<Option<[u8; ACK_LEN]>, 8>,
    }

    impl MockLink {
        fn new(responses: &[Option<[u8; ACK_LEN]>]) -> Self {
            let mut r = Vec::new();
            r.extend_from_slice(responses).unwrap();
            Self {
                written: Vec::new(),
                frames_seen: 0,
                responses: r,
            }
        }
    }

    impl SerialLink for MockLink {
        fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
            self.written
                .extend_from_slice(bytes)
                .map_err(|_| LinkError::Transport)
        }

        fn read_exact(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<(), LinkError> {
            let idx = self.frames_seen;
            self.frames_seen += 1;
            match self.responses.get(idx).copied().flatten() {
                Some(resp) => {
                    buf.copy_from_slice(&resp);
                    Ok(())
                }
                None => Err(LinkError::Timeout),
            }
        }
    }

    const OK_ACK: Option<[u8; ACK_LEN]> = Some([TAG_ACK, 0x00, 0, 0]);

    #[test]
    fn command_splits_into_exact_frames() {
        // 80 bytes at a 20-byte block size: exactly 4 frames
        let command = [0xABu8; 80];
        let mut link = MockLink::new(&[OK_ACK; 4]);
        let mut writer = BlockWriter::new(20, 50);
        assert_eq!(writer.frame_count(command.len()), 4);
        writer.send(&mut link, &command).unwrap();
        assert_eq!(writer.state(), LinkState::Idle);
        assert_eq!(link.frames_seen, 4);
        assert_eq!(link.written.len(), 4 * (HEADER_LEN + 20));
        // Every frame header announces a full block
        for frame in link.written.chunks(HEADER_LEN + 20) {
            assert_eq!(&frame[..HEADER_LEN], &[TAG_DATA, 0x00, 20]);
            assert!(frame[HEADER_LEN..].iter().all(|&b| b == 0xAB));
        }
    }

    #[test]
    fn trailing_partial_block() {
        let command = [1u8; 45];
        let mut link = MockLink::new(&[OK_ACK; 3]);
        let mut writer = BlockWriter::new(20, 50);
        writer.send(&mut link, &command).unwrap();
        assert_eq!(link.frames_seen, 3);
        // Last frame carries the 5 remaining bytes
        let last = &link.written[link.written.len() - (HEADER_LEN + 5)..];
        assert_eq!(&last[..HEADER_LEN], &[TAG_DATA, 0x00, 5]);
    }

    /// Timeout on the 3rd acknowledgement: frames 1-2 are sent and
    /// acknowledged, frame 3 was transmitted, frame 4 never goes out.
    #[test]
    fn timeout_aborts_whole_operation() {
        let command = [0x55u8; 80];
        let mut link = MockLink::new(&[OK_ACK, OK_ACK, None, OK_ACK]);
        let mut writer = BlockWriter::new(20, 50);
        let result = writer.send(&mut link, &command);
        assert_eq!(result, Err(LinkError::Timeout));
        assert_eq!(writer.state(), LinkState::Failed);
        // 3 frames hit the wire (the 3rd is the aborted one)
        assert_eq!(link.written.len(), 3 * (HEADER_LEN + 20));
        assert_eq!(link.frames_seen, 3);
    }

    #[test]
    fn bad_status_aborts_with_nak() {
        let command = [7u8; 30];
        let mut link = MockLink::new(&[Some([TAG_ACK, STATUS_FAULT, 0, 0])]);
        let mut writer = BlockWriter::new(20, 50);
        assert_eq!(
            writer.send(&mut link, &command),
            Err(LinkError::Nak(STATUS_FAULT))
        );
        assert_eq!(writer.state(), LinkState::Failed);
        // Second frame never transmitted
        assert_eq!(link.written.len(), HEADER_LEN + 20);
    }

    #[test]
    fn wrong_tag_aborts_with_nak() {
        let command = [7u8; 5];
        let mut link = MockLink::new(&[Some([0x99, 0, 0, 0])]);
        let mut writer = BlockWriter::new(20, 50);
        assert_eq!(writer.send(&mut link, &command), Err(LinkError::Nak(0x99)));
    }

    #[test]
    fn empty_command_sends_nothing() {
        let mut link = MockLink::new(&[]);
        let mut writer = BlockWriter::new(20, 50);
        writer.send(&mut link, &[]).unwrap();
        assert_eq!(writer.state(), LinkState::Idle);
        assert!(link.written.is_empty());
        assert_eq!(link.frames_seen, 0);
    }

    #[test]
    fn block_size_is_clamped() {
        assert_eq!(BlockWriter::new(0, 10).max_block(), 1);
        assert_eq!(BlockWriter::new(10_000, 10).max_block(), 255);
        assert_eq!(BlockWriter::new(64, 10).max_block(), 64);
    }

    proptest! {
        /// For any payload and block size, the wire carries exactly
        /// `frame_count` headers plus the payload, nothing else.
        #[test]
        fn wire_length_accounts_for_every_byte(
            len in 0usize..200,
            max_block in 25usize..300,
        ) {
            let command = [0xC3u8; 200];
            let mut writer = BlockWriter::new(max_block, 50);
            let frames = writer.frame_count(len);
            let mut link = MockLink::new(&[OK_ACK; 8][..frames]);

            writer.send(&mut link, &command[..len]).unwrap();
            prop_assert_eq!(link.frames_seen, frames);
            prop_assert_eq!(link.written.len(), frames * HEADER_LEN + len);
        }
    }

    #[test]
    fn recovers_on_next_send_after_failure() {
        let mut writer = BlockWriter::new(20, 50);
        let mut broken = MockLink::new(&[None]);
        assert!(writer.send(&mut broken, &[1u8; 10]).is_err());
        assert_eq!(writer.state(), LinkState::Failed);

        let mut good = MockLink::new(&[OK_ACK]);
        writer.send(&mut good, &[1u8; 10]).unwrap();
        assert_eq!(writer.state(), LinkState::Idle);
    }
}
