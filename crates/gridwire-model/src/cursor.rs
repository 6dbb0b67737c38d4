use thiserror::Error;

/// Failure while decoding a fixed-layout binary record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The source ran out of bytes before the requested field or record was
    /// fully read.
    #[error("ran out of data: need {needed} bytes, {remaining} remaining")]
    InsufficientData { needed: usize, remaining: usize },
}

/// Bounds-checked, forward-only reader over the bytes of a larger record.
///
/// Record structures embed fixed-layout sub-records back to back; a cursor
/// tracks how far into the record the caller has read so sub-record decoders
/// compose without re-slicing. Short input yields
/// [`DecodeError::InsufficientData`], never a panic.
#[derive(Clone, Debug)]
pub struct RecordCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Offset of the next unread byte from the start of the record.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read one little-endian unsigned 16-bit word.
    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        let end = self.pos + 2;
        let Some(bytes) = self.data.get(self.pos..end) else {
            return Err(DecodeError::InsufficientData {
                needed: 2,
                remaining: self.remaining(),
            });
        };
        let value = u16::from_le_bytes([bytes[0], bytes[1]]);
        self.pos = end;
        Ok(value)
    }
}
