use core::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cursor::{DecodeError, RecordCursor};

/// A rectangular cell range as stored in the workbook format's fixed 8-byte
/// address record.
///
/// Rows and columns are 0-indexed. The encoded form is exactly
/// [`ENCODED_SIZE`](Self::ENCODED_SIZE) bytes: `first_row`, `last_row`,
/// `first_col`, `last_col`, each a little-endian `u16`, no padding, no
/// version tag.
///
/// No ordering between `first_*` and `last_*` is enforced: some producers
/// write inverted ranges, and byte-for-byte round-trip fidelity with the
/// external format takes priority over normalization. Operations that need
/// rectangle semantics ([`contains`](Self::contains),
/// [`cell_count`](Self::cell_count)) normalize on the fly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeAddress {
    first_row: u16,
    last_row: u16,
    first_col: u16,
    last_col: u16,
}

impl RangeAddress {
    /// Size of the encoded form in bytes.
    pub const ENCODED_SIZE: usize = 8;

    pub const fn new(first_row: u16, last_row: u16, first_col: u16, last_col: u16) -> Self {
        Self {
            first_row,
            last_row,
            first_col,
            last_col,
        }
    }

    pub const fn first_row(&self) -> u16 {
        self.first_row
    }

    pub const fn last_row(&self) -> u16 {
        self.last_row
    }

    pub const fn first_col(&self) -> u16 {
        self.first_col
    }

    pub const fn last_col(&self) -> u16 {
        self.last_col
    }

    /// Decode one address record from `cursor`.
    ///
    /// On success the cursor advances exactly
    /// [`ENCODED_SIZE`](Self::ENCODED_SIZE) bytes. On failure its position is
    /// unspecified and it must not be reused.
    pub fn decode(cursor: &mut RecordCursor<'_>) -> Result<Self, DecodeError> {
        if cursor.remaining() < Self::ENCODED_SIZE {
            return Err(DecodeError::InsufficientData {
                needed: Self::ENCODED_SIZE,
                remaining: cursor.remaining(),
            });
        }
        let first_row = cursor.read_u16_le()?;
        let last_row = cursor.read_u16_le()?;
        let first_col = cursor.read_u16_le()?;
        let last_col = cursor.read_u16_le()?;
        Ok(Self {
            first_row,
            last_row,
            first_col,
            last_col,
        })
    }

    /// Encode this record in the fixed field order and width.
    ///
    /// Sink failures surface as the sink's own [`io::Error`].
    pub fn encode<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.first_row.to_le_bytes())?;
        out.write_all(&self.last_row.to_le_bytes())?;
        out.write_all(&self.first_col.to_le_bytes())?;
        out.write_all(&self.last_col.to_le_bytes())
    }

    /// Returns true if `(row, col)` lies within the range, treating inverted
    /// bounds as if normalized.
    pub fn contains(&self, row: u16, col: u16) -> bool {
        let (row_lo, row_hi) = min_max(self.first_row, self.last_row);
        let (col_lo, col_hi) = min_max(self.first_col, self.last_col);
        row >= row_lo && row <= row_hi && col >= col_lo && col <= col_hi
    }

    /// Number of cells covered by the range.
    ///
    /// A full-sheet range covers `65536 * 65536` cells, which does not fit in
    /// a `u32`.
    pub fn cell_count(&self) -> u64 {
        let (row_lo, row_hi) = min_max(self.first_row, self.last_row);
        let (col_lo, col_hi) = min_max(self.first_col, self.last_col);
        (u64::from(row_hi - row_lo) + 1) * (u64::from(col_hi - col_lo) + 1)
    }
}

/// Formats as stored, in A1 notation (`A1:B2`), collapsing to a single cell
/// reference when first and last coincide. Inverted ranges print inverted.
impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_name(self.first_col), self.first_row as u32 + 1)?;
        if self.first_row != self.last_row || self.first_col != self.last_col {
            write!(f, ":{}{}", col_name(self.last_col), self.last_row as u32 + 1)?;
        }
        Ok(())
    }
}

const fn min_max(a: u16, b: u16) -> (u16, u16) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn col_name(col: u16) -> String {
    // Columns are 1-based in A1 notation; stored 0-based.
    let mut n = col as u32 + 1;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).expect("column letters are always valid UTF-8")
}
