use core::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`CellLocation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Sheet indices are 0-based positions into the workbook's sheet list and
    /// can never be negative.
    #[error("sheet index must not be negative, got {0}")]
    NegativeSheetIndex(i32),
}

/// Identifies one cell within a multi-sheet workbook.
///
/// Formula services use this as a map key (dependency tracking, per-cell
/// diagnostics), so the combined hash is computed once at construction and
/// reused for every lookup. Row and column indices are not range-checked
/// here; callers validate them against the active workbook dimensions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCellLocation", into = "RawCellLocation")]
pub struct CellLocation {
    sheet_index: i32,
    row_index: i32,
    column_index: i32,
    hash: i32,
}

impl CellLocation {
    pub fn new(
        sheet_index: i32,
        row_index: i32,
        column_index: i32,
    ) -> Result<Self, LocationError> {
        if sheet_index < 0 {
            return Err(LocationError::NegativeSheetIndex(sheet_index));
        }
        let hash = sheet_index.wrapping_add(
            17i32.wrapping_mul(row_index.wrapping_add(17i32.wrapping_mul(column_index))),
        );
        Ok(Self {
            sheet_index,
            row_index,
            column_index,
            hash,
        })
    }

    pub const fn sheet_index(&self) -> i32 {
        self.sheet_index
    }

    pub const fn row_index(&self) -> i32 {
        self.row_index
    }

    pub const fn column_index(&self) -> i32 {
        self.column_index
    }

    /// Human-readable fragment for diagnostics.
    pub fn format_as_string(&self) -> String {
        format!(
            "ShIx={} R={} C={}",
            self.sheet_index, self.row_index, self.column_index
        )
    }
}

// Equality is structural over the three indices; the cached hash is a pure
// function of them and carries no identity of its own.
impl PartialEq for CellLocation {
    fn eq(&self, other: &Self) -> bool {
        self.sheet_index == other.sheet_index
            && self.row_index == other.row_index
            && self.column_index == other.column_index
    }
}

impl Eq for CellLocation {}

impl Hash for CellLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash);
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as_string())
    }
}

/// Serde surface for [`CellLocation`]: serialization drops the cached hash and
/// deserialization re-runs the constructor so the sheet-index invariant holds
/// for decoded values too.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawCellLocation {
    sheet_index: i32,
    row_index: i32,
    column_index: i32,
}

impl TryFrom<RawCellLocation> for CellLocation {
    type Error = LocationError;

    fn try_from(raw: RawCellLocation) -> Result<Self, Self::Error> {
        CellLocation::new(raw.sheet_index, raw.row_index, raw.column_index)
    }
}

impl From<CellLocation> for RawCellLocation {
    fn from(loc: CellLocation) -> Self {
        Self {
            sheet_index: loc.sheet_index,
            row_index: loc.row_index,
            column_index: loc.column_index,
        }
    }
}
