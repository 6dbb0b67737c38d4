//! `gridwire-model` defines the leaf value types shared by the gridwire
//! formula subsystem.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the formula renderer and its diagnostics
//! - binary record readers/writers for the legacy workbook format
//! - dependency-tracking services that key state by cell identity
//!
//! Multi-byte fields in the workbook format are little-endian; decoding goes
//! through [`RecordCursor`], a bounds-checked forward-only reader, so a
//! truncated record surfaces as a typed error instead of a panic.

mod cursor;
mod location;
mod range;

pub use cursor::{DecodeError, RecordCursor};
pub use location::{CellLocation, LocationError};
pub use range::RangeAddress;
