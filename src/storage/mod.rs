// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Storage Adapter
// ====================================================================================
//
// Storage layers mark absence with a NULL marker that lives outside the value
// domain. The nullable integer types never talk to a storage layer directly;
// they delegate to a `NullTextBridge`, an opaque capability that turns any
// storage cell into a `NullText` (a validity flag plus text), and then reparse
// that text as a canonical decimal.
//
// Data Flow (Scan):
//
//   1. [StorageValue]        -> a cell from a driver, or from an Arrow column (`arrow_impl`)
//   2. [NullTextBridge]      -> NullText { valid, text }
//   3. [codec::parse_decimal] -> Decoded::{Null, Number}
//   4. [type policy]          -> (value, valid)
//
// Data Flow (Value):
//
//   (value, valid) -> type policy -> StorageValue::{Null, Text}
//
// ====================================================================================
pub mod arrow_impl;
pub mod bridge;

pub use arrow_impl::{scan_array_value, scan_column, to_uint64_array};
pub use bridge::{DefaultTextBridge, NullText, NullTextBridge, StorageValue};

use crate::codec::{decimal::parse_decimal, rejected, Decoded};
use crate::error::{DecodeStage, NullableError};

/// Runs `src` through `bridge` and reparses the resulting text.
pub(crate) fn scan_decoded<B>(bridge: &B, src: &StorageValue) -> Result<Decoded, NullableError>
where
    B: NullTextBridge + ?Sized,
{
    let scanned = bridge.scan(src).map_err(rejected)?;
    if !scanned.valid {
        return Ok(Decoded::Null);
    }

    parse_decimal(&scanned.text)
        .map(Decoded::Number)
        .map_err(|e| rejected(e.at(DecodeStage::Scan)))
}
