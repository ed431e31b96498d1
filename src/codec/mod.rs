//! The decode/encode core shared by both nullable integer types.
//!
//! Everything in here is policy-free: it turns external bytes into a
//! [`Decoded`] token (either "absent" or a concrete `u64`) and turns a `u64`
//! back into canonical decimal text. Applying the strict-null or
//! zero-as-null rule to a [`Decoded`] token is the job of each type.
//!
//! Data flow (decode):
//!
//!   bytes -> [json | text | serde visitor] -> Decoded -> policy -> (value, valid)
//!
//! Data flow (encode):
//!
//!   (value, valid) -> policy -> Option<u64> / u64 -> decimal text -> bytes

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod decimal;
pub mod json;
pub(crate) mod serde_impl;
pub mod text;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use self::decimal::{format_decimal, parse_decimal};
pub use self::json::decode_json;
pub use self::text::decode_text;

use crate::error::NullableError;

/// The policy-free result of decoding one input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// The input explicitly represented "no value".
    Null,
    /// The input held a number in `0..=u64::MAX`.
    Number(u64),
}

/// Logs a rejected input before handing the error back to the caller.
pub(crate) fn rejected(err: NullableError) -> NullableError {
    log::debug!(
        "rejected nullable uint input at stage {:?}: {}",
        err.stage(),
        err
    );
    err
}
