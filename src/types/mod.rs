//! This module defines the two nullable unsigned integer types.
//!
//! They share one state shape (a `u64` plus a validity flag) and the codec in
//! [`crate::codec`], but each applies its own policy for zero:
//!
//! * [`NullUint`]: zero is a normal value; only explicit absence is null.
//! * [`ZeroUint`]: zero and absence are the same state on every output.

pub mod null_uint;
pub mod zero_uint;

// Re-export the main type(s) for easier access.
pub use null_uint::NullUint;
pub use zero_uint::ZeroUint;

#[cfg(test)]
mod tests;
