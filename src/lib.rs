//! This file is the root of the `nullable_uint` crate.
//!
//! It provides two nullable `u64` value types that round-trip between a
//! NULL-aware storage layer, JSON, and plain text without losing the
//! difference between "no value" and "value is zero":
//!
//! * [`NullUint`]: strict-null: zero is a valid value.
//! * [`ZeroUint`]: zero-as-null: zero and null are the same on output.
//!
//! ```
//! use nullable_uint::{NullUint, ZeroUint};
//!
//! let mut count = NullUint::default();
//! count.unmarshal_json(b"\"12345\"").unwrap();
//! assert_eq!(count.marshal_json().unwrap(), b"12345");
//!
//! let zero = ZeroUint::from_value(0);
//! assert!(!zero.is_valid());
//! assert_eq!(zero.marshal_json().unwrap(), b"0");
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod config;
pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::DecodeConfig;
pub use error::{DecodeStage, ErrorKind, NullableError};
pub use traits::NullableUint;
pub use types::{NullUint, ZeroUint};
