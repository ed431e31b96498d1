// In: src/config.rs

//! Decode configuration shared by both nullable integer types.
//!
//! The defaults reproduce the standard wire behaviour: quoted JSON numbers are
//! accepted, and the plain text `null` means "absent". A `DecodeConfig` can be
//! deserialized from a host application's own configuration file.

use serde::{Deserialize, Serialize};

/// Knobs for the JSON and text decoders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecodeConfig {
    /// If true, a JSON string such as `"12345"` is parsed as a number.
    /// If false, it is rejected as the wrong JSON type.
    #[serde(default = "default_true")]
    pub accept_quoted_numbers: bool,

    /// If true, the plain text `null` decodes to an absent value.
    /// Empty text is always absent regardless of this setting.
    #[serde(default = "default_true")]
    pub accept_null_text: bool,
}

impl DecodeConfig {
    /// The configuration used by the plain `unmarshal_*` methods.
    pub const STANDARD: DecodeConfig = DecodeConfig {
        accept_quoted_numbers: true,
        accept_null_text: true,
    };
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
