//! Canonical decimal text <-> `u64`.
//!
//! This is the only numeric parser in the crate. It accepts ASCII digits and
//! nothing else: no sign, no whitespace, no fraction. Leading zeros are
//! accepted on input and never produced on output.

use std::num::IntErrorKind;

use crate::error::NullableError;

/// Parses an unsigned base-10 literal, separating format errors from range errors.
pub fn parse_decimal(text: &str) -> Result<u64, NullableError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        // `str::parse` tolerates a leading '+', so it only supplies a cause when it also fails.
        return Err(NullableError::Format {
            input: text.to_string(),
            source: text.parse::<u64>().err(),
        });
    }

    text.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => NullableError::Range {
            input: text.to_string(),
        },
        _ => NullableError::Format {
            input: text.to_string(),
            source: Some(e),
        },
    })
}

/// Formats `n` as canonical decimal text.
pub fn format_decimal(n: u64) -> String {
    n.to_string()
}
