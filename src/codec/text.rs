//! Plain-text decoding: no quoting, no escaping, no whitespace.

use super::{decimal::parse_decimal, rejected, Decoded};
use crate::config::DecodeConfig;
use crate::error::{DecodeStage, NullableError};

/// Decodes raw text into a policy-free [`Decoded`] token.
///
/// Empty text is always absent. The literal `null` is absent unless
/// `config.accept_null_text` is off, in which case it is a format error.
pub fn decode_text(text: &[u8], config: &DecodeConfig) -> Result<Decoded, NullableError> {
    if text.is_empty() || (config.accept_null_text && text == b"null") {
        return Ok(Decoded::Null);
    }

    let text = std::str::from_utf8(text).map_err(|_| {
        rejected(
            NullableError::Format {
                input: String::from_utf8_lossy(text).into_owned(),
                source: None,
            }
            .at(DecodeStage::Text),
        )
    })?;

    parse_decimal(text)
        .map(Decoded::Number)
        .map_err(|e| rejected(e.at(DecodeStage::Text)))
}
