//! JSON decoding for a single nullable unsigned integer.
//!
//! Accepted inputs, in order of precedence:
//!
//! 1. the `null` literal -> [`Decoded::Null`]
//! 2. a bare JSON integer in `0..=u64::MAX` -> [`Decoded::Number`]
//! 3. a JSON string whose contents are a decimal `u64` (if enabled)
//!
//! Anything else fails. A number with a fraction or exponent is never
//! coerced to an integer.

use serde_json::Value;

use super::{decimal::parse_decimal, rejected, Decoded};
use crate::config::DecodeConfig;
use crate::error::{DecodeStage, NullableError};

/// The only input that short-circuits the JSON parser.
pub const NULL_LITERAL: &[u8] = b"null";

/// Decodes one JSON value into a policy-free [`Decoded`] token.
pub fn decode_json(data: &[u8], config: &DecodeConfig) -> Result<Decoded, NullableError> {
    if data == NULL_LITERAL {
        return Ok(Decoded::Null);
    }

    // Numbers are lexed here rather than by serde_json, which rejects
    // literals beyond f64 range as malformed JSON.
    let token = trim_json_whitespace(data);
    if let Some(number) = lex_number(token) {
        return decode_number(&number, token)
            .map(Decoded::Number)
            .map_err(|e| rejected(e.at(DecodeStage::Json)));
    }

    let value: Value = serde_json::from_slice(data)
        .map_err(|e| rejected(NullableError::Syntax(e).at(DecodeStage::Json)))?;

    match value {
        Value::Null => Ok(Decoded::Null),
        Value::String(text) => {
            if !config.accept_quoted_numbers {
                return Err(rejected(
                    NullableError::InvalidType(format!("string {:?} (quoted numbers are disabled)", text))
                        .at(DecodeStage::Json),
                ));
            }
            log::trace!("falling back to quoted number parse for {:?}", text);
            parse_decimal(&text)
                .map(Decoded::Number)
                .map_err(|e| rejected(e.at(DecodeStage::QuotedString)))
        }
        other => Err(rejected(
            NullableError::InvalidType(json_type_name(&other).to_string()).at(DecodeStage::Json),
        )),
    }
}

/// A token matching the JSON number grammar.
struct NumberToken<'a> {
    negative: bool,
    /// The integer part, without sign.
    digits: &'a str,
    /// False if a fraction or exponent follows the integer part.
    integral: bool,
}

/// Matches `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` exactly.
fn lex_number(token: &[u8]) -> Option<NumberToken<'_>> {
    let (negative, rest) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, token),
    };

    let int_len = count_digits(rest);
    if int_len == 0 || (int_len > 1 && rest[0] == b'0') {
        return None;
    }
    let (int_part, mut tail) = rest.split_at(int_len);
    let integral = tail.is_empty();

    if let Some((b'.', fraction)) = tail.split_first() {
        let len = count_digits(fraction);
        if len == 0 {
            return None;
        }
        tail = &fraction[len..];
    }

    if let Some((b'e' | b'E', exponent)) = tail.split_first() {
        let exponent = match exponent.split_first() {
            Some((b'+' | b'-', rest)) => rest,
            _ => exponent,
        };
        let len = count_digits(exponent);
        if len == 0 {
            return None;
        }
        tail = &exponent[len..];
    }

    if !tail.is_empty() {
        return None;
    }

    Some(NumberToken {
        negative,
        digits: std::str::from_utf8(int_part).ok()?,
        integral,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Resolves a lexed JSON number to a `u64`.
fn decode_number(number: &NumberToken<'_>, token: &[u8]) -> Result<u64, NullableError> {
    let text = || String::from_utf8_lossy(token).into_owned();

    if !number.integral {
        return Err(NullableError::InvalidType(format!(
            "non-integer number {}",
            text()
        )));
    }
    if number.negative {
        // `-0` is in range; only the sign is wrong.
        return Err(if number.digits == "0" {
            NullableError::Format {
                input: text(),
                source: None,
            }
        } else {
            NullableError::Range { input: text() }
        });
    }

    // Digits only, so the sole possible failure is overflow.
    parse_decimal(number.digits)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strips the JSON insignificant whitespace around a single token.
fn trim_json_whitespace(data: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r');
    let start = data.iter().position(|b| !is_ws(b)).unwrap_or(data.len());
    let end = data.iter().rposition(|b| !is_ws(b)).map_or(start, |i| i + 1);
    &data[start..end]
}
