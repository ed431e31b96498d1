// In: src/error.rs

//! This module defines the single, unified error type for the nullable integer types.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every decode failure is reported through [`NullableError::Decode`], which records
//! the stage that failed and boxes the underlying cause. Callers that only care about
//! *what* went wrong can call [`NullableError::kind`], which looks through the wrapper.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// The parse stage at which a decode failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStage {
    /// Decoding the raw JSON token (syntax, token type, bare number).
    Json,
    /// Parsing the contents of a quoted JSON string as a number.
    QuotedString,
    /// Parsing plain, unquoted text.
    Text,
    /// Reparsing the text handed back by a storage bridge.
    Scan,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::QuotedString => "quoted string",
            Self::Text => "text",
            Self::Scan => "scan",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`NullableError`], independent of the stage wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input bytes are not well-formed JSON.
    Syntax,
    /// The JSON value can never represent an unsigned integer.
    Type,
    /// Text is not an unsigned base-10 literal.
    Format,
    /// The literal is outside `0..=u64::MAX`.
    Range,
    /// Serialising the value failed.
    Encode,
    /// The storage layer could not supply a value.
    Storage,
}

#[derive(Error, Debug)]
pub enum NullableError {
    // =========================================================================
    // === Decode Errors
    // =========================================================================
    /// The input is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("JSON input is invalid type (need int or string): {0}")]
    InvalidType(String),

    #[error("couldn't convert {input:?} to an unsigned integer")]
    Format {
        input: String,
        #[source]
        source: Option<ParseIntError>,
    },

    #[error("value {input} is out of range for u64")]
    Range { input: String },

    #[error("decode failed at stage '{stage}': {source}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: Box<NullableError>,
    },

    // =========================================================================
    // === Encode Errors
    // =========================================================================
    #[error("JSON encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    // =========================================================================
    // === Storage Errors
    // =========================================================================
    #[error("storage scan failed: {0}")]
    Scan(String),

    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Buffer length mismatch: row {0} requested from a column of length {1}")]
    BufferMismatch(usize, usize),

    /// An error originating from the Arrow library.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl NullableError {
    /// Wraps `self` with the stage at which it occurred.
    pub(crate) fn at(self, stage: DecodeStage) -> Self {
        NullableError::Decode {
            stage,
            source: Box::new(self),
        }
    }

    /// Returns the kind of the innermost error, looking through stage wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::InvalidType(_) => ErrorKind::Type,
            Self::Format { .. } => ErrorKind::Format,
            Self::Range { .. } => ErrorKind::Range,
            Self::Decode { source, .. } => source.kind(),
            Self::Encode(_) => ErrorKind::Encode,
            Self::Scan(_)
            | Self::UnsupportedType(_)
            | Self::BufferMismatch(..)
            | Self::Arrow(_) => ErrorKind::Storage,
        }
    }

    /// Returns the outermost decode stage, if this error came from a decode.
    pub fn stage(&self) -> Option<DecodeStage> {
        match self {
            Self::Decode { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Returns the underlying `serde_json` syntax error, if that is the root cause.
    pub fn as_syntax_error(&self) -> Option<&serde_json::Error> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Decode { source, .. } => source.as_syntax_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_looks_through_stage_wrapper() {
        let err = NullableError::Range {
            input: "18446744073709551616".to_string(),
        }
        .at(DecodeStage::QuotedString);

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.stage(), Some(DecodeStage::QuotedString));
        assert!(err.to_string().contains("quoted string"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_syntax_error_is_reachable_through_wrapper() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = NullableError::Syntax(json_err).at(DecodeStage::Json);

        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.as_syntax_error().is_some());
    }

    #[test]
    fn test_unwrapped_errors_have_no_stage() {
        let err = NullableError::Scan("driver returned nothing".to_string());
        assert_eq!(err.stage(), None);
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
