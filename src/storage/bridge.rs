//! The nullable-text storage bridge.

use crate::error::NullableError;

/// One cell as handed over by a storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<u64> for StorageValue {
    fn from(n: u64) -> Self {
        StorageValue::UInt(n)
    }
}

impl From<i64> for StorageValue {
    fn from(n: i64) -> Self {
        StorageValue::Int(n)
    }
}

impl From<&str> for StorageValue {
    fn from(text: &str) -> Self {
        StorageValue::Text(text.to_string())
    }
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StorageValue::Null, Into::into)
    }
}

/// A nullable string: what every bridge must leave behind on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullText {
    pub text: String,
    pub valid: bool,
}

impl NullText {
    pub fn valid(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            valid: true,
        }
    }
}

/// **CONTRACT:** Converts an arbitrary storage cell into a [`NullText`], or fails.
///
/// Implementations decide what "NULL" looks like for their storage layer.
/// The caller reparses `text` and never inspects `src` itself.
pub trait NullTextBridge {
    fn scan(&self, src: &StorageValue) -> Result<NullText, NullableError>;
}

/// The bridge a generic nullable string column would use.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextBridge;

impl NullTextBridge for DefaultTextBridge {
    fn scan(&self, src: &StorageValue) -> Result<NullText, NullableError> {
        let text = match src {
            StorageValue::Null => return Ok(NullText::default()),
            StorageValue::Int(n) => n.to_string(),
            StorageValue::UInt(n) => n.to_string(),
            StorageValue::Float(f) => f.to_string(),
            StorageValue::Bool(b) => b.to_string(),
            StorageValue::Text(text) => text.clone(),
            StorageValue::Bytes(bytes) => String::from_utf8(bytes.clone()).map_err(|e| {
                NullableError::Scan(format!("stored bytes are not valid UTF-8: {}", e))
            })?,
        };
        Ok(NullText::valid(text))
    }
}
