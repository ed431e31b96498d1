//! The strict-null `u64`: zero is an ordinary value, only explicit absence is null.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, serde_impl::deserialize_decoded, Decoded};
use crate::config::DecodeConfig;
use crate::error::NullableError;
use crate::storage::{self, DefaultTextBridge, NullTextBridge, StorageValue};

/// A nullable `u64` that does not consider zero to be null.
///
/// JSON: `null` when invalid, a bare number otherwise. Text: empty when invalid.
/// Decoding accepts a number, a quoted number, or `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUint {
    value: u64,
    valid: bool,
}

impl NullUint {
    //==================================================================================
    // 1. Construction
    //==================================================================================

    pub fn new(value: u64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a `NullUint` that is always valid, including for zero.
    pub fn from_value(n: u64) -> Self {
        Self::new(n, true)
    }

    /// Creates a `NullUint` that is null if `n` is `None`.
    pub fn from_ptr(n: Option<&u64>) -> Self {
        n.map_or_else(Self::default, |&n| Self::from_value(n))
    }

    //==================================================================================
    // 2. Projection
    //==================================================================================

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn raw_value(&self) -> u64 {
        self.value
    }

    /// Returns a reference to the value, or `None` if null.
    pub fn ptr(&self) -> Option<&u64> {
        self.valid.then_some(&self.value)
    }

    pub fn value_or_zero(&self) -> u64 {
        if self.valid {
            self.value
        } else {
            0
        }
    }

    /// True for null values only. A valid zero is *not* zero here; this is the
    /// predicate for omitting absent fields, e.g. `skip_serializing_if`.
    pub fn is_zero(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<u64> {
        self.ptr().copied()
    }

    /// True if both are null, or both are valid with the same value.
    pub fn equal(&self, other: &Self) -> bool {
        self.valid == other.valid && (!self.valid || self.value == other.value)
    }

    //==================================================================================
    // 3. Mutation
    //==================================================================================

    /// Sets the value and marks it non-null.
    pub fn set_valid(&mut self, n: u64) {
        self.value = n;
        self.valid = true;
    }

    fn apply(&mut self, decoded: Decoded) {
        match decoded {
            Decoded::Null => self.valid = false,
            Decoded::Number(n) => self.set_valid(n),
        }
    }

    //==================================================================================
    // 4. Codecs
    //==================================================================================

    /// Decodes a JSON number, quoted number, or `null`.
    /// On error the previous state is kept.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), NullableError> {
        self.unmarshal_json_with(data, &DecodeConfig::STANDARD)
    }

    pub fn unmarshal_json_with(
        &mut self,
        data: &[u8],
        config: &DecodeConfig,
    ) -> Result<(), NullableError> {
        let decoded = codec::decode_json(data, config)?;
        self.apply(decoded);
        Ok(())
    }

    /// Encodes `null` if this value is null.
    pub fn marshal_json(&self) -> Result<Vec<u8>, NullableError> {
        serde_json::to_vec(self).map_err(NullableError::Encode)
    }

    /// Decodes plain text. Blank text or `null` is null.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), NullableError> {
        self.unmarshal_text_with(text, &DecodeConfig::STANDARD)
    }

    pub fn unmarshal_text_with(
        &mut self,
        text: &[u8],
        config: &DecodeConfig,
    ) -> Result<(), NullableError> {
        let decoded = codec::decode_text(text, config)?;
        self.apply(decoded);
        Ok(())
    }

    /// Encodes blank text if this value is null.
    pub fn marshal_text(&self) -> Result<Vec<u8>, NullableError> {
        Ok(self.to_string().into_bytes())
    }

    //==================================================================================
    // 5. Storage
    //==================================================================================

    pub fn scan(&mut self, src: &StorageValue) -> Result<(), NullableError> {
        self.scan_with(&DefaultTextBridge, src)
    }

    pub fn scan_with<B>(&mut self, bridge: &B, src: &StorageValue) -> Result<(), NullableError>
    where
        B: NullTextBridge + ?Sized,
    {
        let decoded = storage::scan_decoded(bridge, src)?;
        self.apply(decoded);
        Ok(())
    }

    pub fn storage_value(&self) -> StorageValue {
        match self.ptr() {
            Some(&n) => StorageValue::Text(codec::format_decimal(n)),
            None => StorageValue::Null,
        }
    }
}

crate::traits::impl_nullable_uint!(NullUint);

impl PartialEq for NullUint {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for NullUint {}

impl Hash for NullUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl From<u64> for NullUint {
    fn from(n: u64) -> Self {
        Self::from_value(n)
    }
}

impl From<Option<u64>> for NullUint {
    fn from(n: Option<u64>) -> Self {
        Self::from_ptr(n.as_ref())
    }
}

impl From<NullUint> for Option<u64> {
    fn from(n: NullUint) -> Self {
        n.as_option()
    }
}

/// The text encoding: blank when null.
impl fmt::Display for NullUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr() {
            Some(&n) => f.write_str(&codec::format_decimal(n)),
            None => Ok(()),
        }
    }
}

impl FromStr for NullUint {
    type Err = NullableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut n = Self::default();
        n.unmarshal_text(s.as_bytes())?;
        Ok(n)
    }
}

impl Serialize for NullUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.ptr() {
            Some(&n) => serializer.serialize_u64(n),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut n = Self::default();
        n.apply(deserialize_decoded(deserializer)?);
        Ok(n)
    }
}
