//! The zero-as-null `u64`: zero and null are the same value on every output.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, serde_impl::deserialize_decoded, Decoded};
use crate::config::DecodeConfig;
use crate::error::NullableError;
use crate::storage::{self, DefaultTextBridge, NullTextBridge, StorageValue};

/// A nullable `u64` that treats zero as null.
///
/// JSON and text always encode a number (`0` when null). A storage layer sees
/// NULL for zero. Every decode path and [`ZeroUint::from_value`] keep
/// `valid == (value != 0)`.
///
/// [`ZeroUint::new`] is the exception: it stores the pair it is given, so
/// `ZeroUint::new(5, false)` and `ZeroUint::new(0, true)` are reachable. All
/// predicates and encoders are defined by [`ZeroUint::value_or_zero`], so such
/// pairs still behave as the number they resolve to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroUint {
    value: u64,
    valid: bool,
}

impl ZeroUint {
    //==================================================================================
    // 1. Construction
    //==================================================================================

    pub fn new(value: u64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a `ZeroUint` that is null if `n` is zero.
    pub fn from_value(n: u64) -> Self {
        Self::new(n, n != 0)
    }

    /// Creates a `ZeroUint` that is null if `n` is `None` or zero.
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

    /// True for null or zero values.
    pub fn is_zero(&self) -> bool {
        self.value_or_zero() == 0
    }

    pub fn as_option(&self) -> Option<u64> {
        Some(self.value_or_zero()).filter(|&n| n != 0)
    }

    /// True if both resolve to the same number, counting null as zero.
    pub fn equal(&self, other: &Self) -> bool {
        self.value_or_zero() == other.value_or_zero()
    }

    //==================================================================================
    // 3. Mutation
    //==================================================================================

    /// Sets the value; it is non-null unless `n` is zero.
    pub fn set_valid(&mut self, n: u64) {
        self.value = n;
        self.valid = n != 0;
    }

    fn apply(&mut self, decoded: Decoded) {
        match decoded {
            // The stored number is kept; `valid = false` alone makes it zero on output.
            Decoded::Null => self.valid = false,
            Decoded::Number(n) => self.set_valid(n),
        }
    }

    //==================================================================================
    // 4. Codecs
    //==================================================================================

    /// Decodes a JSON number, quoted number, or `null`. `0` decodes to null.
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

    /// Encodes `0` if this value is null. Never encodes `null`.
    pub fn marshal_json(&self) -> Result<Vec<u8>, NullableError> {
        serde_json::to_vec(self).map_err(NullableError::Encode)
    }

    /// Decodes plain text. Blank text, `null` and `0` are null.
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

    /// Encodes `0` if this value is null.
    pub fn marshal_text(&self) -> Result<Vec<u8>, NullableError> {
        Ok(self.to_string().into_bytes())
    }

    //==================================================================================
    // 5. Storage
    //==================================================================================

    pub fn scan(&mut self, src: &StorageValue) -> Result<(), NullableError> {
        self.scan_with(&DefaultTextBridge, src)
    }

    /// Scans through `bridge`. A stored `0` scans to null.
    pub fn scan_with<B>(&mut self, bridge: &B, src: &StorageValue) -> Result<(), NullableError>
    where
        B: NullTextBridge + ?Sized,
    {
        let decoded = storage::scan_decoded(bridge, src)?;
        self.apply(decoded);
        Ok(())
    }

    /// NULL for null or zero values.
    pub fn storage_value(&self) -> StorageValue {
        match self.as_option() {
            Some(n) => StorageValue::Text(codec::format_decimal(n)),
            None => StorageValue::Null,
        }
    }
}

crate::traits::impl_nullable_uint!(ZeroUint);

impl PartialEq for ZeroUint {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for ZeroUint {}

impl Hash for ZeroUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_or_zero().hash(state);
    }
}

impl From<u64> for ZeroUint {
    fn from(n: u64) -> Self {
        Self::from_value(n)
    }
}

impl From<Option<u64>> for ZeroUint {
    fn from(n: Option<u64>) -> Self {
        Self::from_ptr(n.as_ref())
    }
}

impl From<ZeroUint> for Option<u64> {
    fn from(n: ZeroUint) -> Self {
        n.as_option()
    }
}

impl fmt::Display for ZeroUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_decimal(self.value_or_zero()))
    }
}

impl FromStr for ZeroUint {
    type Err = NullableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut n = Self::default();
        n.unmarshal_text(s.as_bytes())?;
        Ok(n)
    }
}

impl Serialize for ZeroUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.value_or_zero())
    }
}

impl<'de> Deserialize<'de> for ZeroUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut n = Self::default();
        n.apply(deserialize_decoded(deserializer)?);
        Ok(n)
    }
}
