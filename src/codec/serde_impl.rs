//! The `serde` visitor behind both types' `Deserialize` impls.
//!
//! Unlike [`decode_json`](super::decode_json) this sees already-tokenised input,
//! so it works for any self-describing format, not only JSON. serde_json hands
//! integers beyond `u64::MAX` to `visit_f64`, so those surface as type errors here.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

use super::{decimal::parse_decimal, Decoded};
use crate::error::{DecodeStage, NullableError};

struct DecodedVisitor;

impl<'de> Visitor<'de> for DecodedVisitor {
    type Value = Decoded;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned integer, a quoted unsigned integer, or null")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decoded::Number(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map(Decoded::Number).map_err(|_| {
            de::Error::custom(NullableError::Range {
                input: v.to_string(),
            })
        })
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map(Decoded::Number).map_err(|_| {
            de::Error::custom(NullableError::Range {
                input: v.to_string(),
            })
        })
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(NullableError::InvalidType(format!(
            "floating point {} (non-integer or beyond u64::MAX)",
            v
        ))))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_decimal(v)
            .map(Decoded::Number)
            .map_err(|e| de::Error::custom(e.at(DecodeStage::QuotedString)))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decoded::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decoded::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_decoded(deserializer)
    }
}

/// Drives [`DecodedVisitor`] over any self-describing deserializer.
pub(crate) fn deserialize_decoded<'de, D>(deserializer: D) -> Result<Decoded, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecodedVisitor)
}
