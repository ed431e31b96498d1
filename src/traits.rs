//! This module defines the interface shared by both nullable integer types.
//!
//! `NullUint` and `ZeroUint` implement every operation as inherent methods;
//! this trait exists so storage and test code can be written once over either.

use crate::config::DecodeConfig;
use crate::error::NullableError;
use crate::storage::{DefaultTextBridge, NullTextBridge, StorageValue};

/// A nullable `u64` with a fixed policy for what "absent" means.
pub trait NullableUint: Sized + Copy + Default {
    /// Raw construction. No policy is applied to the pair.
    fn new(value: u64, valid: bool) -> Self;
    fn from_value(n: u64) -> Self;
    fn from_ptr(n: Option<&u64>) -> Self;

    fn is_valid(&self) -> bool;
    /// The stored number, whether or not it is valid.
    fn raw_value(&self) -> u64;
    fn ptr(&self) -> Option<&u64>;
    fn value_or_zero(&self) -> u64;
    fn is_zero(&self) -> bool;
    /// The value as a NULL-aware storage layer sees it.
    fn as_option(&self) -> Option<u64>;
    fn equal(&self, other: &Self) -> bool;

    fn set_valid(&mut self, n: u64);

    fn unmarshal_json_with(&mut self, data: &[u8], config: &DecodeConfig) -> Result<(), NullableError>;
    fn marshal_json(&self) -> Result<Vec<u8>, NullableError>;
    fn unmarshal_text_with(&mut self, text: &[u8], config: &DecodeConfig) -> Result<(), NullableError>;
    fn marshal_text(&self) -> Result<Vec<u8>, NullableError>;

    fn scan_with<B>(&mut self, bridge: &B, src: &StorageValue) -> Result<(), NullableError>
    where
        B: NullTextBridge + ?Sized;
    fn storage_value(&self) -> StorageValue;

    fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), NullableError> {
        self.unmarshal_json_with(data, &DecodeConfig::STANDARD)
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), NullableError> {
        self.unmarshal_text_with(text, &DecodeConfig::STANDARD)
    }

    fn scan(&mut self, src: &StorageValue) -> Result<(), NullableError> {
        self.scan_with(&DefaultTextBridge, src)
    }
}

// Forward the trait to the type's inherent methods of the same name.
macro_rules! impl_nullable_uint {
    ($T:ty) => {
        impl $crate::traits::NullableUint for $T {
            fn new(value: u64, valid: bool) -> Self {
                <$T>::new(value, valid)
            }
            fn from_value(n: u64) -> Self {
                <$T>::from_value(n)
            }
            fn from_ptr(n: Option<&u64>) -> Self {
                <$T>::from_ptr(n)
            }
            fn is_valid(&self) -> bool {
                <$T>::is_valid(self)
            }
            fn raw_value(&self) -> u64 {
                <$T>::raw_value(self)
            }
            fn ptr(&self) -> Option<&u64> {
                <$T>::ptr(self)
            }
            fn value_or_zero(&self) -> u64 {
                <$T>::value_or_zero(self)
            }
            fn is_zero(&self) -> bool {
                <$T>::is_zero(self)
            }
            fn as_option(&self) -> Option<u64> {
                <$T>::as_option(self)
            }
            fn equal(&self, other: &Self) -> bool {
                <$T>::equal(self, other)
            }
            fn set_valid(&mut self, n: u64) {
                <$T>::set_valid(self, n)
            }
            fn unmarshal_json_with(
                &mut self,
                data: &[u8],
                config: &$crate::config::DecodeConfig,
            ) -> Result<(), $crate::error::NullableError> {
                <$T>::unmarshal_json_with(self, data, config)
            }
            fn marshal_json(&self) -> Result<Vec<u8>, $crate::error::NullableError> {
                <$T>::marshal_json(self)
            }
            fn unmarshal_text_with(
                &mut self,
                text: &[u8],
                config: &$crate::config::DecodeConfig,
            ) -> Result<(), $crate::error::NullableError> {
                <$T>::unmarshal_text_with(self, text, config)
            }
            fn marshal_text(&self) -> Result<Vec<u8>, $crate::error::NullableError> {
                <$T>::marshal_text(self)
            }
            fn scan_with<B>(
                &mut self,
                bridge: &B,
                src: &$crate::storage::StorageValue,
            ) -> Result<(), $crate::error::NullableError>
            where
                B: $crate::storage::NullTextBridge + ?Sized,
            {
                <$T>::scan_with(self, bridge, src)
            }
            fn storage_value(&self) -> $crate::storage::StorageValue {
                <$T>::storage_value(self)
            }
        }
    };
}

pub(crate) use impl_nullable_uint;
