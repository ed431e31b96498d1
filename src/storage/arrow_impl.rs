// In: src/storage/arrow_impl.rs

//! Arrow columns as a storage layer.
//!
//! Arrow marks absence with a validity bitmap that sits beside the values, the
//! same split the nullable integer types make between `valid` and `value`.
//! Reading goes through [`scan_array_value`] and the regular scan path, so an
//! Arrow column is just another source of [`StorageValue`]s. Writing builds a
//! `UInt64Array` whose null bitmap is each element's storage-level view.

use arrow::array::{Array, AsArray, UInt64Array};
use arrow::datatypes::*;

use super::bridge::StorageValue;
use crate::error::NullableError;
use crate::traits::NullableUint;

fn downcast_failed(dt: &DataType) -> NullableError {
    NullableError::UnsupportedType(format!("Array does not match its declared type {}", dt))
}

/// DATA MARSHALLING
/// Reads the cell at `row` of `array` as a [`StorageValue`].
///
/// Nulls in the validity bitmap become [`StorageValue::Null`]. Integer, float,
/// boolean, UTF-8 and binary columns (regular and large offsets) are supported.
///
/// # Errors
/// * `BufferMismatch` if `row` is past the end of the column.
/// * `UnsupportedType` for any other Arrow type.
pub fn scan_array_value(array: &dyn Array, row: usize) -> Result<StorageValue, NullableError> {
    if row >= array.len() {
        return Err(NullableError::BufferMismatch(row, array.len()));
    }
    if array.is_null(row) {
        return Ok(StorageValue::Null);
    }

    let dt = array.data_type();

    macro_rules! primitive_cell {
        ($T:ty, $variant:ident, $native:ty) => {{
            let values = array
                .as_primitive_opt::<$T>()
                .ok_or_else(|| downcast_failed(dt))?;
            StorageValue::$variant(<$native>::from(values.value(row)))
        }};
    }

    let cell = match dt {
        DataType::Int8 => primitive_cell!(Int8Type, Int, i64),
        DataType::Int16 => primitive_cell!(Int16Type, Int, i64),
        DataType::Int32 => primitive_cell!(Int32Type, Int, i64),
        DataType::Int64 => primitive_cell!(Int64Type, Int, i64),
        DataType::UInt8 => primitive_cell!(UInt8Type, UInt, u64),
        DataType::UInt16 => primitive_cell!(UInt16Type, UInt, u64),
        DataType::UInt32 => primitive_cell!(UInt32Type, UInt, u64),
        DataType::UInt64 => primitive_cell!(UInt64Type, UInt, u64),
        DataType::Float32 => primitive_cell!(Float32Type, Float, f64),
        DataType::Float64 => primitive_cell!(Float64Type, Float, f64),
        DataType::Boolean => {
            let values = array.as_boolean_opt().ok_or_else(|| downcast_failed(dt))?;
            StorageValue::Bool(values.value(row))
        }
        DataType::Utf8 => {
            let values = array
                .as_string_opt::<i32>()
                .ok_or_else(|| downcast_failed(dt))?;
            StorageValue::Text(values.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let values = array
                .as_string_opt::<i64>()
                .ok_or_else(|| downcast_failed(dt))?;
            StorageValue::Text(values.value(row).to_string())
        }
        DataType::Binary => {
            let values = array
                .as_binary_opt::<i32>()
                .ok_or_else(|| downcast_failed(dt))?;
            StorageValue::Bytes(values.value(row).to_vec())
        }
        DataType::LargeBinary => {
            let values = array
                .as_binary_opt::<i64>()
                .ok_or_else(|| downcast_failed(dt))?;
            StorageValue::Bytes(values.value(row).to_vec())
        }
        dt => {
            return Err(NullableError::UnsupportedType(format!(
                "Cannot scan Arrow type {} into a nullable uint",
                dt
            )))
        }
    };
    Ok(cell)
}

/// Scans every row of `array` into a fresh `T`.
pub fn scan_column<T: NullableUint>(array: &dyn Array) -> Result<Vec<T>, NullableError> {
    (0..array.len())
        .map(|row| -> Result<T, NullableError> {
            let mut value = T::default();
            value.scan(&scan_array_value(array, row)?)?;
            Ok(value)
        })
        .collect()
}

/// Builds a `UInt64Array` whose validity bitmap follows each element's
/// storage-level view ([`NullableUint::as_option`]).
pub fn to_uint64_array<T: NullableUint>(values: &[T]) -> UInt64Array {
    values.iter().map(NullableUint::as_option).collect()
}
