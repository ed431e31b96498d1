//! Behaviour shared across both types, and the properties that must hold for every `u64`.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use super::*;
use crate::error::ErrorKind;
use crate::storage::StorageValue;
use crate::traits::NullableUint;

fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A record as a service would receive it, with one field of each kind.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
struct Record {
    #[serde(default, skip_serializing_if = "NullUint::is_zero")]
    strict: NullUint,
    #[serde(default)]
    zero: ZeroUint,
}

//==================================================================================
// 1. Generic contracts (hold for both policies)
//==================================================================================

fn check_bare_and_quoted_agree<T: NullableUint + std::fmt::Debug + PartialEq>() {
    let mut bare = T::default();
    bare.unmarshal_json(b"12345").unwrap();
    let mut quoted = T::default();
    quoted.unmarshal_json(b"\"12345\"").unwrap();
    assert_eq!(bare, quoted);
    assert_eq!(bare.is_valid(), quoted.is_valid());
    assert_eq!(bare.raw_value(), quoted.raw_value());
}

fn check_rejects_non_numbers<T: NullableUint>() {
    let huge = format!("1{}", "0".repeat(400));
    let cases: [(&[u8], ErrorKind); 11] = [
        (b"1.1", ErrorKind::Type),
        (b"1e400", ErrorKind::Type),
        (b"true", ErrorKind::Type),
        (b"false", ErrorKind::Type),
        (b"{}", ErrorKind::Type),
        (b"[]", ErrorKind::Type),
        (b"18446744073709551616", ErrorKind::Range),
        (huge.as_bytes(), ErrorKind::Range),
        (b"-5", ErrorKind::Range),
        (b"-0", ErrorKind::Format),
        (b"\"twelve\"", ErrorKind::Format),
    ];
    for (input, kind) in cases {
        let mut n = T::default();
        let err = n.unmarshal_json(input).unwrap_err();
        assert_eq!(err.kind(), kind, "input {:?}", String::from_utf8_lossy(input));
        assert!(!n.is_valid(), "input {:?} left the value valid", input);
    }
}

fn check_from_ptr_matches_from_value<T: NullableUint + std::fmt::Debug + PartialEq>() {
    assert!(!T::from_ptr(None).is_valid());
    assert_eq!(T::from_ptr(None).value_or_zero(), 0);
    assert_eq!(T::from_ptr(Some(&42)), T::from_value(42));
    assert_eq!(T::from_value(42).ptr(), Some(&42));
    assert_eq!(T::default().ptr(), None);
}

#[test]
fn test_bare_and_quoted_agree() {
    init_test_logging();
    check_bare_and_quoted_agree::<NullUint>();
    check_bare_and_quoted_agree::<ZeroUint>();
}

#[test]
fn test_rejects_non_numbers() {
    init_test_logging();
    check_rejects_non_numbers::<NullUint>();
    check_rejects_non_numbers::<ZeroUint>();
}

#[test]
fn test_from_ptr_matches_from_value() {
    check_from_ptr_matches_from_value::<NullUint>();
    check_from_ptr_matches_from_value::<ZeroUint>();
}

#[test]
fn test_null_decodes_per_policy() {
    let mut strict = NullUint::default();
    strict.unmarshal_json(b"null").unwrap();
    assert!(!strict.is_valid());
    assert_eq!(strict.marshal_json().unwrap(), b"null");

    let mut zero = ZeroUint::default();
    zero.unmarshal_json(b"null").unwrap();
    assert!(!zero.is_valid());
    assert_eq!(zero.value_or_zero(), 0);
    assert_eq!(zero.marshal_json().unwrap(), b"0");
}

//==================================================================================
// 2. Serde embedding
//==================================================================================

#[test]
fn test_record_deserialize_mixed_inputs() {
    let record: Record = serde_json::from_str(r#"{"strict": "0", "zero": 0}"#).unwrap();
    assert_eq!(record.strict, NullUint::from_value(0));
    assert!(record.strict.is_valid());
    assert!(!record.zero.is_valid());

    let record: Record = serde_json::from_str(r#"{"strict": null, "zero": "12345"}"#).unwrap();
    assert!(!record.strict.is_valid());
    assert_eq!(record.zero.value_or_zero(), 12345);
}

#[test]
fn test_record_omitted_fields_are_null() {
    let record: Record = serde_json::from_str("{}").unwrap();
    assert_eq!(record, Record::default());
    assert!(!record.strict.is_valid());
    assert!(!record.zero.is_valid());
}

#[test]
fn test_record_serialize_omits_absent() {
    let record = Record::default();
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"zero":0}"#);

    let record = Record {
        strict: NullUint::from_value(0),
        zero: ZeroUint::from_value(7),
    };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"strict":0,"zero":7}"#
    );
}

#[test]
fn test_record_deserialize_errors() {
    for input in [
        r#"{"strict": 1.5}"#,
        r#"{"strict": -1}"#,
        r#"{"strict": true}"#,
        r#"{"zero": "abc"}"#,
        r#"{"zero": 18446744073709551616}"#,
    ] {
        assert!(
            serde_json::from_str::<Record>(input).is_err(),
            "input {} should fail",
            input
        );
    }
}

#[test]
fn test_option_interop() {
    let strict: Option<u64> = NullUint::from_value(0).into();
    assert_eq!(strict, Some(0));
    let zero: Option<u64> = ZeroUint::from_value(0).into();
    assert_eq!(zero, None);
    assert_eq!(NullUint::from(Some(3)), NullUint::from_value(3));
    assert_eq!(ZeroUint::from(None::<u64>), ZeroUint::default());
}

//==================================================================================
// 3. Properties over the whole u64 domain
//==================================================================================

proptest! {
    #[test]
    fn prop_strict_json_roundtrip(n in any::<u64>()) {
        let original = NullUint::from_value(n);
        let mut decoded = NullUint::default();
        decoded.unmarshal_json(&original.marshal_json().unwrap()).unwrap();
        prop_assert!(decoded.is_valid());
        prop_assert_eq!(decoded.ptr(), Some(&n));
    }

    #[test]
    fn prop_zero_json_roundtrip(n in any::<u64>()) {
        let original = ZeroUint::from_value(n);
        let mut decoded = ZeroUint::default();
        decoded.unmarshal_json(&original.marshal_json().unwrap()).unwrap();
        prop_assert_eq!(decoded.is_valid(), n != 0);
        prop_assert_eq!(decoded.value_or_zero(), n);
    }

    #[test]
    fn prop_text_roundtrip(n in any::<u64>(), valid in any::<bool>()) {
        let strict = NullUint::new(n, valid);
        let mut decoded = NullUint::default();
        decoded.unmarshal_text(&strict.marshal_text().unwrap()).unwrap();
        prop_assert_eq!(decoded, strict);
        prop_assert_eq!(decoded.is_valid(), valid);

        let zero = ZeroUint::from_value(n);
        let mut decoded = ZeroUint::default();
        decoded.unmarshal_text(&zero.marshal_text().unwrap()).unwrap();
        prop_assert_eq!(decoded, zero);
        prop_assert_eq!(decoded.is_valid(), zero.is_valid());
    }

    #[test]
    fn prop_quoted_and_bare_decode_identically(n in any::<u64>()) {
        let mut bare = NullUint::default();
        bare.unmarshal_json(n.to_string().as_bytes()).unwrap();
        let mut quoted = NullUint::default();
        quoted.unmarshal_json(format!("\"{}\"", n).as_bytes()).unwrap();
        prop_assert_eq!(bare.as_option(), quoted.as_option());
    }

    #[test]
    fn prop_storage_roundtrip(n in any::<u64>()) {
        let strict = NullUint::from_value(n);
        let mut scanned = NullUint::default();
        scanned.scan(&strict.storage_value()).unwrap();
        prop_assert_eq!(scanned, strict);

        let zero = ZeroUint::from_value(n);
        let mut scanned = ZeroUint::default();
        scanned.scan(&zero.storage_value()).unwrap();
        prop_assert_eq!(scanned.as_option(), zero.as_option());
        prop_assert_eq!(zero.storage_value() == StorageValue::Null, n == 0);
    }

    #[test]
    fn prop_zero_invariant_on_write_paths(n in any::<u64>()) {
        let mut via_set = ZeroUint::default();
        via_set.set_valid(n);
        let mut via_json = ZeroUint::default();
        via_json.unmarshal_json(n.to_string().as_bytes()).unwrap();
        for value in [ZeroUint::from_value(n), via_set, via_json] {
            prop_assert_eq!(value.is_valid(), value.raw_value() != 0);
        }
    }
}
