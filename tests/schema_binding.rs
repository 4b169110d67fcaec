//! Schema Binding Tests
//!
//! The timestamp logical type binds only to a `long` physical schema and only
//! under its own annotation name.

use aerotime::logical::{LogicalError, LogicalTimestampType, LogicalType};
use aerotime::schema::{LogicalSchema, PhysicalSchema, SchemaErrorCode, SchemaTag};

const ALL_TAGS: [SchemaTag; 14] = [
    SchemaTag::Null,
    SchemaTag::Boolean,
    SchemaTag::Int,
    SchemaTag::Long,
    SchemaTag::Float,
    SchemaTag::Double,
    SchemaTag::Bytes,
    SchemaTag::String,
    SchemaTag::Record,
    SchemaTag::Enum,
    SchemaTag::Array,
    SchemaTag::Map,
    SchemaTag::Union,
    SchemaTag::Fixed,
];

/// Only `long` validates.
#[test]
fn test_only_long_validates() {
    let lt = LogicalTimestampType::micros();

    for tag in ALL_TAGS {
        let result = lt.validate_schema(&PhysicalSchema::new(tag));
        if tag == SchemaTag::Long {
            assert!(result.is_ok());
        } else {
            match result.unwrap_err() {
                LogicalError::SchemaMismatch {
                    logical_type,
                    expected,
                    actual,
                } => {
                    assert_eq!(logical_type, "timestamp-micros");
                    assert_eq!(expected, SchemaTag::Long);
                    assert_eq!(actual, tag);
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }
}

/// Validation gives the same answer every time.
#[test]
fn test_validation_is_deterministic() {
    let lt = LogicalTimestampType::micros();
    for _ in 0..100 {
        assert!(lt.validate_schema(&PhysicalSchema::long()).is_ok());
        assert!(lt.validate_schema(&PhysicalSchema::new(SchemaTag::Double)).is_err());
    }
}

/// Mismatch message names the logical type and the expected base type.
#[test]
fn test_mismatch_message() {
    let lt = LogicalTimestampType::micros();
    let err = lt
        .validate_schema(&PhysicalSchema::new(SchemaTag::String))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("timestamp-micros"));
    assert!(msg.contains("long"));
    assert!(msg.contains("string"));
}

/// Binding from schema JSON.
#[test]
fn test_bind_from_json() {
    let lt = LogicalTimestampType::micros();

    let schema = LogicalSchema::parse(r#"{"type": "long", "logicalType": "timestamp-micros"}"#).unwrap();
    assert!(lt.bind(&schema).is_ok());

    let wrong_base = LogicalSchema::parse(r#"{"type": "int", "logicalType": "timestamp-micros"}"#).unwrap();
    assert_eq!(lt.bind(&wrong_base).unwrap_err().code(), "AERO_LOGICAL_SCHEMA_MISMATCH");

    let wrong_name = LogicalSchema::parse(r#"{"type": "long", "logicalType": "date"}"#).unwrap();
    let err = lt.bind(&wrong_name).unwrap_err();
    assert_eq!(
        err,
        LogicalError::NameMismatch {
            logical_type: "timestamp-micros".into(),
            found: "date".into(),
        }
    );
}

/// Malformed schema JSON never reaches the logical type.
#[test]
fn test_malformed_schema_json() {
    let err = LogicalSchema::parse(r#"{"logicalType": "timestamp-micros"}"#).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::AeroSchemaMalformed);

    let err = LogicalSchema::parse(r#"{"type": "long64", "logicalType": "timestamp-micros"}"#).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::AeroSchemaUnknownType);
}
