//! Reserved contracts for types whose canonical mapping is not yet built.
//!
//! These exist to hold the interface shape; every operation fails with an
//! explicit unsupported error so callers relying on them fail loudly instead
//! of silently mis-marshalling.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value as Json;

use super::WktError;
use crate::ProtoJsonCompatible;

/// Placeholder for the wrapper well-known types (`DoubleValue`,
/// `StringValue`, and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wrapper;

impl ProtoJsonCompatible for Wrapper {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }

    fn parse(_input: Json) -> Result<Self, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }
}

impl Serialize for Wrapper {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(ser::Error::custom("unimplemented"))
    }
}

impl<'de> Deserialize<'de> for Wrapper {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("unimplemented"))
    }
}

/// Placeholder for `google.protobuf.FieldMask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMask;

impl ProtoJsonCompatible for FieldMask {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }

    fn parse(_input: Json) -> Result<Self, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }
}

impl Serialize for FieldMask {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(ser::Error::custom("unimplemented"))
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("unimplemented"))
    }
}
