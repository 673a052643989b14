use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as Json};

use super::WktError;
use crate::ProtoJsonCompatible;

/// An already-resolved payload carried verbatim.
///
/// No type-URL interpretation or schema resolution is performed, so
/// heterogeneous payloads round-trip only as opaque JSON.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Any {
    pub value: Option<Json>,
}

impl Any {
    pub fn new(value: Json) -> Self {
        Self { value: Some(value) }
    }
}

impl ProtoJsonCompatible for Any {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(self.value.clone())
    }

    fn parse(input: Json) -> Result<Self, WktError> {
        Ok(Self::new(input))
    }
}

impl Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Json::deserialize(deserializer).map(Self::new)
    }
}

/// The JSON null singleton. Decode ignores its input entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullValue;

impl ProtoJsonCompatible for NullValue {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(Some(Json::Null))
    }

    fn parse(_input: Json) -> Result<Self, WktError> {
        Ok(Self)
    }
}

impl Serialize for NullValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for NullValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}

/// A message with no fields. Encodes as `{}`; decode ignores its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

impl ProtoJsonCompatible for Empty {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(Some(Json::Object(Map::new())))
    }

    fn parse(_input: Json) -> Result<Self, WktError> {
        Ok(Self)
    }
}

impl Serialize for Empty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        serializer.serialize_map(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}
