use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value as Json};

use super::WktError;
use crate::ProtoJsonCompatible;

/// An arbitrary JSON-object-shaped value.
///
/// Field values follow the [`Value`] rules recursively; the codec passes the
/// object through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Struct {
    pub fields: Option<Map<String, Json>>,
}

impl Struct {
    pub fn new(fields: Map<String, Json>) -> Self {
        Self {
            fields: Some(fields),
        }
    }
}

impl ProtoJsonCompatible for Struct {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(self.fields.clone().map(Json::Object))
    }

    /// Accepts an object directly, or a string containing JSON text that
    /// parses to an object. Any other input type is an explicit capability
    /// gap rather than a silent coercion.
    fn parse(input: Json) -> Result<Self, WktError> {
        match input {
            Json::Object(fields) => Ok(Self::new(fields)),
            Json::String(text) => {
                let parsed: Json =
                    serde_json::from_str(&text).map_err(|err| WktError::format(err.to_string()))?;
                let Json::Object(fields) = parsed else {
                    return Err(WktError::format("struct JSON text must be an object"));
                };
                Ok(Self::new(fields))
            }
            _ => Err(WktError::unsupported("unimplemented")),
        }
    }
}

impl Serialize for Struct {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.fields {
            Some(fields) => fields.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Struct {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        Self::parse(value).map_err(de::Error::custom)
    }
}

/// An arbitrary JSON-compatible value, passed through unchanged in both
/// directions with no validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    pub value: Option<Json>,
}

impl Value {
    pub fn new(value: Json) -> Self {
        Self { value: Some(value) }
    }
}

impl ProtoJsonCompatible for Value {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(self.value.clone())
    }

    fn parse(input: Json) -> Result<Self, WktError> {
        Ok(Self::new(input))
    }
}

impl Serialize for Value {
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

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Json::deserialize(deserializer).map(Self::new)
    }
}

/// A sequence of arbitrary JSON values.
///
/// The holder exists, but its codec is declared and intentionally not
/// implemented; both operations fail unconditionally so callers can
/// feature-detect the gap instead of relying on a silent no-op.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListValue {
    pub values: Option<Vec<Json>>,
}

impl ListValue {
    pub fn new(values: Vec<Json>) -> Self {
        Self {
            values: Some(values),
        }
    }
}

impl ProtoJsonCompatible for ListValue {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }

    fn parse(_input: Json) -> Result<Self, WktError> {
        Err(WktError::unsupported("unimplemented"))
    }
}

impl Serialize for ListValue {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(ser::Error::custom("unimplemented"))
    }
}

impl<'de> Deserialize<'de> for ListValue {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("unimplemented"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ListValue, Struct, Value};
    use crate::{ProtoJsonCompatible, WktError};

    #[test]
    fn struct_object_and_json_text_decode_identically() {
        let from_object = Struct::parse(json!({"a": 1})).unwrap();
        let from_text = Struct::parse(json!(r#"{"a":1}"#)).unwrap();
        assert_eq!(from_object, from_text);
    }

    #[test]
    fn struct_encode_returns_held_object() {
        let decoded = Struct::parse(json!({"a": 1, "b": [true, null]})).unwrap();
        assert_eq!(
            decoded.to_proto_json().unwrap(),
            Some(json!({"a": 1, "b": [true, null]}))
        );
    }

    #[test]
    fn absent_struct_encodes_as_absent() {
        assert_eq!(Struct::default().to_proto_json().unwrap(), None);
    }

    #[test]
    fn struct_rejects_other_input_types() {
        let err = Struct::parse(json!(42)).unwrap_err();
        assert_eq!(err, WktError::Unsupported("unimplemented".into()));
    }

    #[test]
    fn struct_rejects_json_text_that_is_not_an_object() {
        let err = Struct::parse(json!("[1, 2]")).unwrap_err();
        assert!(matches!(err, WktError::Format(_)));
    }

    #[test]
    fn struct_rejects_malformed_json_text() {
        let err = Struct::parse(json!("{not json")).unwrap_err();
        assert!(matches!(err, WktError::Format(_)));
    }

    #[test]
    fn value_passes_through_unchanged() {
        for input in [json!(null), json!(1.5), json!("text"), json!({"k": [1]})] {
            let decoded = Value::parse(input.clone()).unwrap();
            assert_eq!(decoded.to_proto_json().unwrap(), Some(input));
        }
    }

    #[test]
    fn absent_value_encodes_as_absent() {
        assert_eq!(Value::default().to_proto_json().unwrap(), None);
    }

    #[test]
    fn list_value_operations_always_fail() {
        let err = ListValue::new(vec![json!(1)]).to_proto_json().unwrap_err();
        assert_eq!(err, WktError::Unsupported("unimplemented".into()));
        let err = ListValue::parse(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, WktError::Unsupported("unimplemented".into()));
    }
}
