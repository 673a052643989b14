use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value as Json;

use super::WktError;
use crate::ProtoJsonCompatible;

/// A signed span of time in seconds with fractional precision.
///
/// Wire shape: decimal seconds with exactly nine fractional digits and a
/// single trailing `s`, e.g. `"1.500000000s"`. The fraction is fixed at
/// nanosecond granularity regardless of input precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    pub seconds: Option<f64>,
}

impl Duration {
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds: Some(seconds),
        }
    }
}

impl ProtoJsonCompatible for Duration {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(Some(Json::String(format_seconds(self.seconds))))
    }

    fn parse(input: Json) -> Result<Self, WktError> {
        let Json::String(value) = input else {
            return Err(WktError::format("duration must be a string"));
        };
        parse_seconds(&value).map(Self::new)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_seconds(self.seconds))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        Self::parse(value).map_err(de::Error::custom)
    }
}

/// An absent value encodes as the bare `"0s"`; a held value always carries
/// the full nine fractional digits.
fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(seconds) => format!("{seconds:.9}s"),
        None => String::from("0s"),
    }
}

fn parse_seconds(value: &str) -> Result<f64, WktError> {
    if !value.ends_with('s') {
        return Err(WktError::format("duration must end with s"));
    }
    // Checked independently of the suffix test so an embedded "s" (as in
    // "1.5s0s") is rejected even though the string ends with "s".
    if value.find('s') != Some(value.len() - 1) {
        return Err(WktError::format("duration must only contain one s"));
    }
    value[..value.len() - 1]
        .parse::<f64>()
        .map_err(|_| WktError::format("duration is not a valid decimal number"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Duration;
    use crate::{ProtoJsonCompatible, WktError};

    #[test]
    fn encodes_nine_fractional_digits() {
        assert_eq!(
            Duration::new(1.5).to_proto_json().unwrap(),
            Some(json!("1.500000000s"))
        );
    }

    #[test]
    fn encodes_negative_seconds() {
        assert_eq!(
            Duration::new(-3.25).to_proto_json().unwrap(),
            Some(json!("-3.250000000s"))
        );
    }

    #[test]
    fn absent_seconds_encode_as_zero() {
        assert_eq!(
            Duration::default().to_proto_json().unwrap(),
            Some(json!("0s"))
        );
    }

    #[test]
    fn round_trip_recovers_seconds() {
        for seconds in [0.0, 1.5, -2.75, 123_456.789] {
            let encoded = Duration::new(seconds).to_proto_json().unwrap().unwrap();
            let decoded = Duration::parse(encoded).unwrap();
            assert_eq!(decoded.seconds, Some(seconds));
        }
    }

    #[test]
    fn rejects_non_string_input() {
        let err = Duration::parse(json!(1.5)).unwrap_err();
        assert_eq!(err, WktError::Format("duration must be a string".into()));
    }

    #[test]
    fn rejects_missing_suffix() {
        let err = Duration::parse(json!("1.5")).unwrap_err();
        assert_eq!(err, WktError::Format("duration must end with s".into()));
    }

    #[test]
    fn rejects_embedded_suffix() {
        let err = Duration::parse(json!("1.5s0s")).unwrap_err();
        assert_eq!(
            err,
            WktError::Format("duration must only contain one s".into())
        );
    }

    #[test]
    fn rejects_non_numeric_remainder() {
        let err = Duration::parse(json!("abcs")).unwrap_err();
        assert!(matches!(err, WktError::Format(_)));
    }

    #[test]
    fn serde_serialization_matches_encode() {
        let json = serde_json::to_value(Duration::new(1.5)).unwrap();
        assert_eq!(json, json!("1.500000000s"));
        let back: Duration = serde_json::from_value(json).unwrap();
        assert_eq!(back.seconds, Some(1.5));
    }
}
