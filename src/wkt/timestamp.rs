use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value as Json;

use super::WktError;
use crate::ProtoJsonCompatible;

/// Largest epoch offset accepted from numeric input, in milliseconds
/// (100,000,000 days either side of the epoch).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// An absolute instant in UTC with sub-second precision.
///
/// Wire shape: RFC 3339 UTC string with a `Z` suffix and at least
/// millisecond precision, e.g. `"2024-01-01T00:00:00.000Z"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Some(instant),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl ProtoJsonCompatible for Timestamp {
    fn to_proto_json(&self) -> Result<Option<Json>, WktError> {
        Ok(self.instant.map(|instant| Json::String(format_instant(instant))))
    }

    /// Accepts an RFC 3339 string or a numeric epoch offset in milliseconds.
    /// Parsed offsets are normalized to UTC; no other timezone handling is
    /// performed.
    fn parse(input: Json) -> Result<Self, WktError> {
        match input {
            Json::String(value) => {
                let instant = DateTime::parse_from_rfc3339(&value)
                    .map_err(|err| WktError::format(err.to_string()))?;
                Ok(Self::new(instant.with_timezone(&Utc)))
            }
            Json::Number(value) => {
                let millis = value
                    .as_f64()
                    .ok_or_else(|| WktError::format("timestamp number is not finite"))?;
                instant_from_epoch_millis(millis).map(Self::new)
            }
            // TODO: handle parsing of structured datetime objects
            Json::Object(_) => Err(WktError::unsupported(
                "non-date objects not supported for date parsing",
            )),
            _ => Err(WktError::format(
                "date can only be marshalled from string or number",
            )),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.instant {
            Some(instant) => serializer.serialize_str(&format_instant(instant)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Json::deserialize(deserializer)?;
        Self::parse(value).map_err(de::Error::custom)
    }
}

/// Formats with millisecond precision when the instant has none finer, so
/// whole seconds still carry a `.000` fraction; sub-millisecond instants get
/// six or nine digits to keep the round trip exact.
fn format_instant(instant: DateTime<Utc>) -> String {
    let precision = if instant.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    instant.to_rfc3339_opts(precision, true)
}

fn instant_from_epoch_millis(millis: f64) -> Result<DateTime<Utc>, WktError> {
    if !millis.is_finite() {
        return Err(WktError::format("timestamp number is not finite"));
    }
    let millis = millis.trunc();
    if millis.abs() > MAX_EPOCH_MILLIS {
        return Err(WktError::format("timestamp out of range"));
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Range check ensures the cast preserves the millisecond value."
    )]
    let millis = millis as i64;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| WktError::format("timestamp out of range"))
}
