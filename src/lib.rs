//! Canonical protobuf JSON codecs for the well-known types.
//!
//! Application code builds messages with ergonomic native representations:
//! chrono instants, plain numbers, `serde_json` objects. The canonical JSON
//! ("protojson") specification demands exact wire shapes for the well-known
//! types, so before transmission each one is converted to its wire form, and
//! after receipt converted back. This crate is that mapping layer: one
//! encode/decode pair per well-known type, all conforming to the same
//! two-operation contract.
//!
//! Wire shapes honored exactly:
//! - `Timestamp`: RFC 3339 UTC string, e.g. `"2024-01-01T00:00:00.000Z"`
//! - `Duration`: decimal seconds with nine fractional digits and a trailing
//!   `s`, e.g. `"1.500000000s"`
//! - `Struct`: a JSON object
//! - `Empty`: `{}`
//! - `NullValue`: `null`
//!
//! # Example
//! ```
//! use protojson_wkt::{Duration, ProtoJsonCompatible, Timestamp};
//! use serde_json::json;
//!
//! let duration = Duration::new(1.5);
//! assert_eq!(duration.to_proto_json()?, Some(json!("1.500000000s")));
//!
//! let stamp = Timestamp::parse(json!("2024-01-01T00:00:00.000Z"))?;
//! assert_eq!(stamp.to_proto_json()?, Some(json!("2024-01-01T00:00:00.000Z")));
//! # Ok::<(), protojson_wkt::WktError>(())
//! ```
//!
//! Malformed wire input fails with [`WktError::Format`]; operations that are
//! intentionally left unimplemented (`ListValue`, `Wrapper`, `FieldMask`) fail
//! with [`WktError::Unsupported`] so callers can feature-detect the gap
//! instead of silently mis-marshalling.

mod wkt;

pub use wkt::{
    Any, Duration, Empty, FieldMask, ListValue, NullValue, Struct, Timestamp, Value, WktError,
    Wrapper,
};

/// Conversion between a native representation and canonical protobuf JSON.
///
/// Generated message types hold the most ergonomic native values and call
/// into this contract at the wire boundary. Every operation is a pure,
/// synchronous value transformation; encode clones the held contents, so a
/// caller's later mutation of a native instance never alters an
/// already-produced wire value.
pub trait ProtoJsonCompatible: Sized {
    /// Converts the native value to its canonical protojson shape.
    ///
    /// `Ok(None)` means the value is absent and the field should be omitted
    /// from the enclosing wire object, which is distinct from an explicit
    /// JSON null.
    ///
    /// # Errors
    /// Returns [`WktError::Unsupported`] for codecs that are intentionally
    /// left unimplemented.
    fn to_proto_json(&self) -> Result<Option<serde_json::Value>, WktError>;

    /// Builds a typed instance from a wire-shaped or native-shaped value.
    ///
    /// # Errors
    /// Returns [`WktError::Format`] when the input violates the wire format
    /// and [`WktError::Unsupported`] for inputs the codec refuses to guess a
    /// mapping for.
    fn parse(input: serde_json::Value) -> Result<Self, WktError>;
}
