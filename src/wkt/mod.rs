//! One codec per well-known type.
//!
//! Each codec is a leaf with no dependency on the others, except that
//! `Struct`, `Value`, and `ListValue` recursively contain arbitrary JSON
//! values (including nested objects and arrays) by value, so no cycles are
//! possible in a correctly constructed instance.

mod duration;
mod error;
mod passthrough;
mod reserved;
mod structs;
mod timestamp;

pub use duration::Duration;
pub use error::WktError;
pub use passthrough::{Any, Empty, NullValue};
pub use reserved::{FieldMask, Wrapper};
pub use structs::{ListValue, Struct, Value};
pub use timestamp::Timestamp;
