//! Error type for feed decoding.

use thiserror::Error;

/// Structural violations raised while decoding a feed payload.
///
/// Decoding fails eagerly at the first violated invariant and the failure is
/// fatal for the whole response. Absent optional data is never an error; it
/// decodes to `None` and flows through the predicates as a normal negative
/// outcome.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A required identifier decoded to an empty string.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// A zero-or-one collection arrived with more than one element.
    #[error("field `{field}` holds at most one element but decoded {found}: {fragment}")]
    TooManyElements {
        field: &'static str,
        found: usize,
        fragment: String,
    },

    /// A node does not have the JSON shape the schema expects.
    #[error("`{field}` expects {expected}: {fragment}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
        fragment: String,
    },

    /// A timestamp field failed to parse.
    #[error("invalid timestamp in `{field}`: {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    /// A device-attribute tag outside the recognized set.
    #[error("unknown device attribute `{tag}` (expected device_platform, device_type or provider)")]
    UnknownDeviceAttribute { tag: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ValidationError>;
