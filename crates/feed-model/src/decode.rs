//! Decoders turning raw feed payloads into typed records.
//!
//! Payloads arrive as `serde_json::Value` trees with no guarantee of key
//! presence. Each type decodes through a `from_value` constructor: absent and
//! null input becomes `None`, nested records decode depth-first, and the
//! first violated invariant aborts the whole decode with a
//! [`ValidationError`]. There is no lenient mode.
//!
//! Wire keys use the feeds' camelCase spelling; the decoded structs use the
//! crate's own field names.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::types::{
    Asset, Device, Endpoint, FeedKind, LocalizableInformation, Response, Right, ResultAsset,
    ResultRights, ResultSet, Term,
};

/// Nullable scalar: absent/null reads as `None`, strings pass through, and
/// any other JSON value is coerced to its textual rendering.
fn opt_string(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Required non-empty string, as used for record identifiers.
fn require_string(value: &Value, key: &'static str) -> Result<String> {
    let text = opt_string(value, key).ok_or(ValidationError::MissingField { field: key })?;
    if text.is_empty() {
        return Err(ValidationError::EmptyField { field: key });
    }
    Ok(text)
}

fn ensure_object(value: &Value, field: &'static str) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedShape {
            field,
            expected: "an object",
            fragment: value.to_string(),
        })
    }
}

/// Nullable nested sequence: absent/null reads as `None`; every element must
/// decode or the whole container fails.
fn decode_seq<T>(
    value: &Value,
    key: &'static str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items.iter().map(decode).collect::<Result<Vec<T>>>().map(Some),
        Some(other) => Err(ValidationError::UnexpectedShape {
            field: key,
            expected: "an array",
            fragment: other.to_string(),
        }),
    }
}

/// Zero-or-one wire array collapsed to its single element.
///
/// The feeds declare these collections as sequences but never legitimately
/// send more than one entry; a longer array is a structural violation, not
/// data to be truncated.
fn decode_at_most_one<T>(
    value: &Value,
    key: &'static str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Option<T>> {
    let Some(decoded) = decode_seq(value, key, decode)? else {
        return Ok(None);
    };
    if decoded.len() > 1 {
        return Err(ValidationError::TooManyElements {
            field: key,
            found: decoded.len(),
            fragment: value.get(key).map(Value::to_string).unwrap_or_default(),
        });
    }
    Ok(decoded.into_iter().next())
}

/// Nullable nested object.
fn decode_nested<T>(
    value: &Value,
    key: &'static str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Option<T>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(nested) => decode(nested).map(Some),
    }
}

/// Required licensing-window bound.
///
/// Offset-carrying input keeps its wall-clock reading and drops the offset,
/// so every stored bound lives in one implicit zone; offset-less ISO-8601
/// text is accepted as-is.
fn parse_instant(value: &Value, key: &'static str) -> Result<NaiveDateTime> {
    let text = opt_string(value, key).ok_or(ValidationError::MissingField { field: key })?;
    if let Ok(aware) = DateTime::parse_from_rfc3339(&text) {
        return Ok(aware.naive_local());
    }
    text.parse::<NaiveDateTime>()
        .map_err(|_| ValidationError::InvalidTimestamp {
            field: key,
            value: text,
        })
}

impl Endpoint {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "endpoint")?;
        Ok(Self {
            origin: opt_string(value, "origin"),
            path: opt_string(value, "path"),
        })
    }
}

impl Asset {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "asset")?;
        Ok(Self {
            endpoint: decode_at_most_one(value, "endpoints", Endpoint::from_value)?,
            video_format: opt_string(value, "videoFormat"),
        })
    }
}

impl Device {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "device")?;
        Ok(Self {
            device_platform: opt_string(value, "devicePlatform"),
            device_type: opt_string(value, "deviceType"),
            provider: opt_string(value, "provider"),
        })
    }
}

impl Term {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "term")?;
        Ok(Self {
            start_time: parse_instant(value, "startDateTime")?,
            end_time: parse_instant(value, "endDateTime")?,
            territory: opt_string(value, "territory"),
            devices: decode_seq(value, "devices", Device::from_value)?,
        })
    }
}

impl LocalizableInformation {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "localizableInformation")?;
        Ok(Self {
            locale: opt_string(value, "locale"),
            language: opt_string(value, "language"),
            title_name: opt_string(value, "titleNameMedium"),
        })
    }
}

impl Right {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "rights")?;
        Ok(Self {
            channel: opt_string(value, "channel"),
            term: decode_at_most_one(value, "terms", Term::from_value)?,
        })
    }
}

impl ResultAsset {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "result")?;
        Ok(Self {
            content_id: require_string(value, "contentId")?,
            access_channel: opt_string(value, "accessChannel"),
            assets: decode_seq(value, "assets", Asset::from_value)?,
        })
    }
}

impl ResultRights {
    pub fn from_value(value: &Value) -> Result<Self> {
        ensure_object(value, "result")?;
        Ok(Self {
            content_id: require_string(value, "contentId")?,
            access_channel: opt_string(value, "accessChannel"),
            localizable_information: decode_seq(
                value,
                "localizableInformation",
                LocalizableInformation::from_value,
            )?,
            rights: decode_nested(value, "rights", Right::from_value)?,
        })
    }
}

impl Response {
    /// Decode a feed payload, interpreting `results` per the supplied kind.
    pub fn from_value(value: &Value, kind: FeedKind) -> Result<Self> {
        ensure_object(value, "response")?;
        let results = match kind {
            FeedKind::Asset => {
                decode_seq(value, "results", ResultAsset::from_value)?.map(ResultSet::Assets)
            }
            FeedKind::Right => {
                decode_seq(value, "results", ResultRights::from_value)?.map(ResultSet::Rights)
            }
        };
        Ok(Self { results })
    }
}
