//! Core domain types for the licensing feeds.
//!
//! Every record is an immutable value object built once by the decoder and
//! never mutated. Optional data is `Option<T>` throughout: the decoder maps
//! absent and null input to `None`, and `None` propagates through every
//! predicate as a plain negative answer instead of degrading to a default.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::ValidationError;

/// Video format that qualifies an asset for HD delivery.
pub const HD_VIDEO_FORMAT: &str = "HD";

/// Platform identifier used by the ROKU playability query.
pub const ROKU_PLATFORM: &str = "ROKU";

// =============================================================================
// Feed selection
// =============================================================================

/// Declares how the `results` of a feed payload are interpreted.
///
/// The payloads carry no self-describing tag; the caller knows which feed it
/// fetched and supplies the kind at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Asset,
    Right,
}

/// Device attribute a licensing term can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAttribute {
    Platform,
    Type,
    Provider,
}

impl FromStr for DeviceAttribute {
    type Err = ValidationError;

    /// Parses one of the recognized attribute tags.
    ///
    /// Anything outside the set is an error, not a negative match: a bad tag
    /// is a caller bug and must not look like an ineligible device.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "device_platform" => Ok(DeviceAttribute::Platform),
            "device_type" => Ok(DeviceAttribute::Type),
            "provider" => Ok(DeviceAttribute::Provider),
            _ => Err(ValidationError::UnknownDeviceAttribute {
                tag: tag.to_string(),
            }),
        }
    }
}

// =============================================================================
// Value types
// =============================================================================

/// A playable manifest location for one asset variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub origin: Option<String>,
    pub path: Option<String>,
}

/// Device eligible under a licensing term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub device_platform: Option<String>,
    pub device_type: Option<String>,
    pub provider: Option<String>,
}

impl Device {
    /// Value of the requested attribute, when present.
    pub fn attribute(&self, attribute: DeviceAttribute) -> Option<&str> {
        match attribute {
            DeviceAttribute::Platform => self.device_platform.as_deref(),
            DeviceAttribute::Type => self.device_type.as_deref(),
            DeviceAttribute::Provider => self.provider.as_deref(),
        }
    }
}

/// Localized presentation data for a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizableInformation {
    pub locale: Option<String>,
    pub language: Option<String>,
    pub title_name: Option<String>,
}

// =============================================================================
// Composite types
// =============================================================================

/// One media variant of a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// The feeds send at most one endpoint per asset; the decoder rejects
    /// anything longer.
    pub endpoint: Option<Endpoint>,
    pub video_format: Option<String>,
}

impl Asset {
    /// True when this asset is an HD variant served from `origin`.
    ///
    /// Absent endpoint, absent endpoint origin or absent/non-HD format all
    /// answer `false`.
    pub fn is_eligible_hd(&self, origin: &str) -> bool {
        self.video_format.as_deref() == Some(HD_VIDEO_FORMAT)
            && self
                .endpoint
                .as_ref()
                .is_some_and(|endpoint| endpoint.origin.as_deref() == Some(origin))
    }
}

/// A single licensing window with its eligible devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub territory: Option<String>,
    pub devices: Option<Vec<Device>>,
}

impl Term {
    /// True when `now` falls inside the licensing window (inclusive bounds).
    ///
    /// Bounds are zone-naive; the decoder discards offsets, so the supplied
    /// instant must live in the same implicit zone as the feed data.
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    /// True when some device carries `attribute` equal to `expected`.
    ///
    /// Absent or empty device lists answer `false`.
    pub fn can_play_on(&self, attribute: DeviceAttribute, expected: &str) -> bool {
        self.devices
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|device| device.attribute(attribute) == Some(expected))
    }

    /// The device query fixed to the ROKU platform.
    pub fn can_play_on_roku(&self) -> bool {
        self.can_play_on(DeviceAttribute::Platform, ROKU_PLATFORM)
    }
}

/// Licensing channel and its (at most one) term for a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Right {
    pub channel: Option<String>,
    /// The feeds send at most one term per right; the decoder rejects
    /// anything longer.
    pub term: Option<Term>,
}

// =============================================================================
// Aggregate types
// =============================================================================

/// Per-title record of the asset feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultAsset {
    pub content_id: String,
    pub access_channel: Option<String>,
    pub assets: Option<Vec<Asset>>,
}

impl ResultAsset {
    /// Asset list view; an absent list reads as empty.
    pub fn assets(&self) -> &[Asset] {
        self.assets.as_deref().unwrap_or_default()
    }
}

/// Per-title record of the rights feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRights {
    pub content_id: String,
    pub access_channel: Option<String>,
    pub localizable_information: Option<Vec<LocalizableInformation>>,
    pub rights: Option<Right>,
}

impl ResultRights {
    /// The record's licensing term, when the rights block carries one.
    pub fn first_term(&self) -> Option<&Term> {
        self.rights.as_ref()?.term.as_ref()
    }

    /// First localized title name, for display.
    pub fn display_title(&self) -> Option<&str> {
        self.localizable_information
            .as_deref()?
            .first()?
            .title_name
            .as_deref()
    }
}

/// Decoded feed payload, interpreted per the declared [`FeedKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Absent `results` is an empty outcome, not an error.
    pub results: Option<ResultSet>,
}

/// Homogeneous result set of one feed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResultSet {
    Assets(Vec<ResultAsset>),
    Rights(Vec<ResultRights>),
}

impl Response {
    /// Asset records; empty when `results` is absent or of the other kind.
    pub fn assets(&self) -> &[ResultAsset] {
        match &self.results {
            Some(ResultSet::Assets(results)) => results,
            _ => &[],
        }
    }

    /// Rights records; empty when `results` is absent or of the other kind.
    pub fn rights(&self) -> &[ResultRights] {
        match &self.results {
            Some(ResultSet::Rights(results)) => results,
            _ => &[],
        }
    }
}
