//! # Feed Model Crate
//!
//! Typed model for the two content-licensing feeds: the *asset* feed
//! (playable media endpoints per title) and the *rights* feed (licensing
//! windows and device eligibility per title).
//!
//! ## Main Components
//!
//! - **types**: the domain records and their predicates
//! - **decode**: `from_value` constructors over raw `serde_json::Value` trees
//! - **error**: the [`ValidationError`] raised on structural violations
//!
//! ## Example Usage
//!
//! ```ignore
//! use feed_model::{FeedKind, Response};
//!
//! let payload: serde_json::Value = fetch_rights_feed()?;
//! let response = Response::from_value(&payload, FeedKind::Right)?;
//!
//! for record in response.rights() {
//!     println!("{}", record.display_title().unwrap_or("<untitled>"));
//! }
//! ```
//!
//! The error contract is deliberately asymmetric: a malformed payload
//! (oversized collection, missing required field) fails the decode, while
//! absent optional data decodes to `None` and simply answers `false` in the
//! predicates.

// Public modules
pub mod decode;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, ValidationError};
pub use types::{
    // Core records
    Asset,
    Device,
    Endpoint,
    LocalizableInformation,
    Response,
    ResultAsset,
    ResultRights,
    ResultSet,
    Right,
    Term,
    // Enums
    DeviceAttribute,
    FeedKind,
    // Constants
    HD_VIDEO_FORMAT,
    ROKU_PLATFORM,
};
