//! Filtering pipeline for decoded licensing feeds.
//!
//! This crate answers the two business questions over the typed model:
//! which titles are currently licensed and playable on a given device
//! class, and which manifest endpoints are eligible HD delivery from a
//! specific origin.
//!
//! ## Architecture
//! Records flow through composable stages:
//! 1. [`filters`] drop rights records (wrong device class, inactive window)
//! 2. [`endpoints`] selects manifest endpoints from the surviving titles
//! 3. [`queries`] wires the stages into the two canonical questions
//!
//! Every stage is pure: the clock and all thresholds arrive through
//! [`FilterContext`] and function parameters, and absent optional data
//! excludes a record instead of failing the run.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{queries, FilterContext};
//!
//! let context = FilterContext::new(chrono::Utc::now().naive_utc());
//! let playable = queries::device_playable_titles(
//!     rights_response.rights().to_vec(),
//!     feed_model::DeviceAttribute::Platform,
//!     "ROKU",
//!     &context,
//! )?;
//! let endpoints = queries::active_manifest_endpoints(
//!     rights_response.rights(),
//!     asset_response.assets(),
//!     "level3",
//!     &context,
//! )?;
//! ```

pub mod endpoints;
pub mod filter_pipeline;
pub mod filters;
pub mod queries;
pub mod traits;

// Re-export main types
pub use endpoints::eligible_endpoints;
pub use filter_pipeline::FilterPipeline;
pub use traits::{FilterContext, RightsFilter};
