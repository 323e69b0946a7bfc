//! Filter implementations for the rights pipeline.

pub mod active_window;
pub mod device_eligibility;

// Re-export for convenience
pub use active_window::ActiveWindowFilter;
pub use device_eligibility::DeviceEligibilityFilter;
