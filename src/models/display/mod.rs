//! Display model implementations for table and JSON output
//!
//! Display models transform quota results into CLI-friendly formats
//! with appropriate column names and serialization.

mod usage;

pub use usage::UsageDisplay;
