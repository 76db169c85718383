//! Trust scoring for a two-sided service marketplace.
//!
//! [`scoring`] holds the pure scoring pipeline and its HTTP surface, [`imports`] turns feedback
//! exports into rating histories, and the remaining modules carry configuration, telemetry and
//! the application error type shared with the service binary.

pub mod config;
pub mod error;
pub mod imports;
pub mod scoring;
pub mod telemetry;
