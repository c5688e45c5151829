//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: runtime specific implementations (timers, settings IO, sinks).

pub mod adapters;
pub mod ports;
