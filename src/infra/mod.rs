//! Infrastructure adapters and runtime bootstrap.

pub mod error;
pub mod opener;
pub mod telemetry;
