//! Application services: rendering, conversion, and the interactive session.

pub mod convert;
pub mod error;
pub mod render;
pub mod session;
