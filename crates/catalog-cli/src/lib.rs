//! CLI library components for catalog conversion.

pub mod logging;
pub mod pipeline;
pub mod types;
