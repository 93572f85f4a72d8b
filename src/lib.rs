//! gapchart-rs: animated bubble chart engine.
//!
//! This crate models the income/life-expectancy world chart as a
//! host-driven engine: a normalized dataset, a playback-controlled time
//! cursor, keyed mark reconciliation with short transitions, and a
//! backend-agnostic render frame handed to pluggable renderers.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
