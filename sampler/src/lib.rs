//! # Crate sampler-rs
//!
//! ## sampler-rs
//!
//! The `sampler-rs` crate acquires three-axis motion samples (gyroscope or
//! accelerometer) at a fixed tick rate for a bounded session duration and
//! finalizes them into an immutable record.
//!
//! Features include:
//! - A sampling-session state machine (`Idle → Active → Finalized`) driven
//!   by a repeating 0.1s tick.
//! - Synchronous per-tick delivery of atomic (x, y, z) triples to
//!   registered listeners, for live rendering.
//! - Manual stop and automatic completion sharing a single finalization
//!   path, so a record is produced exactly once per session.
//! - Tolerance for ticks on which the hardware yields no reading: the tick
//!   is skipped, elapsed time still advances.
//! - Mock and scripted sensor adapters for tests and demos.
//!
//! **NOTE** Hardware access itself lives behind the [`ports::SensorSource`]
//! port; this crate only consumes delivered triples.

pub mod adapters;
pub mod constants;
mod listeners;
pub mod models;
pub mod ports;
pub mod services;

pub use models::errors::SamplerError;
pub use ports::SensorSource;
pub use services::{run_mock_service, run_service, SamplingConfig, SamplingService};
