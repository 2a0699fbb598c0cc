//! Weather telemetry stream processor.
//!
//! Records (line-delimited JSON) flow through [`dispatch::process_stream`],
//! which passes each one on unchanged while folding samples into per-station
//! temperature extrema and answering `snapshot` / `reset` control records.

pub mod dispatch;
pub mod error;
pub mod io;
pub mod record;
pub mod state;

pub use dispatch::{StreamDispatcher, process_fallible, process_stream};
pub use error::StreamError;
pub use state::{AggregationState, ControlResponse};
