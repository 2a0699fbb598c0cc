//! Line-delimited JSON record source and sink around the dispatcher.

pub mod sink;
pub mod source;

pub use sink::JsonlSink;
pub use source::{JsonlSource, SourceError};
