//! Errors raised while dispatching a record stream.
//!
//! Every variant is fatal: the dispatcher yields it once and then stops.
//! Record-level variants carry the offending record so the caller can tell
//! which input aborted the run.

use crate::io::SourceError;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The record is not a JSON object.
    #[error("malformed record, expected a JSON object: {record}")]
    MalformedRecord { record: Value },

    /// The record is an object without a `type` key.
    #[error("record has no 'type' field: {record}")]
    MissingTypeField { record: Value },

    /// `type` is present but names neither `sample` nor `control`.
    #[error("unknown message type {message_type} in record: {record}")]
    UnknownMessageType { message_type: Value, record: Value },

    #[error("sample record is missing '{field}': {record}")]
    MissingSampleField { field: &'static str, record: Value },

    #[error("sample record has an invalid '{field}': {record}")]
    InvalidSampleField { field: &'static str, record: Value },

    /// The record source failed before producing a record.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl StreamError {
    pub fn missing_sample_field(field: &'static str, record: &Value) -> Self {
        Self::MissingSampleField {
            field,
            record: record.clone(),
        }
    }

    pub fn invalid_sample_field(field: &'static str, record: &Value) -> Self {
        Self::InvalidSampleField {
            field,
            record: record.clone(),
        }
    }

    /// The record that caused the failure, if the failure is record-level.
    pub fn record(&self) -> Option<&Value> {
        match self {
            Self::MalformedRecord { record }
            | Self::MissingTypeField { record }
            | Self::UnknownMessageType { record, .. }
            | Self::MissingSampleField { record, .. }
            | Self::InvalidSampleField { record, .. } => Some(record),
            Self::Source(_) => None,
        }
    }
}
