use crate::error::StreamError;
use serde_json::{Map, Value};

pub const STATION_NAME: &str = "stationName";
pub const TEMPERATURE: &str = "temperature";
pub const TIMESTAMP: &str = "timestamp";

/// A temperature reading extracted from a `sample` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub station_name: String,
    pub temperature: f64,
    /// Epoch millis.
    pub timestamp: i64,
}

impl Sample {
    /// Pull the three sample fields out of a record object.
    ///
    /// `record` is the full record and is only used for error context.
    pub fn from_fields(fields: &Map<String, Value>, record: &Value) -> Result<Self, StreamError> {
        let station_name = require(fields, STATION_NAME, record)?
            .as_str()
            .ok_or_else(|| StreamError::invalid_sample_field(STATION_NAME, record))?
            .to_string();

        let temperature = require(fields, TEMPERATURE, record)?
            .as_f64()
            .ok_or_else(|| StreamError::invalid_sample_field(TEMPERATURE, record))?;

        let timestamp = require(fields, TIMESTAMP, record)?
            .as_i64()
            .ok_or_else(|| StreamError::invalid_sample_field(TIMESTAMP, record))?;

        Ok(Self {
            station_name,
            temperature,
            timestamp,
        })
    }
}

fn require<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
    record: &Value,
) -> Result<&'a Value, StreamError> {
    fields
        .get(field)
        .ok_or_else(|| StreamError::missing_sample_field(field, record))
}
