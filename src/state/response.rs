//! Response objects produced by control commands.
//!
//! JSON shapes:
//!
//! snapshot: {"type":"snapshot","asOf":1672531200000,"stations":{"A":{"high":10.0,"low":5.0}}}
//! reset:    {"type":"snapshot","asOf":1672531200000}
//!
//! The reset acknowledgement is tagged `snapshot` as well.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Snapshot,
}

/// High/low pair exposed in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationView {
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    pub as_of: Option<i64>,
    pub stations: BTreeMap<String, StationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetAck {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    pub as_of: Option<i64>,
}

/// What a routed control command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ControlResponse {
    Snapshot(Snapshot),
    Reset(ResetAck),
}
