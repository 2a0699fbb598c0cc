//! Aggregation state: per-station temperature extrema plus the stream clock.

pub mod extremes;
pub mod response;

pub use extremes::StationExtremes;
pub use response::{ControlResponse, ResetAck, ResponseType, Snapshot, StationView};

use crate::record::Sample;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct AggregationState {
    stations: HashMap<String, StationExtremes>,
    /// Running max over every sample timestamp since construction or reset.
    latest_timestamp: Option<i64>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest_sample(&mut self, sample: &Sample) {
        self.latest_timestamp = Some(match self.latest_timestamp {
            Some(latest) => latest.max(sample.timestamp),
            None => sample.timestamp,
        });

        self.stations
            .entry(sample.station_name.clone())
            .or_insert_with(StationExtremes::new)
            .apply(sample.temperature, sample.timestamp);
    }

    /// Point-in-time view of every station as of the latest timestamp.
    pub fn snapshot(&self) -> Snapshot {
        // A station is only reported once the stream clock has reached its
        // last sample. Always true while both timestamps come from the same
        // samples.
        let stations = self
            .stations
            .iter()
            .filter(|(_, e)| {
                self.latest_timestamp
                    .is_some_and(|latest| e.last_timestamp <= latest)
            })
            .map(|(name, e)| {
                (
                    name.clone(),
                    StationView {
                        high: e.high,
                        low: e.low,
                    },
                )
            })
            .collect();

        Snapshot {
            kind: ResponseType::Snapshot,
            as_of: self.latest_timestamp,
            stations,
        }
    }

    /// Drop all stations and the clock, returning the clock as it was.
    pub fn reset(&mut self) -> ResetAck {
        self.stations.clear();
        ResetAck {
            kind: ResponseType::Snapshot,
            as_of: self.latest_timestamp.take(),
        }
    }

    pub fn latest_timestamp(&self) -> Option<i64> {
        self.latest_timestamp
    }

    pub fn station(&self, name: &str) -> Option<&StationExtremes> {
        self.stations.get(name)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
