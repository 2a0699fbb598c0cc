/// Running extrema for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationExtremes {
    pub high: f64,
    pub low: f64,
    /// Timestamp of the last sample applied, in arrival order (not a max).
    pub last_timestamp: i64,
}

impl StationExtremes {
    /// An entry that has not seen a sample yet.
    ///
    /// `high < low` until the first `apply`; callers never observe this.
    pub(crate) fn new() -> Self {
        Self {
            high: f64::NEG_INFINITY,
            low: f64::INFINITY,
            last_timestamp: i64::MIN,
        }
    }

    pub fn apply(&mut self, temperature: f64, timestamp: i64) {
        self.high = self.high.max(temperature);
        self.low = self.low.min(temperature);
        self.last_timestamp = timestamp;
    }
}
