//! Stream dispatcher: pass every record through, then validate and route it.
//!
//! The dispatcher is a pull-driven iterator. Each call to `next` first
//! routes the record handed out by the previous call and only then pulls
//! and hands out the next one, so a consumer always sees a record before it
//! is validated. When routing fails, the error is yielded in place of the
//! next record and the iterator is finished.
//!
//! Control responses are not part of the output sequence. The response of
//! the most recently routed control record is kept aside and can be drained
//! with [`StreamDispatcher::take_response`]. Only one response is held: a
//! response that is not taken before the next control record is routed is
//! replaced.

use crate::error::StreamError;
use crate::io::SourceError;
use crate::record::{COMMAND_FIELD, Command, MessageType, Sample, TYPE_FIELD};
use crate::state::{AggregationState, ControlResponse};
use serde_json::Value;
use std::iter::FusedIterator;

/// Adapter that lifts an infallible record source into the fallible shape.
pub type Records<I> = std::iter::Map<I, fn(Value) -> Result<Value, SourceError>>;

/// Dispatch an in-memory (infallible) sequence of records.
pub fn process_stream<I>(source: I) -> StreamDispatcher<Records<I::IntoIter>>
where
    I: IntoIterator<Item = Value>,
{
    let lift: fn(Value) -> Result<Value, SourceError> = Ok;
    StreamDispatcher::new(source.into_iter().map(lift))
}

/// Dispatch records from a source that can itself fail (I/O, bad JSON).
pub fn process_fallible<I>(source: I) -> StreamDispatcher<I::IntoIter>
where
    I: IntoIterator<Item = Result<Value, SourceError>>,
{
    StreamDispatcher::new(source.into_iter())
}

pub struct StreamDispatcher<I> {
    source: I,
    state: AggregationState,
    /// Record already handed to the consumer but not yet routed.
    pending: Option<Value>,
    response: Option<ControlResponse>,
    emitted: usize,
    finished: bool,
}

impl<I> StreamDispatcher<I>
where
    I: Iterator<Item = Result<Value, SourceError>>,
{
    pub fn new(source: I) -> Self {
        Self {
            source,
            state: AggregationState::new(),
            pending: None,
            response: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Response of the most recently routed control record, if not taken yet.
    ///
    /// The slot holds a single response. Call this after every `next` to see
    /// them all; an untaken response is overwritten by the next control record.
    pub fn take_response(&mut self) -> Option<ControlResponse> {
        self.response.take()
    }

    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    /// Records handed out so far, including one that later failed.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn route(&mut self, record: &Value) -> Result<(), StreamError> {
        let fields = record
            .as_object()
            .ok_or_else(|| StreamError::MalformedRecord {
                record: record.clone(),
            })?;

        let tag = fields
            .get(TYPE_FIELD)
            .ok_or_else(|| StreamError::MissingTypeField {
                record: record.clone(),
            })?;

        match tag.as_str().and_then(MessageType::parse) {
            Some(MessageType::Sample) => {
                let sample = Sample::from_fields(fields, record)?;
                log::trace!(
                    "sample {} t={} at {}",
                    sample.station_name,
                    sample.temperature,
                    sample.timestamp
                );
                self.state.ingest_sample(&sample);
            }
            Some(MessageType::Control) => {
                self.response = self.control(Command::from_value(fields.get(COMMAND_FIELD)));
            }
            None => {
                return Err(StreamError::UnknownMessageType {
                    message_type: tag.clone(),
                    record: record.clone(),
                });
            }
        }

        Ok(())
    }

    fn control(&mut self, command: Command) -> Option<ControlResponse> {
        match command {
            Command::Snapshot => {
                let snapshot = self.state.snapshot();
                log::debug!(
                    "snapshot as of {:?}: {} station(s)",
                    snapshot.as_of,
                    snapshot.stations.len()
                );
                Some(ControlResponse::Snapshot(snapshot))
            }
            Command::Reset => {
                let ack = self.state.reset();
                log::debug!("reset, previous clock {:?}", ack.as_of);
                Some(ControlResponse::Reset(ack))
            }
            Command::Other(name) => {
                log::debug!("ignoring unrecognised control command {:?}", name);
                None
            }
        }
    }
}

impl<I> Iterator for StreamDispatcher<I>
where
    I: Iterator<Item = Result<Value, SourceError>>,
{
    type Item = Result<Value, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(record) = self.pending.take() {
            if let Err(e) = self.route(&record) {
                self.finished = true;
                return Some(Err(e));
            }
        }

        match self.source.next() {
            Some(Ok(record)) => {
                self.pending = Some(record.clone());
                self.emitted += 1;
                Some(Ok(record))
            }
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e.into()))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl<I> FusedIterator for StreamDispatcher<I> where I: Iterator<Item = Result<Value, SourceError>> {}
