//! Record model: message tags and typed sample extraction.
//!
//! Records stay as `serde_json::Value` while they flow through the
//! dispatcher so they can be passed on unchanged; only the fields the
//! aggregation needs are pulled out into typed values.

pub mod kind;
pub mod sample;

pub use kind::{Command, MessageType};
pub use sample::Sample;

/// Key holding the message tag.
pub const TYPE_FIELD: &str = "type";

/// Key holding a control record's command.
pub const COMMAND_FIELD: &str = "command";
