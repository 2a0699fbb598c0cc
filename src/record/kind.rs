/// Declared `type` of an incoming record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Sample,
    Control,
}

impl MessageType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "sample" => Some(Self::Sample),
            "control" => Some(Self::Control),
            _ => None,
        }
    }
}

/// `command` carried by a control record.
///
/// Anything that is not a known command (including a missing or non-string
/// value) is `Other`, which the dispatcher treats as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Snapshot,
    Reset,
    Other(Option<String>),
}

impl Command {
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        match value.and_then(|v| v.as_str()) {
            Some("snapshot") => Self::Snapshot,
            Some("reset") => Self::Reset,
            Some(other) => Self::Other(Some(other.to_string())),
            None => Self::Other(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_type_tags() {
        assert_eq!(MessageType::parse("sample"), Some(MessageType::Sample));
        assert_eq!(MessageType::parse("control"), Some(MessageType::Control));
        assert_eq!(MessageType::parse("Sample"), None);
    }

    #[test]
    fn commands_fall_back_to_other() {
        assert_eq!(Command::from_value(Some(&json!("snapshot"))), Command::Snapshot);
        assert_eq!(Command::from_value(Some(&json!("reset"))), Command::Reset);
        assert_eq!(
            Command::from_value(Some(&json!("purge"))),
            Command::Other(Some("purge".to_string()))
        );
        assert_eq!(Command::from_value(Some(&json!(7))), Command::Other(None));
        assert_eq!(Command::from_value(None), Command::Other(None));
    }
}
