// Validation messages

use serde::Serialize;
use std::fmt;

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Field name that failed validation
    pub field: String,

    /// Rendered message
    pub message: String,

    /// Identifier of the validator kind that failed
    pub kind: String,

    /// Value that failed validation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Message {
    /// Create a new message
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind: "custom".to_string(),
            value: None,
        }
    }

    /// Set the validator kind identifier
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of validation messages returned by `Validation::validate`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageGroup {
    messages: Vec<Message>,
}

impl MessageGroup {
    /// Create a new message group
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Check if there are any messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Add a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append all messages of another group
    pub fn append(&mut self, other: MessageGroup) {
        self.messages.extend(other.messages);
    }

    /// Get messages for a specific field
    pub fn for_field(&self, field: &str) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.field == field).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn into_inner(self) -> Vec<Message> {
        self.messages
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.messages.iter().map(|m| {
                serde_json::json!({
                    "field": m.field,
                    "message": m.message,
                    "kind": m.kind,
                    "value": m.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for MessageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}

impl From<Vec<Message>> for MessageGroup {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl IntoIterator for MessageGroup {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageGroup {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_field() {
        let mut group = MessageGroup::default();
        group.push(Message::new("email", "bad").with_kind("ruleform::Email"));
        group.push(Message::new("name", "missing"));
        group.push(Message::new("email", "taken").with_value("a@b.c"));

        assert_eq!(group.len(), 3);
        assert_eq!(group.for_field("email").len(), 2);
        assert!(group.for_field("age").is_empty());
    }

    #[test]
    fn test_to_json_shape() {
        let group = MessageGroup::new(vec![
            Message::new("name", "Field name is required").with_kind("ruleform::PresenceOf"),
        ]);
        let json = group.to_json();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["kind"], "ruleform::PresenceOf");
        assert!(json["errors"][0]["value"].is_null());
    }

    #[test]
    fn test_display() {
        let group = MessageGroup::new(vec![Message::new("a", "x"), Message::new("b", "y")]);
        assert_eq!(group.to_string(), "a: x\nb: y\n");
    }
}
