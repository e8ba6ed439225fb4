//! Feedback entity - the outcome of one opener comparison
//!
//! An append-only, insertion-ordered list of typed messages. Messages may be
//! deferred: the formatter runs only when the log is read, so a log that is
//! dropped unread never pays for name lookups or string building.

use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Kind of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Info,
    Error,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Success => write!(f, "success"),
            MessageType::Info => write!(f, "info"),
            MessageType::Error => write!(f, "error"),
        }
    }
}

type Formatter = Arc<dyn Fn() -> String + Send + Sync>;

/// Message text, either ready or produced on read.
#[derive(Clone)]
pub enum Message {
    Text(String),
    Deferred(Formatter),
}

impl Message {
    pub fn deferred(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Message::Deferred(Arc::new(f))
    }

    /// Produce the message text.
    pub fn text(&self) -> String {
        match self {
            Message::Text(s) => s.clone(),
            Message::Deferred(f) => f(),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Message::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Text(s)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Text(s.to_string())
    }
}

/// Ordered record of a comparison run.
#[derive(Clone, Default)]
pub struct Feedback {
    entries: Vec<(MessageType, Message)>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, kind: MessageType, message: impl Into<Message>) {
        self.entries.push((kind, message.into()));
    }

    pub fn add_success(&mut self, text: impl Into<Message>) {
        self.add_message(MessageType::Success, text);
    }

    pub fn add_info(&mut self, text: impl Into<Message>) {
        self.add_message(MessageType::Info, text);
    }

    pub fn add_error(&mut self, text: impl Into<Message>) {
        self.add_message(MessageType::Error, text);
    }

    pub fn add_success_with(&mut self, f: impl Fn() -> String + Send + Sync + 'static) {
        self.add_message(MessageType::Success, Message::deferred(f));
    }

    pub fn add_info_with(&mut self, f: impl Fn() -> String + Send + Sync + 'static) {
        self.add_message(MessageType::Info, Message::deferred(f));
    }

    pub fn add_error_with(&mut self, f: impl Fn() -> String + Send + Sync + 'static) {
        self.add_message(MessageType::Error, Message::deferred(f));
    }

    /// Every entry with its text, in insertion order.
    pub fn entries(&self) -> Vec<(MessageType, String)> {
        self.entries
            .iter()
            .map(|(kind, message)| (*kind, message.text()))
            .collect()
    }

    /// Every message text, in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|(_, message)| message.text()).collect()
    }

    /// Entry kinds without evaluating any text.
    pub fn kinds(&self) -> impl Iterator<Item = MessageType> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    pub fn count(&self, kind: MessageType) -> usize {
        self.kinds().filter(|k| *k == kind).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(MessageType::Error) > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

impl PartialEq for Feedback {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries() == other.entries()
    }
}

struct EntryRecord<'a> {
    kind: MessageType,
    message: &'a str,
}

impl Serialize for EntryRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FeedbackEntry", 2)?;
        s.serialize_field("type", &self.kind)?;
        s.serialize_field("message", self.message)?;
        s.end()
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (kind, message) in &self.entries {
            let text = message.text();
            seq.serialize_element(&EntryRecord {
                kind: *kind,
                message: &text,
            })?;
        }
        seq.end()
    }
}
