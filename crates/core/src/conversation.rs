//! Conversation types: authors and messages

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// The person writing in
    Contact,
    /// The auto-reply twin
    Agent,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Author::Contact => "contact",
            Author::Agent => "agent",
        }
    }

    /// Badge shown next to a message in the transcript
    pub fn badge(&self) -> &'static str {
        match self {
            Author::Contact => "Contact",
            Author::Agent => "Auto Twin",
        }
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Author {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "contact" => Ok(Author::Contact),
            "agent" => Ok(Author::Agent),
            other => Err(Error::UnknownAuthor(other.to_string())),
        }
    }
}

/// A single message in the thread
///
/// `timestamp` (milliseconds) orders the thread and doubles as its display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub author: Author,
    pub text: String,
    pub timestamp: i64,
}

impl ConversationMessage {
    pub fn new(author: Author, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            author,
            text: text.into(),
            timestamp,
        }
    }

    /// Message from the contact
    pub fn contact(text: impl Into<String>, timestamp: i64) -> Self {
        Self::new(Author::Contact, text, timestamp)
    }

    /// Message sent by the twin
    pub fn agent(text: impl Into<String>, timestamp: i64) -> Self {
        Self::new(Author::Agent, text, timestamp)
    }

    pub fn is_from_agent(&self) -> bool {
        self.author == Author::Agent
    }
}
