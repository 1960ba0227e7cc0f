//! Advisory Messages

use serde::{Deserialize, Serialize};

/// Category of an observation. Styling is left to whoever renders it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Tip,
    Warning,
    Success,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tip => write!(f, "tip"),
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// One human-readable observation produced by the rule engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl AdvisoryMessage {
    pub fn tip(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Tip, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Warning, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }
}
