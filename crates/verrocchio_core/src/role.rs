//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sender, serialized in Anthropic wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}
