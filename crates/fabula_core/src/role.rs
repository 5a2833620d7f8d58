//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles in a chat-completion conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
    Assistant,
}
