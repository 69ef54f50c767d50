//! Chat gateway
//!
//! Parses incoming chat updates into typed commands and callback actions,
//! routes them through the directory and transition services, and renders
//! the replies. The chat transport itself is external: it delivers updates
//! to the webhook endpoint and renders whatever comes back.

pub mod dispatch;
pub mod parse;
pub mod render;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use dispatch::Gateway;
pub use parse::{CallbackAction, Command};

/// Incoming chat update, as delivered by the external transport.
/// Everything in here is untrusted: raw identifiers and raw strings.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatUpdate {
    /// Chat id of the sender; doubles as the viewer identity
    pub chat_id: i64,
    pub username: Option<String>,
    /// Message text, for command updates
    pub text: Option<String>,
    /// Callback payload, for button presses
    pub callback_data: Option<String>,
}

/// One outgoing chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Reply {
    pub text: String,
    /// Inline keyboard rows; empty when the message has no buttons
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keyboard: Vec<Vec<Button>>,
}

/// One inline keyboard button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Button {
    pub label: String,
    /// Callback payload sent back when the button is pressed
    pub data: String,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Vec::new(),
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Vec<Vec<Button>>) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }
}
