use async_trait::async_trait;

use crate::Result;

// ── Message shapes ──────────────────────────────────────────────────────────

/// Rich embed, reduced to the parts the relay flow uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
}

/// Custom guild emoji shown on a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEmoji {
    pub name: String,
    pub id: u64,
    pub animated: bool,
}

/// Primary-style button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub emoji: Option<CustomEmoji>,
}

/// Public panel message: one embed and one button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub embed: Embed,
    pub button: Button,
}

/// Ephemeral prompt with a user picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPicker {
    pub prompt: String,
    pub custom_id: String,
    pub placeholder: String,
    pub min_values: u8,
    pub max_values: u8,
}

/// Form (modal) with a single text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageForm {
    pub custom_id: String,
    pub title: String,
    pub input: TextInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub custom_id: String,
    pub label: String,
    pub required: bool,
    /// Multi-line input.
    pub paragraph: bool,
}

/// Where a message ended up after it was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub channel_id: String,
    pub message_id: String,
}

/// A channel found in the platform's live registry.
///
/// The router passes [`RelayOutbound::send_log`] only channels it got back
/// from [`RelayOutbound::resolve_channel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: String,
    pub name: Option<String>,
}

// ── Outbound ────────────────────────────────────────────────────────────────

/// Platform calls available while handling one interaction.
///
/// An adapter builds one of these per inbound event. Reply methods answer
/// that event; [`RelayOutbound::send_log`] posts to another channel.
#[async_trait]
pub trait RelayOutbound: Send + Sync {
    /// Reply visible only to the user who triggered the interaction.
    async fn reply_ephemeral(&self, text: &str) -> Result<()>;

    /// Publish the panel as the public reply in the invoking channel.
    async fn publish_panel(&self, panel: &Panel) -> Result<PostedMessage>;

    /// Reply ephemerally with a user picker.
    async fn show_user_picker(&self, picker: &UserPicker) -> Result<()>;

    /// Open a form for the user.
    async fn open_form(&self, form: &MessageForm) -> Result<()>;

    /// Look a channel up in the platform's live registry.
    fn resolve_channel(&self, channel_id: &str) -> Option<ResolvedChannel>;

    /// Post an embed into a resolved channel.
    async fn send_log(&self, channel: &ResolvedChannel, embed: &Embed) -> Result<()>;
}
