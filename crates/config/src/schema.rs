use serde::{Deserialize, Serialize};

/// Record persisted in the state file.
///
/// Every field is optional: a fresh install starts from `{}` and the fields
/// are filled in by the setup command. Unset fields are omitted on write so
/// that a write followed by a reload yields the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfig {
    /// Channel that receives relayed messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_channel_id: Option<String>,

    /// Channel the panel was last published in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_channel_id: Option<String>,

    /// Message id of the last published panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_message_id: Option<String>,

    /// Keys this bot does not know about. Kept so rewrites never drop them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BotConfig {
    /// Merge the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(id) = patch.log_channel_id {
            self.log_channel_id = Some(id);
        }
        if let Some(id) = patch.panel_channel_id {
            self.panel_channel_id = Some(id);
        }
        if let Some(id) = patch.panel_message_id {
            self.panel_message_id = Some(id);
        }
    }
}

/// Partial update for [`BotConfig`]. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub log_channel_id: Option<String>,
    pub panel_channel_id: Option<String>,
    pub panel_message_id: Option<String>,
}

impl ConfigPatch {
    #[must_use]
    pub fn log_channel(channel_id: impl Into<String>) -> Self {
        Self {
            log_channel_id: Some(channel_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn panel(channel_id: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            panel_channel_id: Some(channel_id.into()),
            panel_message_id: Some(message_id.into()),
            ..Self::default()
        }
    }
}
