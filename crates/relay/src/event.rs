use std::collections::HashMap;

/// Inbound interaction, already stripped of platform types.
///
/// Ids are the platform's raw identifier strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Slash command invocation.
    Command {
        name: String,
        user_id: String,
        options: Vec<CommandOption>,
    },
    /// Button click.
    Button { custom_id: String, user_id: String },
    /// User picker submission.
    UserSelect {
        custom_id: String,
        user_id: String,
        values: Vec<String>,
    },
    /// Form (modal) submission. `fields` maps input ids to their values.
    FormSubmit {
        custom_id: String,
        user_id: String,
        fields: HashMap<String, String>,
    },
    /// Anything the relay flow does not handle.
    Other,
}

impl InteractionEvent {
    /// Id of the user who triggered the interaction, if any.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Command { user_id, .. }
            | Self::Button { user_id, .. }
            | Self::UserSelect { user_id, .. }
            | Self::FormSubmit { user_id, .. } => Some(user_id),
            Self::Other => None,
        }
    }

    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Button { .. } => "button",
            Self::UserSelect { .. } => "user_select",
            Self::FormSubmit { .. } => "form_submit",
            Self::Other => "other",
        }
    }
}

/// One resolved slash command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Channel(String),
    String(String),
    Other,
}

impl CommandOption {
    pub fn channel(name: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: OptionValue::Channel(channel_id.into()),
        }
    }
}

/// Find the channel id passed for option `name`.
pub fn channel_option<'a>(options: &'a [CommandOption], name: &str) -> Option<&'a str> {
    options.iter().find_map(|opt| match &opt.value {
        OptionValue::Channel(id) if opt.name == name => Some(id.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_option_lookup() {
        let options = vec![
            CommandOption {
                name: "note".into(),
                value: OptionValue::String("hi".into()),
            },
            CommandOption::channel("log", "555"),
        ];
        assert_eq!(channel_option(&options, "log"), Some("555"));
        assert_eq!(channel_option(&options, "note"), None);
        assert_eq!(channel_option(&options, "missing"), None);
    }

    #[test]
    fn user_id_and_kind() {
        let ev = InteractionEvent::Button {
            custom_id: "tell_button".into(),
            user_id: "7".into(),
        };
        assert_eq!(ev.user_id(), Some("7"));
        assert_eq!(ev.kind(), "button");
        assert_eq!(InteractionEvent::Other.user_id(), None);
    }
}
