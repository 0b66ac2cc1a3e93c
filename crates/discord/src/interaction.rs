//! Conversion from serenity interactions to relay events.

use std::collections::HashMap;

use {
    serenity::all::{
        ActionRow, ActionRowComponent, CommandDataOption, CommandDataOptionValue,
        ComponentInteractionDataKind, Interaction,
    },
    tellbot_relay::{CommandOption, InteractionEvent, OptionValue},
};

/// Parse a Discord snowflake. Zero is not a valid id.
pub fn snowflake(id: &str) -> Option<u64> {
    id.trim().parse::<u64>().ok().filter(|n| *n != 0)
}

/// Map an inbound interaction to the event the router understands.
pub fn to_event(interaction: &Interaction) -> InteractionEvent {
    match interaction {
        Interaction::Command(cmd) => InteractionEvent::Command {
            name: cmd.data.name.clone(),
            user_id: cmd.user.id.to_string(),
            options: cmd.data.options.iter().map(command_option).collect(),
        },
        Interaction::Component(component) => match &component.data.kind {
            ComponentInteractionDataKind::Button => InteractionEvent::Button {
                custom_id: component.data.custom_id.clone(),
                user_id: component.user.id.to_string(),
            },
            ComponentInteractionDataKind::UserSelect { values } => InteractionEvent::UserSelect {
                custom_id: component.data.custom_id.clone(),
                user_id: component.user.id.to_string(),
                values: values.iter().map(ToString::to_string).collect(),
            },
            _ => InteractionEvent::Other,
        },
        Interaction::Modal(modal) => InteractionEvent::FormSubmit {
            custom_id: modal.data.custom_id.clone(),
            user_id: modal.user.id.to_string(),
            fields: form_fields(&modal.data.components),
        },
        _ => InteractionEvent::Other,
    }
}

fn command_option(option: &CommandDataOption) -> CommandOption {
    let value = match &option.value {
        CommandDataOptionValue::Channel(id) => OptionValue::Channel(id.to_string()),
        CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
        _ => OptionValue::Other,
    };
    CommandOption {
        name: option.name.clone(),
        value,
    }
}

/// Collect text input values of a submitted form, keyed by input id.
pub fn form_fields(rows: &[ActionRow]) -> HashMap<String, String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        rstest::rstest,
        serde_json::{Value, json},
    };

    /// Fields every gateway interaction payload carries.
    fn interaction(kind: u8, user_id: &str, extra: Value) -> Interaction {
        let mut payload = json!({
            "id": "1300000000000000001",
            "application_id": "1300000000000000002",
            "type": kind,
            "guild_id": "1300000000000000003",
            "channel_id": "1300000000000000004",
            "user": { "id": user_id, "username": "someone" },
            "token": "interaction-token",
            "version": 1,
            "locale": "th",
            "entitlements": [],
            "attachment_size_limit": 10485760,
        });
        payload
            .as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(payload).unwrap()
    }

    /// The panel message a component interaction is attached to.
    fn panel_message() -> Value {
        json!({
            "id": "1300000000000000005",
            "channel_id": "1300000000000000004",
            "author": { "id": "1300000000000000002", "username": "tellbot", "bot": true },
            "content": "",
            "timestamp": "2026-10-18T07:03:05.000000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": [],
            "embeds": [],
            "pinned": false,
            "type": 0,
        })
    }

    #[rstest]
    #[case("123456789012345678", Some(123456789012345678))]
    #[case(" 42 ", Some(42))]
    #[case("0", None)]
    #[case("", None)]
    #[case("abc", None)]
    #[case("-5", None)]
    #[case("18446744073709551616", None)]
    fn snowflake_parsing(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(snowflake(input), expected);
    }

    #[test]
    fn empty_form_has_no_fields() {
        assert!(form_fields(&[]).is_empty());
    }

    #[test]
    fn submitted_form_keeps_multiline_message() {
        let modal = interaction(5, "888", json!({
            "data": {
                "custom_id": "tell_modal_777",
                "components": [{
                    "type": 1,
                    "components": [{
                        "type": 4,
                        "custom_id": "tell_msg",
                        "value": "line one\nline two",
                    }],
                }],
            },
        }));

        let InteractionEvent::FormSubmit {
            custom_id,
            user_id,
            fields,
        } = to_event(&modal)
        else {
            panic!("expected a form submission");
        };
        assert_eq!(custom_id, "tell_modal_777");
        assert_eq!(user_id, "888");
        assert_eq!(fields.get("tell_msg").map(String::as_str), Some("line one\nline two"));
    }

    #[test]
    fn user_select_carries_picked_id() {
        let select = interaction(3, "888", json!({
            "message": panel_message(),
            "data": {
                "custom_id": "tell_select",
                "component_type": 5,
                "values": ["18446744073709551615"],
            },
        }));

        assert_eq!(to_event(&select), InteractionEvent::UserSelect {
            custom_id: "tell_select".into(),
            user_id: "888".into(),
            values: vec!["18446744073709551615".into()],
        });
    }

    #[test]
    fn panel_button_click() {
        let button = interaction(3, "42", json!({
            "message": panel_message(),
            "data": { "custom_id": "tell_button", "component_type": 2 },
        }));

        assert_eq!(to_event(&button), InteractionEvent::Button {
            custom_id: "tell_button".into(),
            user_id: "42".into(),
        });
    }

    #[test]
    fn setup_command_carries_log_channel() {
        let command = interaction(2, "100000000000000001", json!({
            "data": {
                "id": "1300000000000000006",
                "name": "tellpanel",
                "type": 1,
                "options": [{ "name": "log", "type": 7, "value": "200000000000000002" }],
            },
        }));

        let event = to_event(&command);
        let InteractionEvent::Command {
            name,
            user_id,
            options,
        } = &event
        else {
            panic!("expected a command, got {event:?}");
        };
        assert_eq!(name, "tellpanel");
        assert_eq!(user_id, "100000000000000001");
        assert_eq!(
            tellbot_relay::event::channel_option(options, "log"),
            Some("200000000000000002")
        );
    }

    #[test]
    fn unrelated_component_is_other() {
        let string_select = interaction(3, "42", json!({
            "message": panel_message(),
            "data": {
                "custom_id": "role_select",
                "component_type": 3,
                "values": ["moderator"],
            },
        }));

        assert_eq!(to_event(&string_select), InteractionEvent::Other);
    }
}
