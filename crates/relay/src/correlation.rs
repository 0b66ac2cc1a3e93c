//! Correlation ids attached to the panel's components.
//!
//! These strings are the wire contract between the steps of the relay flow.
//! The recipient is carried from the picker to the form submission inside
//! the form's id, as the raw user id with no extra encoding.

/// Button on the published panel.
pub const PANEL_BUTTON: &str = "tell_button";

/// Recipient picker shown after the panel button is clicked.
pub const RECIPIENT_SELECT: &str = "tell_select";

/// Prefix of the message form id; the recipient id follows it.
pub const MESSAGE_FORM_PREFIX: &str = "tell_modal_";

/// Text input inside the message form.
pub const MESSAGE_INPUT: &str = "tell_msg";

/// Build the form id for a message addressed to `recipient_id`.
pub fn message_form_id(recipient_id: &str) -> String {
    format!("{MESSAGE_FORM_PREFIX}{recipient_id}")
}

/// Recover the recipient from a form id.
///
/// Returns `None` when the id does not belong to the message form. An empty
/// recipient is returned as-is; the router rejects it.
pub fn recipient_from_form_id(custom_id: &str) -> Option<&str> {
    custom_id.strip_prefix(MESSAGE_FORM_PREFIX)
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case("123456789012345678")]
    #[case("00000000000000000001")]
    #[case("18446744073709551615")]
    #[case("42")]
    fn form_id_carries_recipient(#[case] recipient: &str) {
        let id = message_form_id(recipient);
        assert_eq!(id, format!("tell_modal_{recipient}"));
        assert_eq!(recipient_from_form_id(&id), Some(recipient));
    }

    #[test]
    fn foreign_ids_are_not_forms() {
        assert_eq!(recipient_from_form_id("tell_button"), None);
        assert_eq!(recipient_from_form_id("other_modal_1"), None);
    }

    #[test]
    fn bare_prefix_yields_empty_recipient() {
        assert_eq!(recipient_from_form_id("tell_modal_"), Some(""));
    }

    #[test]
    fn only_leading_prefix_is_stripped() {
        assert_eq!(
            recipient_from_form_id("tell_modal_tell_modal_1"),
            Some("tell_modal_1")
        );
    }
}
