//! Fixed text and message layouts.

use crate::{
    correlation,
    outbound::{Button, CustomEmoji, Embed, MessageForm, Panel, TextInput, UserPicker},
};

pub const OWNER_ONLY: &str = "❌ Owner เท่านั้น";
pub const LOG_CHANNEL_INVALID: &str = "❌ LOG channel invalid!";
pub const DELIVERED: &str = "✨ ส่งข้อความเรียบร้อย";
pub const INTERACTION_FAILED: &str = "❌ เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง";

const PANEL_TITLE: &str = "<a:emoji_12:1449150980179366024> บอทส่งข้อความ 24/7";
const PANEL_IMAGE: &str = "https://cdn.discordapp.com/attachments/1449115719479590984/1451596071263535134/Unknown.gif";
// Leading newline and trailing spaces are part of the published layout.
const PANEL_DESCRIPTION: &str = concat!(
    "\n",
    "** ╭┈ ꒰ <a:3005:1451585834649391144>  𐔌 . ⋮ 𝓑𝔂 𝓩𝓮𝓶𝓸𝓷 Ź𝔁 .ᐟ ָ ₊ ꒱ <a:3007:1451585403751633170> ꒱\n",
    ">- ┃ <a:New_Mail:1451388104643575912> • ฝากบอกข้อความ \n",
    ">- ┃ <a:1001:1451585309757149227> • ถึงคนที่คุณ แอบรัก\n",
    ">- ┃ <a:1002:1451585213560783134> • หรือ คนที่คุณ แอบชอบ\n",
    ">- ┃ <a:1004:1451585026935488563> • หรือ แฟนคุณ ได้เลย \n",
    "╰┈ ꒰ <a:__:1451387432527335605>  𐔌 . ⋮ 𝒙𝑺𝒘𝒊𝒇𝒕 𝑯𝒖𝒃 .ᐟ ָ ₊ ꒱ <a:__:1451387432527335605> ꒱ **\n",
);
const PANEL_BUTTON_LABEL: &str = "ฝากบอก";
const PANEL_BUTTON_EMOJI_ID: u64 = 1451387747800711189;

const PICKER_PROMPT: &str = "เลือกคนที่ต้องการส่งข้อความ 💌";
const PICKER_PLACEHOLDER: &str = "เลือก @คนที่ต้องการส่งข้อความ…";

const FORM_TITLE: &str = "ฝากข้อความถึงคนพิเศษ 💞";
const FORM_INPUT_LABEL: &str = "พิมพ์ข้อความถึงเขาที่นี่";

/// Marker put in front of every line of a relayed message.
pub const LINE_MARKER: &str = ">- ┃ <a:1003:1451585110297280604> • ";

/// The standing panel users click to start a relay.
pub fn panel() -> Panel {
    Panel {
        embed: Embed {
            title: Some(PANEL_TITLE.into()),
            description: PANEL_DESCRIPTION.into(),
            image_url: Some(PANEL_IMAGE.into()),
        },
        button: Button {
            custom_id: correlation::PANEL_BUTTON.into(),
            label: PANEL_BUTTON_LABEL.into(),
            emoji: Some(CustomEmoji {
                name: "__".into(),
                id: PANEL_BUTTON_EMOJI_ID,
                animated: true,
            }),
        },
    }
}

/// Single-recipient picker shown after the panel button.
pub fn recipient_picker() -> UserPicker {
    UserPicker {
        prompt: PICKER_PROMPT.into(),
        custom_id: correlation::RECIPIENT_SELECT.into(),
        placeholder: PICKER_PLACEHOLDER.into(),
        min_values: 1,
        max_values: 1,
    }
}

/// Form for writing the message to `recipient_id`.
pub fn message_form(recipient_id: &str) -> MessageForm {
    MessageForm {
        custom_id: correlation::message_form_id(recipient_id),
        title: FORM_TITLE.into(),
        input: TextInput {
            custom_id: correlation::MESSAGE_INPUT.into(),
            label: FORM_INPUT_LABEL.into(),
            required: true,
            paragraph: true,
        },
    }
}

/// Prefix each line of `body` with [`LINE_MARKER`].
pub fn prefix_lines(body: &str) -> String {
    body.split('\n')
        .map(|line| format!("{LINE_MARKER}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Log channel entry for one relayed message.
pub fn log_entry(recipient_id: &str, sender_id: &str, body: &str, timestamp: &str) -> Embed {
    let lines = prefix_lines(body);
    let description = format!(
        concat!(
            "\n",
            "** ╭┈ ꒰ <a:3005:1451585834649391144> : <@{recipient_id}> <a:3007:1451585403751633170> ꒱  \n",
            ">- ┃ <a:New_Mail:1451388104643575912> • ◟ `` ⸝⸝⠀˒ มีคนฝากบอกคุณ ! ᯓ★  \n",
            ">- ┃ <a:emoji_11:1449150928048361603> • ﹒ᝰ.ᐟ คนที่ฝากบอก ➺ <@{sender_id}> ถึงคุณ  \n",
            "{lines}\n",
            "╰┈ ꒰ <a:emoji_34:1450185227577196780> ˗ˏˋ ꒰ {timestamp} ꒱ ˎˊ˗ <a:emoji_34:1450185227577196780> ꒱ **\n",
        ),
        recipient_id = recipient_id,
        sender_id = sender_id,
        lines = lines,
        timestamp = timestamp,
    );
    Embed {
        title: None,
        description,
        image_url: None,
    }
}
