use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use {
    async_trait::async_trait,
    serenity::all::{
        ButtonStyle, ChannelId, CommandInteraction, ComponentInteraction, Context, CreateActionRow,
        CreateButton, CreateEmbed, CreateInputText, CreateInteractionResponse,
        CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
        CreateModal, CreateSelectMenu, CreateSelectMenuKind, EmojiId, GuildChannel, GuildId,
        InputTextStyle, Interaction, ModalInteraction, ReactionType,
    },
    tellbot_relay::{
        Button, Embed, Error, MessageForm, Panel, PostedMessage, RelayOutbound, ResolvedChannel,
        Result, UserPicker,
    },
};

use crate::interaction::snowflake;

/// The interaction being answered.
pub enum InteractionTarget {
    Command(CommandInteraction),
    Component(ComponentInteraction),
    Modal(ModalInteraction),
}

impl InteractionTarget {
    /// Keep the interaction kinds the relay flow can answer.
    pub fn from_interaction(interaction: Interaction) -> Option<Self> {
        match interaction {
            Interaction::Command(cmd) => Some(Self::Command(cmd)),
            Interaction::Component(component) => Some(Self::Component(component)),
            Interaction::Modal(modal) => Some(Self::Modal(modal)),
            _ => None,
        }
    }

    fn guild_id(&self) -> Option<GuildId> {
        match self {
            Self::Command(i) => i.guild_id,
            Self::Component(i) => i.guild_id,
            Self::Modal(i) => i.guild_id,
        }
    }
}

/// Whether the interaction already got its one initial response.
#[derive(Debug, Default)]
pub struct ResponseTracker(AtomicBool);

/// How a message reaches the user who triggered the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRoute {
    /// The initial interaction response.
    Initial,
    /// A followup message, once the initial response is used up.
    Followup,
}

impl ResponseTracker {
    pub fn mark_answered(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_answered(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn reply_route(&self) -> ReplyRoute {
        if self.is_answered() {
            ReplyRoute::Followup
        } else {
            ReplyRoute::Initial
        }
    }
}

/// [`RelayOutbound`] backed by serenity for one interaction.
pub struct DiscordOutbound {
    ctx: Context,
    target: InteractionTarget,
    responses: ResponseTracker,
}

impl DiscordOutbound {
    pub fn new(ctx: Context, target: InteractionTarget) -> Self {
        Self {
            ctx,
            target,
            responses: ResponseTracker::default(),
        }
    }

    /// Send the initial response. Discord accepts only one per interaction.
    async fn respond(&self, response: CreateInteractionResponse) -> Result<()> {
        if self.responses.is_answered() {
            return Err(Error::invalid_input("interaction was already answered"));
        }
        let result = match &self.target {
            InteractionTarget::Command(i) => i.create_response(&self.ctx.http, response).await,
            InteractionTarget::Component(i) => i.create_response(&self.ctx.http, response).await,
            InteractionTarget::Modal(i) => i.create_response(&self.ctx.http, response).await,
        };
        result.map_err(|e| Error::external("interaction response", e))?;
        self.responses.mark_answered();
        Ok(())
    }

    async fn follow_up(&self, followup: CreateInteractionResponseFollowup) -> Result<()> {
        let http = &self.ctx.http;
        let result = match &self.target {
            InteractionTarget::Command(i) => i.create_followup(http, followup).await,
            InteractionTarget::Component(i) => i.create_followup(http, followup).await,
            InteractionTarget::Modal(i) => i.create_followup(http, followup).await,
        };
        result
            .map(drop)
            .map_err(|e| Error::external("interaction followup", e))
    }
}

/// Look `id` up in one guild's channel map.
pub fn guild_channel(
    channels: &HashMap<ChannelId, GuildChannel>,
    id: ChannelId,
) -> Option<ResolvedChannel> {
    channels.get(&id).map(|channel| ResolvedChannel {
        id: channel.id.to_string(),
        name: Some(channel.name.clone()),
    })
}

pub fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().description(&embed.description);
    if let Some(ref title) = embed.title {
        builder = builder.title(title);
    }
    if let Some(ref url) = embed.image_url {
        builder = builder.image(url);
    }
    builder
}

pub fn build_button(button: &Button) -> CreateButton {
    let mut builder = CreateButton::new(&button.custom_id)
        .label(&button.label)
        .style(ButtonStyle::Primary);
    if let Some(emoji) = button.emoji.as_ref().filter(|e| e.id != 0) {
        builder = builder.emoji(ReactionType::Custom {
            animated: emoji.animated,
            id: EmojiId::new(emoji.id),
            name: Some(emoji.name.clone()),
        });
    }
    builder
}

pub fn build_panel(panel: &Panel) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(build_embed(&panel.embed))
        .components(vec![CreateActionRow::Buttons(vec![build_button(
            &panel.button,
        )])])
}

pub fn build_ephemeral_followup(text: &str) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(text)
        .ephemeral(true)
}

pub fn build_user_picker(picker: &UserPicker) -> CreateInteractionResponseMessage {
    let select = CreateSelectMenu::new(&picker.custom_id, CreateSelectMenuKind::User {
        default_users: None,
    })
    .placeholder(&picker.placeholder)
    .min_values(picker.min_values)
    .max_values(picker.max_values);
    CreateInteractionResponseMessage::new()
        .content(&picker.prompt)
        .components(vec![CreateActionRow::SelectMenu(select)])
        .ephemeral(true)
}

pub fn build_form(form: &MessageForm) -> CreateModal {
    let style = if form.input.paragraph {
        InputTextStyle::Paragraph
    } else {
        InputTextStyle::Short
    };
    let input = CreateInputText::new(style, &form.input.label, &form.input.custom_id)
        .required(form.input.required);
    CreateModal::new(&form.custom_id, &form.title)
        .components(vec![CreateActionRow::InputText(input)])
}

#[async_trait]
impl RelayOutbound for DiscordOutbound {
    async fn reply_ephemeral(&self, text: &str) -> Result<()> {
        match self.responses.reply_route() {
            ReplyRoute::Initial => {
                let message = CreateInteractionResponseMessage::new()
                    .content(text)
                    .ephemeral(true);
                self.respond(CreateInteractionResponse::Message(message))
                    .await
            },
            ReplyRoute::Followup => self.follow_up(build_ephemeral_followup(text)).await,
        }
    }

    async fn publish_panel(&self, panel: &Panel) -> Result<PostedMessage> {
        let InteractionTarget::Command(cmd) = &self.target else {
            return Err(Error::invalid_input(
                "the panel can only be published from a command",
            ));
        };
        self.respond(CreateInteractionResponse::Message(build_panel(panel)))
            .await?;
        let sent = cmd
            .get_response(&self.ctx.http)
            .await
            .map_err(|e| Error::external("fetch panel message", e))?;
        Ok(PostedMessage {
            channel_id: sent.channel_id.to_string(),
            message_id: sent.id.to_string(),
        })
    }

    async fn show_user_picker(&self, picker: &UserPicker) -> Result<()> {
        self.respond(CreateInteractionResponse::Message(build_user_picker(
            picker,
        )))
        .await
    }

    async fn open_form(&self, form: &MessageForm) -> Result<()> {
        if matches!(self.target, InteractionTarget::Modal(_)) {
            return Err(Error::invalid_input(
                "a form cannot be opened in reply to a form",
            ));
        }
        self.respond(CreateInteractionResponse::Modal(build_form(form)))
            .await
    }

    fn resolve_channel(&self, channel_id: &str) -> Option<ResolvedChannel> {
        let id = ChannelId::new(snowflake(channel_id)?);
        let cache = &self.ctx.cache;
        // The interaction's own guild first, then every other cached guild.
        self.target
            .guild_id()
            .into_iter()
            .chain(cache.guilds())
            .find_map(|guild_id| guild_channel(&cache.guild(guild_id)?.channels, id))
    }

    async fn send_log(&self, channel: &ResolvedChannel, embed: &Embed) -> Result<()> {
        let id = snowflake(&channel.id)
            .map(ChannelId::new)
            .ok_or_else(|| Error::invalid_input(format!("bad channel id {:?}", channel.id)))?;
        id.send_message(&self.ctx.http, CreateMessage::new().embed(build_embed(embed)))
            .await
            .map_err(|e| Error::external("send log entry", e))?;
        Ok(())
    }
}
