//! Discord event handler for serenity.
//!
//! Implements the EventHandler trait to register commands on `ready` and to
//! route interactions through the relay flow.

use std::sync::Arc;

use {
    serenity::{
        all::{Context, EventHandler, GatewayIntents, GuildId, Interaction, Ready},
        async_trait,
    },
    tellbot_relay::{InteractionEvent, RelayRouter, register_in_guilds},
    tracing::{debug, info},
};

use crate::{
    commands::GuildCommandRegistrar,
    interaction::to_event,
    outbound::{DiscordOutbound, InteractionTarget},
};

/// Handler for Discord gateway events.
pub struct DiscordHandler {
    pub router: Arc<RelayRouter>,
}

impl DiscordHandler {
    /// Required gateway intents for the bot.
    ///
    /// `GUILDS` keeps the channel cache used to resolve the log channel.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "discord bot ready"
        );

        let guild_ids: Vec<String> = ready.guilds.iter().map(|g| g.id.to_string()).collect();
        let registrar = GuildCommandRegistrar::new(Arc::clone(&ctx.http));
        let report = register_in_guilds(&registrar, &guild_ids).await;
        info!(
            registered = report.registered,
            failed = report.failed,
            "guild commands registered"
        );

        info!(config = ?self.router.store().get(), "loaded state file");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let event = to_event(&interaction);
        if event == InteractionEvent::Other {
            debug!(kind = ?interaction.kind(), "ignoring interaction");
            return;
        }
        let Some(target) = InteractionTarget::from_interaction(interaction) else {
            return;
        };
        let outbound = DiscordOutbound::new(ctx, target);
        self.router.handle(event, &outbound).await;
    }

    async fn cache_ready(&self, _ctx: Context, guilds: Vec<GuildId>) {
        debug!(guild_count = guilds.len(), "discord cache ready");
    }
}
