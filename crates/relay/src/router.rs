//! Interaction router.
//!
//! Walks one user through the relay flow:
//!
//! ```text
//! Idle ─/tellpanel─▶ PanelRequested ─▶ PanelPublished
//!      ─tell_button─▶ RecipientPromptShown
//!      ─tell_select─▶ RecipientChosen
//!      ─tell_modal_<id>─▶ MessageDelivered
//! ```
//!
//! Each step is driven by a separate interaction. Nothing is kept between
//! steps except what the platform echoes back in correlation ids and the
//! persisted [`BotConfig`](tellbot_config::BotConfig).

use std::{collections::HashMap, sync::Arc};

use {
    chrono::{DateTime, Utc},
    chrono_tz::Tz,
    tellbot_config::{ConfigPatch, ConfigStore},
    tracing::{debug, info, warn},
};

use crate::{
    Error, Result,
    commands::{LOG_OPTION, SETUP_COMMAND},
    correlation,
    event::{CommandOption, InteractionEvent, channel_option},
    outbound::RelayOutbound,
    template, time,
};

/// Last step an interaction reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// Nothing happened: unknown event, or the owner check failed.
    Idle,
    /// Log channel saved, but the panel could not be published.
    PanelRequested,
    PanelPublished,
    RecipientPromptShown,
    RecipientChosen,
    MessageDelivered,
}

/// Routes interactions to the four relay handlers.
pub struct RelayRouter {
    store: Arc<ConfigStore>,
    admin_id: String,
    timezone: Tz,
}

impl RelayRouter {
    pub fn new(store: Arc<ConfigStore>, admin_id: impl Into<String>, timezone: Tz) -> Self {
        Self {
            store,
            admin_id: admin_id.into(),
            timezone,
        }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Handle one event. Failures are logged and reported to the user with
    /// an ephemeral message; they are never retried.
    pub async fn handle(&self, event: InteractionEvent, out: &dyn RelayOutbound) -> RelayState {
        let kind = event.kind();
        let user_id = event.user_id().map(str::to_owned);
        match self.dispatch(event, out).await {
            Ok(state) => {
                debug!(kind, user_id = ?user_id, state = ?state, "interaction handled");
                state
            },
            Err(e) => {
                warn!(kind, user_id = ?user_id, error = %e, "interaction failed");
                if let Err(err) = out.reply_ephemeral(template::INTERACTION_FAILED).await {
                    debug!(error = %err, "could not report failure to user");
                }
                RelayState::Idle
            },
        }
    }

    /// Route `event` to its handler, propagating failures.
    pub async fn dispatch(
        &self,
        event: InteractionEvent,
        out: &dyn RelayOutbound,
    ) -> Result<RelayState> {
        self.dispatch_at(event, out, Utc::now()).await
    }

    /// [`RelayRouter::dispatch`] with an explicit clock for log timestamps.
    pub async fn dispatch_at(
        &self,
        event: InteractionEvent,
        out: &dyn RelayOutbound,
        now: DateTime<Utc>,
    ) -> Result<RelayState> {
        match event {
            InteractionEvent::Command {
                name,
                user_id,
                options,
            } => self.on_command(&name, &user_id, &options, out).await,
            InteractionEvent::Button { custom_id, .. } if custom_id == correlation::PANEL_BUTTON => {
                self.on_panel_button(out).await
            },
            InteractionEvent::UserSelect {
                custom_id, values, ..
            } if custom_id == correlation::RECIPIENT_SELECT => {
                self.on_recipient_selected(&values, out).await
            },
            InteractionEvent::FormSubmit {
                custom_id,
                user_id,
                fields,
            } => match correlation::recipient_from_form_id(&custom_id) {
                Some(recipient_id) => {
                    self.on_message_submitted(recipient_id, &user_id, &fields, out, now)
                        .await
                },
                None => Ok(RelayState::Idle),
            },
            _ => Ok(RelayState::Idle),
        }
    }

    async fn on_command(
        &self,
        name: &str,
        user_id: &str,
        options: &[CommandOption],
        out: &dyn RelayOutbound,
    ) -> Result<RelayState> {
        if user_id != self.admin_id {
            out.reply_ephemeral(template::OWNER_ONLY).await?;
            return Ok(RelayState::Idle);
        }
        if name != SETUP_COMMAND {
            return Ok(RelayState::Idle);
        }

        let log_channel_id = channel_option(options, LOG_OPTION)
            .ok_or_else(|| Error::invalid_input("missing log channel option"))?;
        self.store.set(ConfigPatch::log_channel(log_channel_id))?;
        debug!(log_channel_id, "log channel saved");

        let posted = match out.publish_panel(&template::panel()).await {
            Ok(posted) => posted,
            Err(e) => {
                // The new log channel stays saved; the old panel ids are kept.
                warn!(log_channel_id, error = %e, "panel publish failed");
                out.reply_ephemeral(template::INTERACTION_FAILED).await?;
                return Ok(RelayState::PanelRequested);
            },
        };
        self.store.set(ConfigPatch::panel(
            posted.channel_id.as_str(),
            posted.message_id.as_str(),
        ))?;
        info!(
            log_channel_id,
            panel_channel_id = %posted.channel_id,
            panel_message_id = %posted.message_id,
            "panel published"
        );
        Ok(RelayState::PanelPublished)
    }

    async fn on_panel_button(&self, out: &dyn RelayOutbound) -> Result<RelayState> {
        out.show_user_picker(&template::recipient_picker()).await?;
        Ok(RelayState::RecipientPromptShown)
    }

    async fn on_recipient_selected(
        &self,
        values: &[String],
        out: &dyn RelayOutbound,
    ) -> Result<RelayState> {
        let [recipient_id] = values else {
            return Err(Error::invalid_input(format!(
                "expected one selected user, got {}",
                values.len()
            )));
        };
        out.open_form(&template::message_form(recipient_id)).await?;
        Ok(RelayState::RecipientChosen)
    }

    async fn on_message_submitted(
        &self,
        recipient_id: &str,
        sender_id: &str,
        fields: &HashMap<String, String>,
        out: &dyn RelayOutbound,
        now: DateTime<Utc>,
    ) -> Result<RelayState> {
        if recipient_id.is_empty() {
            return Err(Error::invalid_input("form id carries no recipient"));
        }
        let body = fields
            .get(correlation::MESSAGE_INPUT)
            .ok_or_else(|| Error::invalid_input("missing message field"))?;

        let log_channel = self
            .store
            .get()
            .log_channel_id
            .and_then(|id| out.resolve_channel(&id));
        let Some(log_channel) = log_channel else {
            warn!(recipient_id, "log channel unset or unavailable, message dropped");
            out.reply_ephemeral(template::LOG_CHANNEL_INVALID).await?;
            return Ok(RelayState::RecipientChosen);
        };

        let timestamp = time::format_thai(now, self.timezone);
        let entry = template::log_entry(recipient_id, sender_id, body, &timestamp);
        out.send_log(&log_channel, &entry).await?;
        info!(
            recipient_id,
            log_channel = log_channel.name.as_deref().unwrap_or(log_channel.id.as_str()),
            "message relayed"
        );
        out.reply_ephemeral(template::DELIVERED).await?;
        Ok(RelayState::MessageDelivered)
    }
}
