use std::sync::Arc;

use {
    async_trait::async_trait,
    serenity::all::{
        ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http,
        Permissions,
    },
    tellbot_relay::{CommandDefinition, CommandRegistrar, Error, Result},
};

use crate::interaction::snowflake;

/// Translate a command declaration into serenity's builder.
pub fn build_command(def: &CommandDefinition) -> CreateCommand {
    let mut command = CreateCommand::new(&def.name).description(&def.description);
    if def.admin_only {
        command = command.default_member_permissions(Permissions::ADMINISTRATOR);
    }
    for opt in &def.channel_options {
        let mut option =
            CreateCommandOption::new(CommandOptionType::Channel, &opt.name, &opt.description)
                .required(opt.required);
        if opt.text_only {
            option = option.channel_types(vec![ChannelType::Text]);
        }
        command = command.add_option(option);
    }
    command
}

/// Registers guild commands through the Discord HTTP API.
pub struct GuildCommandRegistrar {
    http: Arc<Http>,
}

impl GuildCommandRegistrar {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistrar for GuildCommandRegistrar {
    async fn register(&self, guild_id: &str, commands: &[CommandDefinition]) -> Result<()> {
        let guild = snowflake(guild_id)
            .map(GuildId::new)
            .ok_or_else(|| Error::invalid_input(format!("bad guild id {guild_id:?}")))?;
        let builders = commands.iter().map(build_command).collect();
        guild
            .set_commands(&self.http, builders)
            .await
            .map_err(|e| Error::external(format!("set commands in guild {guild_id}"), e))?;
        Ok(())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, tellbot_relay::commands::guild_commands};

    #[test]
    fn setup_command_payload() {
        let defs = guild_commands();
        let json = serde_json::to_value(build_command(&defs[0])).unwrap();

        assert_eq!(json["name"], "tellpanel");
        assert_eq!(json["default_member_permissions"], "8");

        let option = &json["options"][0];
        assert_eq!(option["type"], 7);
        assert_eq!(option["name"], "log");
        assert_eq!(option["required"], true);
        assert_eq!(option["channel_types"], serde_json::json!([0]));
    }
}
