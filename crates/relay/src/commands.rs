use {async_trait::async_trait, tracing::warn};

use crate::Result;

/// Name of the owner-only setup command.
pub const SETUP_COMMAND: &str = "tellpanel";

/// Channel option of the setup command naming the log channel.
pub const LOG_OPTION: &str = "log";

/// Platform-neutral slash command declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    /// Require the administrator permission by default.
    pub admin_only: bool,
    pub channel_options: Vec<ChannelOptionDefinition>,
}

/// Channel-typed command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOptionDefinition {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Restrict the picker to guild text channels.
    pub text_only: bool,
}

/// The command set declared in every guild.
pub fn guild_commands() -> Vec<CommandDefinition> {
    vec![CommandDefinition {
        name: SETUP_COMMAND.into(),
        description: "สร้าง Panel ฝากบอก (เฉพาะเจ้าของ)".into(),
        admin_only: true,
        channel_options: vec![ChannelOptionDefinition {
            name: LOG_OPTION.into(),
            description: "@เลือกช่อง LOG ที่จะส่งข้อความฝากบอก".into(),
            required: true,
            text_only: true,
        }],
    }]
}

/// Replaces a guild's command set on the platform.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    async fn register(&self, guild_id: &str, commands: &[CommandDefinition]) -> Result<()>;
}

/// Outcome of [`register_in_guilds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub registered: usize,
    pub failed: usize,
}

/// Declare [`guild_commands`] in every guild.
///
/// Registration replaces the whole set, so repeating it is harmless. A
/// failure is logged and the loop moves on to the next guild.
pub async fn register_in_guilds(
    registrar: &dyn CommandRegistrar,
    guild_ids: &[String],
) -> RegistrationReport {
    let commands = guild_commands();
    let mut report = RegistrationReport::default();
    for guild_id in guild_ids {
        match registrar.register(guild_id, &commands).await {
            Ok(()) => report.registered += 1,
            Err(e) => {
                warn!(guild_id = %guild_id, error = %e, "failed to register guild commands");
                report.failed += 1;
            },
        }
    }
    report
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::Error, std::sync::Mutex};

    #[derive(Default)]
    struct RecordingRegistrar {
        fail_for: Vec<String>,
        calls: Mutex<Vec<(String, Vec<CommandDefinition>)>>,
    }

    #[async_trait]
    impl CommandRegistrar for RecordingRegistrar {
        async fn register(&self, guild_id: &str, commands: &[CommandDefinition]) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((guild_id.to_string(), commands.to_vec()));
            if self.fail_for.iter().any(|g| g == guild_id) {
                return Err(Error::invalid_input("missing access"));
            }
            Ok(())
        }
    }

    #[test]
    fn setup_command_shape() {
        let commands = guild_commands();
        assert_eq!(commands.len(), 1);
        let cmd = &commands[0];
        assert_eq!(cmd.name, "tellpanel");
        assert!(cmd.admin_only);
        assert_eq!(cmd.channel_options.len(), 1);
        let opt = &cmd.channel_options[0];
        assert_eq!(opt.name, "log");
        assert!(opt.required);
        assert!(opt.text_only);
    }

    #[tokio::test]
    async fn registers_every_guild() {
        let registrar = RecordingRegistrar::default();
        let guilds = vec!["1".to_string(), "2".to_string()];
        let report = register_in_guilds(&registrar, &guilds).await;
        assert_eq!(
            report,
            RegistrationReport {
                registered: 2,
                failed: 0
            }
        );
        let calls = registrar.calls.lock().unwrap();
        assert_eq!(calls[0].0, "1");
        assert_eq!(calls[1].0, "2");
        assert_eq!(calls[0].1, guild_commands());
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_loop() {
        let registrar = RecordingRegistrar {
            fail_for: vec!["2".into()],
            ..Default::default()
        };
        let guilds = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let report = register_in_guilds(&registrar, &guilds).await;
        assert_eq!(report.registered, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(registrar.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn repeated_registration_is_stable() {
        let registrar = RecordingRegistrar::default();
        let guilds = vec!["1".to_string()];
        register_in_guilds(&registrar, &guilds).await;
        register_in_guilds(&registrar, &guilds).await;
        let calls = registrar.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
