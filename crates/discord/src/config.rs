use {
    chrono_tz::Tz,
    secrecy::{ExposeSecret, Secret},
};

use crate::{Error, Result};

/// Settings for one bot connection, taken from the environment.
#[derive(Clone)]
pub struct DiscordBotConfig {
    /// Bot token from the Discord developer portal.
    pub token: Secret<String>,

    /// The only user allowed to run slash commands.
    pub admin_id: String,

    /// Zone log timestamps are rendered in.
    pub timezone: Tz,
}

impl DiscordBotConfig {
    /// Build a config, rejecting an empty token or admin id.
    pub fn new(token: Secret<String>, admin_id: impl Into<String>, timezone: Tz) -> Result<Self> {
        let admin_id = admin_id.into().trim().to_string();
        if token.expose_secret().trim().is_empty() {
            return Err(Error::message("discord bot token is empty"));
        }
        if admin_id.is_empty() {
            return Err(Error::message("admin user id is empty"));
        }
        Ok(Self {
            token,
            admin_id,
            timezone,
        })
    }
}

impl std::fmt::Debug for DiscordBotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordBotConfig")
            .field("token", &"[REDACTED]")
            .field("admin_id", &self.admin_id)
            .field("timezone", &self.timezone)
            .finish()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let cfg = DiscordBotConfig::new(
            Secret::new("super-secret".into()),
            "123",
            chrono_tz::Asia::Bangkok,
        )
        .unwrap();
        let dbg = format!("{cfg:?}");
        assert!(dbg.contains("[REDACTED]"));
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("123"));
    }

    #[test]
    fn admin_id_is_trimmed() {
        let cfg =
            DiscordBotConfig::new(Secret::new("tok".into()), " 42 \n", chrono_tz::UTC).unwrap();
        assert_eq!(cfg.admin_id, "42");
    }

    #[test]
    fn empty_values_are_rejected() {
        assert!(DiscordBotConfig::new(Secret::new(String::new()), "1", chrono_tz::UTC).is_err());
        assert!(DiscordBotConfig::new(Secret::new("tok".into()), "  ", chrono_tz::UTC).is_err());
    }
}
