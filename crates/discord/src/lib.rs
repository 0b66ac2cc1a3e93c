//! Discord adapter for the relay flow.
//!
//! Connects to the gateway with serenity, registers the setup command in
//! every guild on `ready`, and feeds interactions to the
//! [`RelayRouter`](tellbot_relay::RelayRouter).

pub mod bot;
pub mod commands;
pub mod config;
pub mod handler;
pub mod interaction;
pub mod outbound;

pub use {bot::run, config::DiscordBotConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Discord(#[from] serenity::Error),

    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
