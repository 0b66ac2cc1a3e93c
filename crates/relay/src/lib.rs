//! Anonymous relay flow.
//!
//! Platform-neutral core of the bot: the correlation-id protocol, the events
//! the router understands, the outbound trait a platform adapter implements,
//! and the router that walks a user from the panel to log delivery.

pub mod commands;
pub mod correlation;
pub mod error;
pub mod event;
pub mod outbound;
pub mod router;
pub mod template;
pub mod time;

pub use {
    commands::{CommandDefinition, CommandRegistrar, RegistrationReport, register_in_guilds},
    error::{Error, Result},
    event::{CommandOption, InteractionEvent, OptionValue},
    outbound::{
        Button, CustomEmoji, Embed, MessageForm, Panel, PostedMessage, RelayOutbound,
        ResolvedChannel, TextInput, UserPicker,
    },
    router::{RelayRouter, RelayState},
};
