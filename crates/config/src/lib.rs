//! Persisted bot state.
//!
//! The state file is a flat JSON object (`config.json` by default) holding the
//! log channel and the location of the published panel. It must exist before
//! the bot starts, even if it only contains `{}`.

pub mod error;
pub mod schema;
pub mod store;

pub use {
    error::{Error, Result},
    schema::{BotConfig, ConfigPatch},
    store::ConfigStore,
};
