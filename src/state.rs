//! Bot state shared across all event handlers.
//!
//! `BotState` is built once at startup and cloned into the Serenity event handler.
//! Both fields are cheap to clone: the configuration sits behind an `Arc` and the
//! CTFtime client wraps a `reqwest::Client`, which is reference-counted internally.

use std::sync::Arc;

use crate::{config::Config, service::ctftime::CtftimeClient};

#[derive(Clone)]
pub struct BotState {
    /// Configuration populated at startup and read-only afterwards.
    pub config: Arc<Config>,

    /// Client for the CTFtime events API used by `upcoming`.
    pub ctftime: CtftimeClient,
}

impl BotState {
    /// Creates the bot state.
    ///
    /// # Arguments
    /// - `config` - Validated configuration
    /// - `http_client` - HTTP client for external API requests
    ///
    /// # Returns
    /// - `BotState` - State ready to be handed to the event handler
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let ctftime = CtftimeClient::new(http_client, config.ctftime_url.clone());

        Self {
            config: Arc::new(config),
            ctftime,
        }
    }
}
