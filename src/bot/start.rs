use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Starts the Discord bot and runs it until shutdown.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration
///
/// # Returns
/// - `Ok(())` - The gateway connection closed cleanly
/// - `Err(AppError::DiscordErr)` - Client initialization or connection failed
pub async fn start_bot(state: BotState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let token = state.config.discord_bot_token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
