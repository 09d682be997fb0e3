//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake. Logs the
//! connection, warns when the configured guild is not among the bot's guilds, and
//! advertises the help command as the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for setting the activity
/// - `ready` - Ready event data containing the bot user and its guilds
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = state.config.guild_id;
    if !ready.guilds.iter().any(|guild| guild.id == guild_id) {
        tracing::warn!(
            "Bot is not a member of the configured guild {}; every command will be refused",
            guild_id
        );
    }

    ctx.set_activity(Some(ActivityData::playing(format!(
        "{}help",
        state.config.prefix
    ))));
}
