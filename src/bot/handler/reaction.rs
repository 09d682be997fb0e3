use serenity::all::{Context, Reaction, ReactionType};

use crate::{
    data::guild::DiscordGuildRepository,
    service::pin::{PinService, PIN_EMOJI},
    state::BotState,
};

/// Handle a reaction added to a message
///
/// A 📌 reaction toggles the pinned state of the message it was added to.
/// Reactions added by the bot itself are ignored.
pub async fn handle_reaction_add(state: &BotState, ctx: Context, reaction: Reaction) {
    if !matches!(&reaction.emoji, ReactionType::Unicode(emoji) if emoji == PIN_EMOJI) {
        return;
    }

    let Some(user_id) = reaction.user_id else {
        tracing::debug!("Ignoring pin reaction without a user");
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }

    let api = DiscordGuildRepository::new(&ctx, state.config.guild_id);

    if let Err(e) = PinService::new(&api)
        .toggle(reaction.channel_id, reaction.message_id, user_id)
        .await
    {
        tracing::error!(
            "Failed to toggle pin of message {} in channel {}: {}",
            reaction.message_id,
            reaction.channel_id,
            e
        );
    }
}
