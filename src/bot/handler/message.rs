use serenity::all::{Context, Message};

use crate::{
    command,
    data::guild::DiscordGuildRepository,
    model::invocation::Invocation,
    state::BotState,
};

/// Handle message creation in a channel
///
/// Messages from bots and messages that do not invoke a known command are ignored.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(parsed) = command::parse(&message.content, &state.config.prefix) else {
        return;
    };

    let invocation = Invocation::from_message(&message);
    let api = DiscordGuildRepository::new(&ctx, state.config.guild_id);

    command::run(&api, state, &invocation, parsed).await;
}
