use serenity::all::{ChannelId, MessageId, UserId};

use crate::{data::guild::GuildApi, error::AppError};

/// Reaction toggling the pinned state of a message.
pub const PIN_EMOJI: &str = "📌";

pub struct PinService<'a> {
    api: &'a dyn GuildApi,
}

impl<'a> PinService<'a> {
    pub fn new(api: &'a dyn GuildApi) -> Self {
        Self { api }
    }

    /// Removes the pin reaction of `user_id` and flips the message's pinned state.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new pinned state
    /// - `Err(AppError::DiscordErr)` - The message could not be read or (un)pinned
    pub async fn toggle(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        user_id: UserId,
    ) -> Result<bool, AppError> {
        self.api
            .remove_reaction(channel_id, message_id, user_id, PIN_EMOJI)
            .await?;

        let pinned = !self.api.is_pinned(channel_id, message_id).await?;
        self.api.set_pinned(channel_id, message_id, pinned).await?;

        tracing::debug!(
            "Message {} in channel {} {}",
            message_id,
            channel_id,
            if pinned { "pinned" } else { "unpinned" }
        );

        Ok(pinned)
    }
}
