use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, ChannelType, Context, CreateChannel, CreateMessage, EditChannel,
    Guild, GuildChannel, GuildId, Http, MessageId, PartialGuild, PermissionOverwrite, ReactionType,
    UserId,
};
use serenity::async_trait;

use crate::{error::AppError, model::guild::GuildSnapshot};

/// Changes applied to a channel by `GuildApi::edit_channel`.
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelUpdate {
    pub name: Option<String>,
    /// New parent category.
    pub parent_id: Option<ChannelId>,
    pub position: Option<u16>,
}

impl ChannelUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn move_to(parent_id: ChannelId) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    pub fn position(position: u16) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

/// Remote operations the bot performs on its guild.
///
/// Commands only ever read and mutate guild state through this trait, which keeps
/// the guard and service layers independent of the gateway connection.
#[async_trait]
pub trait GuildApi: Send + Sync {
    /// Reads the current roles and channels of the guild.
    async fn snapshot(&self) -> Result<GuildSnapshot, AppError>;

    /// Creates a category with the given permission overwrites.
    async fn create_category(
        &self,
        name: &str,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<GuildChannel, AppError>;

    /// Creates a text channel inside a category, inheriting its overwrites.
    async fn create_text_channel(
        &self,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, AppError>;

    async fn edit_channel(&self, channel_id: ChannelId, update: ChannelUpdate)
        -> Result<(), AppError>;

    /// Creates or replaces the overwrite for the overwrite's target on a channel.
    async fn set_overwrite(
        &self,
        channel_id: ChannelId,
        overwrite: PermissionOverwrite,
    ) -> Result<(), AppError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError>;

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;

    /// Sends a message replying to `message_id`.
    async fn reply(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError>;

    /// Adds a unicode emoji reaction as the bot.
    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Removes a unicode emoji reaction added by `user_id`.
    async fn remove_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        user_id: UserId,
        emoji: &str,
    ) -> Result<(), AppError>;

    async fn is_pinned(&self, channel_id: ChannelId, message_id: MessageId)
        -> Result<bool, AppError>;

    async fn set_pinned(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        pinned: bool,
    ) -> Result<(), AppError>;
}

/// `GuildApi` backed by Serenity's cache and HTTP client.
pub struct DiscordGuildRepository {
    http: Arc<Http>,
    cache: Arc<Cache>,
    guild_id: GuildId,
}

impl DiscordGuildRepository {
    pub fn new(ctx: &Context, guild_id: GuildId) -> Self {
        Self {
            http: ctx.http.clone(),
            cache: ctx.cache.clone(),
            guild_id,
        }
    }

    /// Builds a snapshot from the gateway cache, if the guild is cached.
    fn cached_snapshot(&self) -> Option<GuildSnapshot> {
        let guild = Guild::clone(&*self.cache.guild(self.guild_id)?);
        let channels = guild.channels.values().cloned().collect();
        let threads = guild.threads.clone();

        Some(GuildSnapshot {
            guild: PartialGuild::from(guild),
            channels,
            threads,
        })
    }
}

#[async_trait]
impl GuildApi for DiscordGuildRepository {
    /// Reads the guild from the cache, falling back to the REST API
    ///
    /// The cache is populated by the `GUILDS` intent once the guild becomes
    /// available; the fallback only matters right after startup.
    async fn snapshot(&self) -> Result<GuildSnapshot, AppError> {
        if let Some(snapshot) = self.cached_snapshot() {
            return Ok(snapshot);
        }

        tracing::debug!(
            "Guild {} not cached, fetching it from the API",
            self.guild_id
        );

        let guild = self.http.get_guild(self.guild_id).await?;
        let channels = self.guild_id.channels(&self.http).await?;
        let threads = self.guild_id.get_active_threads(&self.http).await?;

        Ok(GuildSnapshot {
            guild,
            channels: channels.into_values().collect(),
            threads: threads.threads,
        })
    }

    async fn create_category(
        &self,
        name: &str,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<GuildChannel, AppError> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Category)
            .permissions(overwrites);

        Ok(self.guild_id.create_channel(&self.http, builder).await?)
    }

    async fn create_text_channel(
        &self,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, AppError> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(parent_id);

        Ok(self.guild_id.create_channel(&self.http, builder).await?)
    }

    async fn edit_channel(
        &self,
        channel_id: ChannelId,
        update: ChannelUpdate,
    ) -> Result<(), AppError> {
        let mut builder = EditChannel::new();
        if let Some(name) = update.name {
            builder = builder.name(name);
        }
        if let Some(parent_id) = update.parent_id {
            builder = builder.category(parent_id);
        }
        if let Some(position) = update.position {
            builder = builder.position(position);
        }

        channel_id.edit(&self.http, builder).await?;
        Ok(())
    }

    async fn set_overwrite(
        &self,
        channel_id: ChannelId,
        overwrite: PermissionOverwrite,
    ) -> Result<(), AppError> {
        channel_id.create_permission(&self.http, overwrite).await?;
        Ok(())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        channel_id.delete(&self.http).await?;
        Ok(())
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        channel_id.say(&self.http, content).await?;
        Ok(())
    }

    async fn reply(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .content(content)
            .reference_message((channel_id, message_id));

        channel_id.send_message(&self.http, message).await?;
        Ok(())
    }

    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        channel_id
            .create_reaction(&self.http, message_id, ReactionType::Unicode(emoji.to_string()))
            .await?;
        Ok(())
    }

    async fn remove_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        user_id: UserId,
        emoji: &str,
    ) -> Result<(), AppError> {
        channel_id
            .delete_reaction(
                &self.http,
                message_id,
                Some(user_id),
                ReactionType::Unicode(emoji.to_string()),
            )
            .await?;
        Ok(())
    }

    async fn is_pinned(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<bool, AppError> {
        let message = channel_id.message(&self.http, message_id).await?;
        Ok(message.pinned)
    }

    async fn set_pinned(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        pinned: bool,
    ) -> Result<(), AppError> {
        if pinned {
            channel_id.pin(&self.http, message_id).await?;
        } else {
            channel_id.unpin(&self.http, message_id).await?;
        }
        Ok(())
    }
}
