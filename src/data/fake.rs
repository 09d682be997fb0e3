//! In-memory `GuildApi` for tests.
//!
//! Applies every mutation to its own `GuildSnapshot`, so a sequence of commands
//! observes the effects of the previous ones, and records every call for
//! assertions.

use std::collections::HashSet;
use std::sync::Mutex;

use serenity::all::{
    ChannelId, GuildChannel, MessageId, PermissionOverwrite, PermissionOverwriteType, UserId,
};
use serenity::async_trait;
use test_utils::{
    context::TestGuild,
    serenity::{create_test_category, create_test_text_channel},
};

use crate::{
    data::guild::{ChannelUpdate, GuildApi},
    error::AppError,
    model::guild::GuildSnapshot,
};

/// A call made through `FakeGuildApi`.
#[derive(Debug, Clone)]
pub enum Call {
    CreateCategory {
        name: String,
        overwrites: Vec<PermissionOverwrite>,
    },
    CreateTextChannel {
        name: String,
        parent_id: ChannelId,
    },
    EditChannel {
        channel_id: ChannelId,
        update: ChannelUpdate,
    },
    SetOverwrite {
        channel_id: ChannelId,
        overwrite: PermissionOverwrite,
    },
    DeleteChannel(ChannelId),
    SendMessage {
        channel_id: ChannelId,
        content: String,
    },
    Reply(String),
    React(String),
    RemoveReaction {
        user_id: UserId,
        emoji: String,
    },
    SetPinned(bool),
}

impl Call {
    /// Whether the call changes categories, channels or overwrites.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CreateCategory { .. }
                | Self::CreateTextChannel { .. }
                | Self::EditChannel { .. }
                | Self::SetOverwrite { .. }
                | Self::DeleteChannel(_)
        )
    }
}

struct FakeState {
    snapshot: GuildSnapshot,
    calls: Vec<Call>,
    next_id: u64,
    pinned: HashSet<MessageId>,
}

pub struct FakeGuildApi {
    state: Mutex<FakeState>,
}

impl From<TestGuild> for GuildSnapshot {
    fn from(guild: TestGuild) -> Self {
        GuildSnapshot {
            guild: guild.guild,
            channels: guild.channels,
            threads: guild.threads,
        }
    }
}

impl FakeGuildApi {
    pub fn new(guild: TestGuild) -> Self {
        Self {
            state: Mutex::new(FakeState {
                snapshot: guild.into(),
                calls: Vec::new(),
                next_id: 10_000,
                pinned: HashSet::new(),
            }),
        }
    }

    /// Marks a message as already pinned.
    pub fn pin(&self, message_id: MessageId) {
        self.state.lock().unwrap().pinned.insert(message_id);
    }

    pub fn is_message_pinned(&self, message_id: MessageId) -> bool {
        self.state.lock().unwrap().pinned.contains(&message_id)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reply(content) => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::React(emoji) => Some(emoji),
                _ => None,
            })
            .collect()
    }

    /// Current state of the guild, mutations applied.
    pub fn current(&self) -> GuildSnapshot {
        self.state.lock().unwrap().snapshot.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn add_channel(&self, build: impl FnOnce(u64, u64) -> GuildChannel) -> GuildChannel {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let channel = build(state.snapshot.guild_id().get(), state.next_id);
        state.snapshot.channels.push(channel.clone());
        channel
    }
}

fn same_target(a: &PermissionOverwriteType, b: &PermissionOverwriteType) -> bool {
    match (a, b) {
        (PermissionOverwriteType::Member(a), PermissionOverwriteType::Member(b)) => a == b,
        (PermissionOverwriteType::Role(a), PermissionOverwriteType::Role(b)) => a == b,
        _ => false,
    }
}

#[async_trait]
impl GuildApi for FakeGuildApi {
    async fn snapshot(&self) -> Result<GuildSnapshot, AppError> {
        Ok(self.current())
    }

    async fn create_category(
        &self,
        name: &str,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<GuildChannel, AppError> {
        self.record(Call::CreateCategory {
            name: name.to_string(),
            overwrites: overwrites.clone(),
        });
        Ok(self.add_channel(|guild_id, channel_id| {
            let mut category = create_test_category(guild_id, channel_id, name);
            category.permission_overwrites = overwrites;
            category
        }))
    }

    async fn create_text_channel(
        &self,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, AppError> {
        self.record(Call::CreateTextChannel {
            name: name.to_string(),
            parent_id,
        });
        Ok(self.add_channel(|guild_id, channel_id| {
            create_test_text_channel(guild_id, channel_id, name, Some(parent_id.get()))
        }))
    }

    async fn edit_channel(
        &self,
        channel_id: ChannelId,
        update: ChannelUpdate,
    ) -> Result<(), AppError> {
        self.record(Call::EditChannel {
            channel_id,
            update: update.clone(),
        });

        let mut state = self.state.lock().unwrap();
        if let Some(channel) = state
            .snapshot
            .channels
            .iter_mut()
            .find(|channel| channel.id == channel_id)
        {
            if let Some(name) = update.name {
                channel.name = name;
            }
            if let Some(parent_id) = update.parent_id {
                channel.parent_id = Some(parent_id);
            }
            if let Some(position) = update.position {
                channel.position = position;
            }
        }
        Ok(())
    }

    async fn set_overwrite(
        &self,
        channel_id: ChannelId,
        overwrite: PermissionOverwrite,
    ) -> Result<(), AppError> {
        self.record(Call::SetOverwrite {
            channel_id,
            overwrite: overwrite.clone(),
        });

        let mut state = self.state.lock().unwrap();
        if let Some(channel) = state
            .snapshot
            .channels
            .iter_mut()
            .find(|channel| channel.id == channel_id)
        {
            channel
                .permission_overwrites
                .retain(|existing| !same_target(&existing.kind, &overwrite.kind));
            channel.permission_overwrites.push(overwrite);
        }
        Ok(())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        self.record(Call::DeleteChannel(channel_id));
        self.state
            .lock()
            .unwrap()
            .snapshot
            .channels
            .retain(|channel| channel.id != channel_id);
        Ok(())
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        self.record(Call::SendMessage {
            channel_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn reply(
        &self,
        _channel_id: ChannelId,
        _message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        self.record(Call::Reply(content.to_string()));
        Ok(())
    }

    async fn react(
        &self,
        _channel_id: ChannelId,
        _message_id: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        self.record(Call::React(emoji.to_string()));
        Ok(())
    }

    async fn remove_reaction(
        &self,
        _channel_id: ChannelId,
        _message_id: MessageId,
        user_id: UserId,
        emoji: &str,
    ) -> Result<(), AppError> {
        self.record(Call::RemoveReaction {
            user_id,
            emoji: emoji.to_string(),
        });
        Ok(())
    }

    async fn is_pinned(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<bool, AppError> {
        Ok(self.is_message_pinned(message_id))
    }

    async fn set_pinned(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        pinned: bool,
    ) -> Result<(), AppError> {
        self.record(Call::SetPinned(pinned));
        let mut state = self.state.lock().unwrap();
        if pinned {
            state.pinned.insert(message_id);
        } else {
            state.pinned.remove(&message_id);
        }
        Ok(())
    }
}
