use serenity::all::{ChannelId, GuildId, Message, MessageId, PartialMember, UserId};

/// The user who sent a command.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub user_id: UserId,
    /// Guild nickname, falling back to the global display name.
    pub display_name: String,
    /// Guild membership of the invoker; `None` in direct messages.
    pub member: Option<PartialMember>,
}

/// Where and by whom a command was sent.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Guild the message was sent in; `None` for direct messages.
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub invoker: Invoker,
}

impl Invocation {
    /// Extracts the invocation details of a command message.
    ///
    /// Guild messages carry a partial member with the author's nickname and roles;
    /// direct messages have neither.
    pub fn from_message(message: &Message) -> Self {
        let member = message.member.as_deref();

        let display_name = member
            .and_then(|member| member.nick.clone())
            .unwrap_or_else(|| message.author.display_name().to_string());

        Self {
            guild_id: message.guild_id,
            channel_id: message.channel_id,
            message_id: message.id,
            invoker: Invoker {
                user_id: message.author.id,
                display_name,
                member: member.cloned(),
            },
        }
    }
}
