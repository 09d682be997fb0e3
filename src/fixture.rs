//! Shared fixtures for unit tests.
//!
//! Lays out a guild with an administrative category (bot channel and a general
//! channel), a channel outside any category, and a private CTF `dummyctf` visible
//! to the member role only.

use serenity::all::{
    ChannelId, GuildId, MessageId, PermissionOverwrite, PermissionOverwriteType, Permissions,
    RoleId, UserId,
};
use test_utils::{builder::GuildBuilder, serenity::create_test_partial_member};

use crate::{
    config::Config,
    middleware::permission::PARTICIPANT_PERMISSIONS,
    model::invocation::{Invocation, Invoker},
};

pub const GUILD_ID: u64 = 1;
pub const MEMBER_ROLE_ID: u64 = 10;
pub const BOT_ROLE_ID: u64 = 11;
pub const GUEST_ROLE_ID: u64 = 12;

pub const SPECIAL_CATEGORY_ID: u64 = 40;
pub const BOT_CHANNEL_ID: u64 = 50;
pub const GENERAL_CHANNEL_ID: u64 = 60;
pub const LOUNGE_CHANNEL_ID: u64 = 70;

pub const CTF_CATEGORY_ID: u64 = 100;
pub const CTF_SOLVED_CATEGORY_ID: u64 = 101;
pub const CTF_MAIN_CHANNEL_ID: u64 = 102;
pub const CHALL_CHANNEL_ID: u64 = 110;
pub const SOLVED_CHALL_CHANNEL_ID: u64 = 111;

pub const MEMBER_USER_ID: u64 = 1000;
pub const OUTSIDER_USER_ID: u64 = 2000;

pub fn config() -> Config {
    Config {
        discord_bot_token: "token".to_string(),
        guild_id: GuildId::new(GUILD_ID),
        bot_channel_id: ChannelId::new(BOT_CHANNEL_ID),
        bot_role_ids: vec![RoleId::new(BOT_ROLE_ID)],
        member_role_ids: vec![RoleId::new(MEMBER_ROLE_ID)],
        special_category_ids: vec![ChannelId::new(SPECIAL_CATEGORY_ID)],
        main_channel_name: "main".to_string(),
        prefix: "!".to_string(),
        ctftime_url: "http://127.0.0.1:9/api/v1/events/".to_string(),
    }
}

pub fn role_overwrite(role_id: u64, allow: Permissions, deny: Permissions) -> PermissionOverwrite {
    PermissionOverwrite {
        allow,
        deny,
        kind: PermissionOverwriteType::Role(RoleId::new(role_id)),
    }
}

pub fn member_overwrite(user_id: u64, allow: Permissions, deny: Permissions) -> PermissionOverwrite {
    PermissionOverwrite {
        allow,
        deny,
        kind: PermissionOverwriteType::Member(UserId::new(user_id)),
    }
}

/// Guild without any CTF.
pub fn base_guild() -> GuildBuilder {
    GuildBuilder::new(GUILD_ID)
        .with_role(MEMBER_ROLE_ID, "member", 0)
        .with_role(BOT_ROLE_ID, "bot", 0)
        .with_role(GUEST_ROLE_ID, "guest", 0)
        .with_category(SPECIAL_CATEGORY_ID, "admin")
        .with_text_channel(BOT_CHANNEL_ID, "bot", Some(SPECIAL_CATEGORY_ID))
        .with_text_channel(GENERAL_CHANNEL_ID, "general", Some(SPECIAL_CATEGORY_ID))
        .with_text_channel(LOUNGE_CHANNEL_ID, "lounge", None)
}

/// Guild with the private CTF `dummyctf`, one unsolved and one solved challenge.
pub fn ctf_guild() -> GuildBuilder {
    let private = |builder: GuildBuilder, category_id: u64| {
        builder
            .with_overwrite(
                category_id,
                role_overwrite(GUILD_ID, Permissions::empty(), PARTICIPANT_PERMISSIONS),
            )
            .with_overwrite(
                category_id,
                role_overwrite(MEMBER_ROLE_ID, PARTICIPANT_PERMISSIONS, Permissions::empty()),
            )
    };

    let builder = base_guild()
        .with_ctf(CTF_CATEGORY_ID, "dummyctf", "main")
        .with_text_channel(CHALL_CHANNEL_ID, "pwn-baby", Some(CTF_CATEGORY_ID))
        .with_text_channel(SOLVED_CHALL_CHANNEL_ID, "web-easy", Some(CTF_SOLVED_CATEGORY_ID));
    let builder = private(builder, CTF_CATEGORY_ID);
    private(builder, CTF_SOLVED_CATEGORY_ID)
}

pub fn invocation(channel_id: u64, user_id: u64, role_ids: &[u64]) -> Invocation {
    Invocation {
        guild_id: Some(GuildId::new(GUILD_ID)),
        channel_id: ChannelId::new(channel_id),
        message_id: MessageId::new(999_999),
        invoker: Invoker {
            user_id: UserId::new(user_id),
            display_name: format!("user{}", user_id),
            member: Some(create_test_partial_member(GUILD_ID, role_ids)),
        },
    }
}

/// Member of the `member` role.
pub fn member_in(channel_id: u64) -> Invocation {
    invocation(channel_id, MEMBER_USER_ID, &[MEMBER_ROLE_ID])
}

/// User holding only the `guest` role.
pub fn outsider_in(channel_id: u64) -> Invocation {
    invocation(channel_id, OUTSIDER_USER_ID, &[GUEST_ROLE_ID])
}
