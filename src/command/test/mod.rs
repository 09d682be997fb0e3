use serenity::all::{ChannelId, PermissionOverwriteType, Permissions, RoleId, UserId};
use test_utils::builder::GuildBuilder;

use crate::{
    command::{parse, run, CHECK_EMOJI},
    data::fake::{Call, FakeGuildApi},
    fixture::{self, *},
    middleware::permission::{can_view, PARTICIPANT_PERMISSIONS},
    model::{guild::GuildSnapshot, invocation::Invocation},
    state::BotState,
};


fn state() -> BotState {
    BotState::new(fixture::config(), reqwest::Client::new())
}

fn fake(builder: GuildBuilder) -> FakeGuildApi {
    FakeGuildApi::new(builder.build())
}

/// Parses and runs a command message against the fake guild.
async fn send(api: &FakeGuildApi, invocation: &Invocation, content: &str) {
    let parsed = parse(content, "!").expect("test message must invoke a known command");
    run(api, &state(), invocation, parsed).await;
}

/// Asserts the command was rejected with exactly one reply and nothing else changed.
fn assert_rejected(api: &FakeGuildApi, expected_reply: &str) {
    assert!(
        api.mutations().is_empty(),
        "unexpected mutations: {:?}",
        api.mutations()
    );
    assert_eq!(api.replies(), vec![expected_reply.to_string()]);
    assert!(api.reactions().is_empty());
}

fn assert_acknowledged(api: &FakeGuildApi) {
    assert_eq!(api.reactions(), vec![CHECK_EMOJI.to_string()]);
}

fn can_view_category(guild: &GuildSnapshot, category_id: u64, invocation: &Invocation) -> bool {
    let category = guild
        .channel(ChannelId::new(category_id))
        .expect("category must exist");
    can_view(guild, category, &invocation.invoker)
}
