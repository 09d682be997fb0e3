use serenity::all::{ChannelId, Permissions};

use super::*;
use crate::middleware::permission::{can_view, effective_permissions, PARTICIPANT_PERMISSIONS};

fn category(guild: &GuildSnapshot) -> &serenity::all::GuildChannel {
    guild.channel(ChannelId::new(CTF_CATEGORY_ID)).unwrap()
}

/// Tests role overwrites grant access over a denied @everyone.
///
/// Expected: members view the category, outsiders do not
#[test]
fn role_overwrite_overrides_everyone() {
    let guild: GuildSnapshot = ctf_guild().build().into();

    let member = member_in(BOT_CHANNEL_ID).invoker;
    let outsider = outsider_in(BOT_CHANNEL_ID).invoker;

    assert!(can_view(&guild, category(&guild), &member));
    assert!(effective_permissions(&guild, category(&guild), &member).contains(PARTICIPANT_PERMISSIONS));
    assert!(!can_view(&guild, category(&guild), &outsider));
}

/// Tests a member deny overwrite wins over a role allow.
///
/// Expected: the member loses access after leaving
#[test]
fn member_overwrite_overrides_roles() {
    let guild: GuildSnapshot = ctf_guild()
        .with_overwrite(
            CTF_CATEGORY_ID,
            member_overwrite(MEMBER_USER_ID, Permissions::empty(), PARTICIPANT_PERMISSIONS),
        )
        .build()
        .into();

    let member = member_in(BOT_CHANNEL_ID).invoker;
    assert!(!can_view(&guild, category(&guild), &member));
}

/// Tests a member allow overwrite grants access without any role.
///
/// Expected: the outsider gains access after joining
#[test]
fn member_allow_grants_access() {
    let guild: GuildSnapshot = ctf_guild()
        .with_overwrite(
            CTF_CATEGORY_ID,
            member_overwrite(OUTSIDER_USER_ID, PARTICIPANT_PERMISSIONS, Permissions::empty()),
        )
        .build()
        .into();

    let outsider = outsider_in(BOT_CHANNEL_ID).invoker;
    assert!(can_view(&guild, category(&guild), &outsider));
}

/// Tests administrators and the owner bypass overwrites.
///
/// Expected: Permissions::all() for both
#[test]
fn administrators_and_owner_hold_everything() {
    let guild: GuildSnapshot = ctf_guild()
        .with_role(90, "admin", Permissions::ADMINISTRATOR.bits())
        .owner(3000)
        .build()
        .into();

    let admin = invocation(BOT_CHANNEL_ID, 2500, &[90]).invoker;
    assert_eq!(
        effective_permissions(&guild, category(&guild), &admin),
        Permissions::all()
    );

    let owner = invocation(BOT_CHANNEL_ID, 3000, &[]).invoker;
    assert_eq!(
        effective_permissions(&guild, category(&guild), &owner),
        Permissions::all()
    );
}

/// Tests channels without overwrites follow the base role permissions.
///
/// Expected: everyone views the lounge
#[test]
fn base_permissions_apply_without_overwrites() {
    let guild: GuildSnapshot = ctf_guild().build().into();
    let lounge = guild.channel(ChannelId::new(LOUNGE_CHANNEL_ID)).unwrap();

    assert!(can_view(&guild, lounge, &outsider_in(LOUNGE_CHANNEL_ID).invoker));
}

/// Tests a role deny is lifted by another role's allow.
///
/// Expected: allows from any role win over denies from other roles
#[test]
fn role_allow_wins_over_role_deny() {
    let guild: GuildSnapshot = ctf_guild()
        .with_overwrite(
            CTF_CATEGORY_ID,
            role_overwrite(GUEST_ROLE_ID, Permissions::empty(), Permissions::VIEW_CHANNEL),
        )
        .build()
        .into();

    let both = invocation(BOT_CHANNEL_ID, 4000, &[MEMBER_ROLE_ID, GUEST_ROLE_ID]).invoker;
    assert!(can_view(&guild, category(&guild), &both));
}

/// Tests an invoker without guild membership.
///
/// Expected: no permissions, even where @everyone may view
#[test]
fn non_members_hold_nothing() {
    let guild: GuildSnapshot = ctf_guild().build().into();
    let lounge = guild.channel(ChannelId::new(LOUNGE_CHANNEL_ID)).unwrap();

    let mut stranger = outsider_in(LOUNGE_CHANNEL_ID).invoker;
    stranger.member = None;

    assert_eq!(
        effective_permissions(&guild, lounge, &stranger),
        Permissions::empty()
    );
    assert!(!can_view(&guild, lounge, &stranger));
}
