use crate::{
    error::command::CommandError,
    fixture::{self, *},
    middleware::guard::{check_guild, CommandGuard, Scope},
    model::guild::GuildSnapshot,
};

mod permission;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Tests commands from another guild are rejected.
///
/// Expected: Err(CommandError::ForeignGuild) for a foreign guild and for DMs
#[test]
fn rejects_foreign_guilds() {
    let config = fixture::config();

    let mut foreign = member_in(BOT_CHANNEL_ID);
    foreign.guild_id = Some(serenity::all::GuildId::new(GUILD_ID + 1));
    assert!(matches!(
        check_guild(&config, &foreign),
        Err(CommandError::ForeignGuild)
    ));

    let mut direct = member_in(BOT_CHANNEL_ID);
    direct.guild_id = None;
    assert!(matches!(
        check_guild(&config, &direct),
        Err(CommandError::ForeignGuild)
    ));

    assert!(check_guild(&config, &member_in(BOT_CHANNEL_ID)).is_ok());
}

/// Tests `Anywhere` commands pass through unchanged.
///
/// Expected: Ok with the explicit arguments only
#[test]
fn anywhere_passes_arguments_through() {
    let config = fixture::config();
    let guild: GuildSnapshot = ctf_guild().build().into();
    let invocation = member_in(CHALL_CHANNEL_ID);

    let guard = CommandGuard::new(&config, &guild, &invocation);
    let resolved = guard.require(Scope::Anywhere, "usage", args(&["7"])).unwrap();

    assert_eq!(resolved, args(&["7"]));
}
