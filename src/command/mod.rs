//! Prefix command parsing and dispatch.
//!
//! A message starting with the configured prefix is split into a command name and
//! its arguments. `run` then checks the guild, resolves the command context
//! through `CommandGuard`, calls the matching service and acknowledges the
//! message with ✅, or replies with the rejection.

pub mod help;

#[cfg(test)]
mod test;

use std::str::FromStr;

use chrono::Utc;

use crate::{
    data::guild::GuildApi,
    error::{command::CommandError, AppError},
    middleware::guard::{check_guild, CommandGuard, Scope},
    model::invocation::Invocation,
    service::{
        challenge::ChallengeService,
        ctf::CtfService,
        ctftime::format_events,
        membership::MembershipService,
    },
    state::BotState,
    util::parse::{parse_role_id, split_arguments},
};

/// Reaction acknowledging a successful command.
pub const CHECK_EMOJI: &str = "✅";

/// Reply sent after a challenge is marked solved.
pub const SOLVED_MESSAGE: &str = ":tada: Congratulations!";

/// Default window of `upcoming`, in days.
pub const DEFAULT_UPCOMING_DAYS: u32 = 10;

/// Largest window accepted by `upcoming`, in days.
pub const MAX_UPCOMING_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    NewCtf,
    RenameCtf,
    OverCtf,
    DeleteCtf,
    NewChall,
    RenameChall,
    Solved,
    Unsolved,
    Join,
    Leave,
    Upcoming,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Command::Help),
            "new-ctf" => Ok(Command::NewCtf),
            "rename-ctf" => Ok(Command::RenameCtf),
            "over-ctf" => Ok(Command::OverCtf),
            "delete-ctf" => Ok(Command::DeleteCtf),
            "new-chall" => Ok(Command::NewChall),
            "rename-chall" => Ok(Command::RenameChall),
            "solved" => Ok(Command::Solved),
            "unsolved" => Ok(Command::Unsolved),
            "join" => Ok(Command::Join),
            "leave" => Ok(Command::Leave),
            "upcoming" | "upcomings" => Ok(Command::Upcoming),
            _ => Err(()),
        }
    }
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 12] = [
        Command::NewCtf,
        Command::RenameCtf,
        Command::OverCtf,
        Command::DeleteCtf,
        Command::NewChall,
        Command::RenameChall,
        Command::Solved,
        Command::Unsolved,
        Command::Join,
        Command::Leave,
        Command::Upcoming,
        Command::Help,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::NewCtf => "new-ctf",
            Command::RenameCtf => "rename-ctf",
            Command::OverCtf => "over-ctf",
            Command::DeleteCtf => "delete-ctf",
            Command::NewChall => "new-chall",
            Command::RenameChall => "rename-chall",
            Command::Solved => "solved",
            Command::Unsolved => "unsolved",
            Command::Join => "join",
            Command::Leave => "leave",
            Command::Upcoming => "upcoming",
        }
    }

    /// Help section the command is listed under.
    pub fn group(self) -> &'static str {
        match self {
            Command::NewCtf | Command::RenameCtf | Command::OverCtf | Command::DeleteCtf => "CTF",
            Command::NewChall | Command::RenameChall | Command::Solved | Command::Unsolved => {
                "Challenge"
            }
            Command::Join | Command::Leave => "Membership",
            Command::Upcoming | Command::Help => "Misc",
        }
    }

    pub fn scope(self) -> Scope {
        match self {
            Command::NewCtf | Command::DeleteCtf | Command::Join => Scope::BotChannel,
            Command::RenameCtf | Command::OverCtf | Command::NewChall | Command::Leave => {
                Scope::CtfCategory
            }
            Command::RenameChall | Command::Solved | Command::Unsolved => Scope::ChallengeChannel,
            Command::Help | Command::Upcoming => Scope::Anywhere,
        }
    }

    /// Usage text, one line per place the command can be invoked from.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Help => "anywhere: help",
            Command::NewCtf => "bot channel: new-ctf [ctf-name] [role-ids...]",
            Command::RenameCtf => {
                "bot channel: rename-ctf [ctf-name] [new-name]\n\
                 ctf channel: rename-ctf [new-name]"
            }
            Command::OverCtf => {
                "bot channel: over-ctf [ctf-name]\n\
                 ctf channel: over-ctf"
            }
            Command::DeleteCtf => {
                "bot channel: delete-ctf [ctf-name] [sha256-of-ctf-name]\n\
                 (printf ctf-name | sha256sum)"
            }
            Command::NewChall => {
                "bot channel: new-chall [ctf-name] [chall-name]\n\
                 ctf channel: new-chall [chall-name]"
            }
            Command::RenameChall => {
                "  bot channel: rename-chall [ctf-name] [chall-name] [new-name]\n\
                 \x20 ctf channel: rename-chall [chall-name] [new-name]\n\
                 chall channel: rename-chall [new-name]"
            }
            Command::Solved => {
                "  bot channel: solved [ctf-name] [chall-name]\n\
                 \x20 ctf channel: solved [chall-name]\n\
                 chall channel: solved"
            }
            Command::Unsolved => {
                "  bot channel: unsolved [ctf-name] [chall-name]\n\
                 \x20 ctf channel: unsolved [chall-name]\n\
                 chall channel: unsolved"
            }
            Command::Join => "bot channel: join [ctf-name]",
            Command::Leave => {
                "bot channel: leave [ctf-name]\n\
                 ctf channel: leave"
            }
            Command::Upcoming => "anywhere: upcoming [days (1-365, default 10)]",
        }
    }

    /// Whether success is acknowledged with ✅ rather than by the reply itself.
    pub fn acknowledges(self) -> bool {
        !matches!(self, Command::Help | Command::Upcoming)
    }
}

/// A recognized command and its explicit arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub args: Vec<String>,
}

/// Parses a message into a command.
///
/// # Arguments
/// - `content` - Full message content
/// - `prefix` - Configured command prefix
///
/// # Returns
/// - `Some(ParsedCommand)` - The message invokes a known command
/// - `None` - No prefix, or an unknown command name
pub fn parse(content: &str, prefix: &str) -> Option<ParsedCommand> {
    let body = content.trim_start().strip_prefix(prefix)?;
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (body, ""),
    };

    let command = name.parse::<Command>().ok()?;

    Some(ParsedCommand {
        command,
        args: split_arguments(rest),
    })
}

/// Runs a parsed command and reports its outcome to the invoker.
///
/// Rejections are answered with a reply and logged at `warn`; remote failures are
/// logged at `error` without a reply.
///
/// # Arguments
/// - `api` - Guild API the command reads and mutates the guild through
/// - `state` - Shared bot state
/// - `invocation` - Message the command was parsed from
/// - `parsed` - The command and its explicit arguments
pub async fn run(
    api: &dyn GuildApi,
    state: &BotState,
    invocation: &Invocation,
    parsed: ParsedCommand,
) {
    let command = parsed.command;

    tracing::info!(
        "{} ({}) invoked {} {:?} in channel {}",
        invocation.invoker.display_name,
        invocation.invoker.user_id,
        command.name(),
        parsed.args,
        invocation.channel_id
    );

    match execute(api, state, invocation, parsed).await {
        Ok(()) => {
            if !command.acknowledges() {
                return;
            }
            if let Err(e) = api
                .react(invocation.channel_id, invocation.message_id, CHECK_EMOJI)
                .await
            {
                tracing::error!("Failed to acknowledge {}: {}", command.name(), e);
            }
        }
        Err(AppError::CommandErr(e)) => {
            tracing::warn!(
                "Rejected {} from user {}: {}",
                command.name(),
                invocation.invoker.user_id,
                e
            );
            if let Err(reply_err) = api
                .reply(
                    invocation.channel_id,
                    invocation.message_id,
                    &e.reply_message(),
                )
                .await
            {
                tracing::error!("Failed to reply to {}: {}", command.name(), reply_err);
            }
        }
        Err(e) => {
            tracing::error!("Failed to execute {}: {}", command.name(), e);
        }
    }
}

async fn execute(
    api: &dyn GuildApi,
    state: &BotState,
    invocation: &Invocation,
    parsed: ParsedCommand,
) -> Result<(), AppError> {
    let config = state.config.as_ref();
    let command = parsed.command;

    check_guild(config, invocation)?;

    // Commands usable anywhere never need the guild layout.
    if command.scope() == Scope::Anywhere {
        return match command {
            Command::Upcoming => {
                let days = parse_days(parsed.args.first().map(String::as_str))?;
                let events = state.ctftime.upcoming(Utc::now(), days).await?;
                for message in format_events(&events) {
                    reply(api, invocation, &message).await?;
                }
                Ok(())
            }
            _ => reply(api, invocation, &help::render(&config.prefix)).await,
        };
    }

    let guild = api.snapshot().await?;
    let args = CommandGuard::new(config, &guild, invocation).require(
        command.scope(),
        command.usage(),
        parsed.args,
    )?;
    let usage = command.usage();

    match command {
        Command::NewCtf => {
            let name = required(&args, 0, usage)?;
            let role_ids = args[1..]
                .iter()
                .map(|arg| parse_role_id(arg))
                .collect::<Result<Vec<_>, _>>()?;
            CtfService::new(api, config)
                .create(&guild, name, &role_ids)
                .await
        }
        Command::RenameCtf => {
            CtfService::new(api, config)
                .rename(&guild, required(&args, 0, usage)?, required(&args, 1, usage)?)
                .await
        }
        Command::OverCtf => {
            CtfService::new(api, config)
                .publish(&guild, required(&args, 0, usage)?)
                .await
        }
        Command::DeleteCtf => {
            CtfService::new(api, config)
                .delete(&guild, required(&args, 0, usage)?, required(&args, 1, usage)?)
                .await
        }
        Command::NewChall => {
            ChallengeService::new(api, config)
                .create(&guild, required(&args, 0, usage)?, required(&args, 1, usage)?)
                .await
        }
        Command::RenameChall => {
            ChallengeService::new(api, config)
                .rename(
                    &guild,
                    required(&args, 0, usage)?,
                    required(&args, 1, usage)?,
                    required(&args, 2, usage)?,
                )
                .await
        }
        Command::Solved => {
            ChallengeService::new(api, config)
                .mark_solved(&guild, required(&args, 0, usage)?, required(&args, 1, usage)?)
                .await?;
            reply(api, invocation, SOLVED_MESSAGE).await
        }
        Command::Unsolved => {
            ChallengeService::new(api, config)
                .mark_unsolved(&guild, required(&args, 0, usage)?, required(&args, 1, usage)?)
                .await
        }
        Command::Join => {
            MembershipService::new(api, config)
                .join(&guild, required(&args, 0, usage)?, &invocation.invoker)
                .await
        }
        Command::Leave => {
            MembershipService::new(api, config)
                .leave(&guild, required(&args, 0, usage)?, &invocation.invoker)
                .await
        }
        Command::Help | Command::Upcoming => Ok(()),
    }
}

async fn reply(api: &dyn GuildApi, invocation: &Invocation, content: &str) -> Result<(), AppError> {
    api.reply(invocation.channel_id, invocation.message_id, content)
        .await
}

/// Positional argument that must be present and non-empty.
fn required<'a>(
    args: &'a [String],
    index: usize,
    usage: &'static str,
) -> Result<&'a str, CommandError> {
    match args.get(index) {
        Some(arg) if !arg.trim().is_empty() => Ok(arg.as_str()),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Parses the window of `upcoming`.
///
/// # Returns
/// - `Ok(u32)` - The given day count, or `DEFAULT_UPCOMING_DAYS` when absent
/// - `Err(CommandError::InvalidDays)` - Not a number between 1 and `MAX_UPCOMING_DAYS`
fn parse_days(arg: Option<&str>) -> Result<u32, CommandError> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_UPCOMING_DAYS);
    };

    match arg.parse::<u32>() {
        Ok(days) if (1..=MAX_UPCOMING_DAYS).contains(&days) => Ok(days),
        _ => Err(CommandError::InvalidDays(arg.to_string())),
    }
}
