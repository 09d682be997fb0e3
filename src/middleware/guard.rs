use serenity::all::ChannelType;

use crate::{
    config::Config,
    error::command::CommandError,
    middleware::permission::can_view,
    model::{guild::GuildSnapshot, invocation::Invocation},
    util::name::{ctf_name_of_category, normalize},
};

/// Where a command may be invoked, and which names it infers from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only in the bot channel.
    BotChannel,
    /// Inside a CTF category (CTF inferred), or in the bot channel with an
    /// explicit CTF name the invoker has access to.
    CtfCategory,
    /// Inside a challenge channel (CTF and challenge inferred), inside a CTF
    /// category (CTF inferred), or in the bot channel with explicit names the
    /// invoker has access to.
    ChallengeChannel,
    /// Any channel of the guild.
    Anywhere,
}

/// Rejects commands sent from any guild other than the configured one.
///
/// Direct messages carry no guild and are rejected as well.
///
/// # Returns
/// - `Ok(())` - The command comes from the configured guild
/// - `Err(CommandError::ForeignGuild)` - It does not
pub fn check_guild(config: &Config, invocation: &Invocation) -> Result<(), CommandError> {
    if invocation.guild_id == Some(config.guild_id) {
        return Ok(());
    }
    Err(CommandError::ForeignGuild)
}

/// Resolves the context of a command and decides whether it may run.
pub struct CommandGuard<'a> {
    config: &'a Config,
    guild: &'a GuildSnapshot,
    invocation: &'a Invocation,
}

impl<'a> CommandGuard<'a> {
    pub fn new(config: &'a Config, guild: &'a GuildSnapshot, invocation: &'a Invocation) -> Self {
        Self {
            config,
            guild,
            invocation,
        }
    }

    /// Checks the scope of a command and completes its arguments.
    ///
    /// Names inferred from the invoking channel are prepended to the explicit
    /// arguments, so every command handler receives the same positional layout
    /// (`[ctf-name] [chall-name] ...`) wherever it was invoked. Explicit names given
    /// in the bot channel are subject to the participant check.
    ///
    /// # Arguments
    /// - `scope` - Where the command may be invoked
    /// - `usage` - Usage text reported when the CTF name is missing
    /// - `args` - Explicit arguments of the command
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Inferred names followed by the explicit arguments
    /// - `Err(CommandError::NotBotChannel)` - `BotChannel` command sent elsewhere
    /// - `Err(CommandError::NotCtfContext)` - `CtfCategory` command sent outside both
    ///   the bot channel and any CTF category
    /// - `Err(CommandError::NotChallengeContext)` - `ChallengeChannel` command sent
    ///   outside both the bot channel and any CTF category
    /// - `Err(CommandError::Usage | UnknownCtf | PermissionDenied)` - Participant
    ///   check failed in the bot channel
    pub fn require(
        &self,
        scope: Scope,
        usage: &'static str,
        args: Vec<String>,
    ) -> Result<Vec<String>, CommandError> {
        match scope {
            Scope::Anywhere => Ok(args),
            Scope::BotChannel => {
                if self.is_bot_channel() {
                    Ok(args)
                } else {
                    Err(CommandError::NotBotChannel)
                }
            }
            Scope::CtfCategory => {
                if let Some(ctf) = self.current_ctf_name() {
                    return Ok(prepend(vec![ctf], args));
                }
                if self.is_bot_channel() {
                    return self.participants_only(usage, args);
                }
                Err(CommandError::NotCtfContext)
            }
            Scope::ChallengeChannel => {
                if let Some(ctf) = self.current_ctf_name() {
                    return Ok(match self.current_chall_name() {
                        Some(chall) => prepend(vec![ctf, chall], args),
                        None => prepend(vec![ctf], args),
                    });
                }
                if self.is_bot_channel() {
                    return self.participants_only(usage, args);
                }
                Err(CommandError::NotChallengeContext)
            }
        }
    }

    /// Whether the command was sent in the bot channel.
    pub fn is_bot_channel(&self) -> bool {
        self.invocation.channel_id == self.config.bot_channel_id
    }

    /// Name of the CTF whose category holds the invoking channel.
    ///
    /// A thread counts as the channel it was started in.
    ///
    /// # Returns
    /// - `Some(String)` - Category name with the solved suffix stripped
    /// - `None` - The channel has no parent category, or its category is one of the
    ///   configured special categories
    pub fn current_ctf_name(&self) -> Option<String> {
        let channel = self.guild.message_channel(self.invocation.channel_id)?;
        let parent_id = channel.parent_id?;
        if self.config.special_category_ids.contains(&parent_id) {
            return None;
        }

        let category = self.guild.channel(parent_id)?;
        if category.kind != ChannelType::Category {
            return None;
        }

        Some(ctf_name_of_category(&category.name).to_string())
    }

    /// Name of the challenge whose channel the command was sent in.
    ///
    /// # Returns
    /// - `Some(String)` - Invoking channel name, when inside a CTF category
    /// - `None` - Outside any CTF category, or in the main channel
    pub fn current_chall_name(&self) -> Option<String> {
        self.current_ctf_name()?;
        let channel = self.guild.message_channel(self.invocation.channel_id)?;
        if channel.name == self.config.main_channel_name {
            return None;
        }
        Some(channel.name.clone())
    }

    /// Lets the command through only when the invoker can view the named CTF.
    fn participants_only(
        &self,
        usage: &'static str,
        args: Vec<String>,
    ) -> Result<Vec<String>, CommandError> {
        let Some(ctf_name) = args.first() else {
            return Err(CommandError::Usage(usage));
        };

        let Some(category) = self.guild.ctf_category(&normalize(ctf_name)) else {
            return Err(CommandError::UnknownCtf(ctf_name.clone()));
        };

        if !can_view(self.guild, category, &self.invocation.invoker) {
            tracing::warn!(
                "User {} denied access to CTF {}",
                self.invocation.invoker.user_id,
                category.name
            );
            return Err(CommandError::PermissionDenied);
        }

        Ok(args)
    }
}

fn prepend(mut inferred: Vec<String>, args: Vec<String>) -> Vec<String> {
    inferred.extend(args);
    inferred
}
