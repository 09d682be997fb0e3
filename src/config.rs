use clap::Parser;
use serenity::all::{ChannelId, GuildId, RoleId};

use crate::error::config::ConfigError;
use crate::util::name::normalize;

const DEFAULT_CTFTIME_URL: &str = "https://ctftime.org/api/v1/events/";

/// Command-line arguments of the bot.
///
/// Every argument can also be supplied through the environment (or a `.env` file),
/// list arguments as comma-separated values.
#[derive(Parser, Debug)]
#[command(name = "noonbot")]
#[command(about = "Discord bot organizing CTF workspaces")]
#[command(version)]
pub struct Args {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Guild the bot serves
    #[arg(long, env = "NOONBOT_GUILD_ID")]
    pub guild_id: u64,

    /// Administrative channel for workspace-level commands
    #[arg(long, env = "NOONBOT_BOT_CHANNEL_ID")]
    pub bot_channel_id: u64,

    /// Roles of bots that must see every CTF
    #[arg(long, env = "NOONBOT_BOT_ROLE_IDS", num_args = 1.., value_delimiter = ',', required = true)]
    pub bot_role_ids: Vec<u64>,

    /// Roles granted access to a new CTF when none are given
    #[arg(long, env = "NOONBOT_MEMBER_ROLE_IDS", num_args = 1.., value_delimiter = ',', required = true)]
    pub member_role_ids: Vec<u64>,

    /// Categories that never count as CTF categories
    #[arg(long, env = "NOONBOT_SPECIAL_CATEGORY_IDS", num_args = 1.., value_delimiter = ',', required = true)]
    pub special_category_ids: Vec<u64>,

    /// Name of the channel created in every new CTF
    #[arg(long, env = "NOONBOT_MAIN_CHANNEL_NAME", default_value = "main")]
    pub main_channel_name: String,

    /// Command prefix
    #[arg(long, env = "NOONBOT_PREFIX", default_value = "!")]
    pub prefix: String,

    /// CTFtime events endpoint used by `upcoming`
    #[arg(long, env = "NOONBOT_CTFTIME_URL", default_value = DEFAULT_CTFTIME_URL)]
    pub ctftime_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Process-wide configuration, populated once at startup and read thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,

    pub guild_id: GuildId,
    pub bot_channel_id: ChannelId,

    pub bot_role_ids: Vec<RoleId>,
    pub member_role_ids: Vec<RoleId>,
    pub special_category_ids: Vec<ChannelId>,

    pub main_channel_name: String,
    pub prefix: String,
    pub ctftime_url: String,
}

impl Config {
    /// Builds the configuration from parsed command-line arguments.
    ///
    /// Converts raw IDs into typed Serenity IDs and normalizes the main channel name,
    /// since Discord normalizes text channel names on creation.
    ///
    /// # Arguments
    /// - `args` - Parsed command-line arguments
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration
    /// - `Err(ConfigError::ZeroId)` - An ID argument is zero
    /// - `Err(ConfigError::Empty)` - The main channel name or the prefix is empty
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let main_channel_name = normalize(args.main_channel_name.trim());
        if main_channel_name.is_empty() {
            return Err(ConfigError::Empty("main-channel-name"));
        }
        if args.prefix.trim().is_empty() {
            return Err(ConfigError::Empty("prefix"));
        }

        Ok(Self {
            discord_bot_token: args.token,
            guild_id: GuildId::new(non_zero(args.guild_id, "guild-id")?),
            bot_channel_id: ChannelId::new(non_zero(args.bot_channel_id, "bot-channel-id")?),
            bot_role_ids: to_ids(&args.bot_role_ids, "bot-role-ids", RoleId::new)?,
            member_role_ids: to_ids(&args.member_role_ids, "member-role-ids", RoleId::new)?,
            special_category_ids: to_ids(
                &args.special_category_ids,
                "special-category-ids",
                ChannelId::new,
            )?,
            main_channel_name,
            prefix: args.prefix.trim().to_string(),
            ctftime_url: args.ctftime_url,
        })
    }
}

fn non_zero(value: u64, field: &'static str) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroId(field));
    }
    Ok(value)
}

fn to_ids<T>(values: &[u64], field: &'static str, new: fn(u64) -> T) -> Result<Vec<T>, ConfigError> {
    values
        .iter()
        .map(|&value| non_zero(value, field).map(new))
        .collect()
}
