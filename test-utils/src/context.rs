use serenity::all::{GuildChannel, PartialGuild};

/// Guild fixture produced by `GuildBuilder`.
///
/// Holds the raw Serenity objects a test guild consists of. Consumers convert it
/// into whatever guild representation the code under test reads.
#[derive(Debug, Clone)]
pub struct TestGuild {
    /// Guild with its owner and roles, @everyone included.
    pub guild: PartialGuild,

    /// All channels of the guild, categories included.
    pub channels: Vec<GuildChannel>,

    /// Active threads of the guild.
    pub threads: Vec<GuildChannel>,
}
