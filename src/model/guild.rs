//! Point-in-time view of the configured guild.
//!
//! Every command reads one `GuildSnapshot` and resolves CTFs, challenges and
//! permissions against it. Permissions are computed by Serenity from the
//! wrapped `PartialGuild`. Resolution works on normalized names only; callers
//! normalize user input with `util::name::normalize` first.

use serenity::all::{ChannelId, ChannelType, GuildChannel, GuildId, PartialGuild, RoleId};

use crate::util::name::SOLVED_SUFFIX;

/// Roles and channels of a guild as seen at the start of a command.
#[derive(Debug, Clone)]
pub struct GuildSnapshot {
    /// Guild with its owner and roles, @everyone included.
    pub guild: PartialGuild,
    /// All channels of the guild, categories included.
    pub channels: Vec<GuildChannel>,
    /// Active threads; each resides in one of `channels`.
    pub threads: Vec<GuildChannel>,
}

/// The two categories forming a CTF workspace.
#[derive(Debug, Clone, Copy)]
pub struct CtfCategories<'a> {
    /// Category holding the main channel and unsolved challenges.
    pub main: &'a GuildChannel,
    /// Category holding solved challenges.
    pub solved: &'a GuildChannel,
}

impl CtfCategories<'_> {
    /// Both category IDs, main first.
    pub fn ids(&self) -> [ChannelId; 2] {
        [self.main.id, self.solved.id]
    }

    /// Whether a channel resides in either category.
    pub fn contains(&self, channel: &GuildChannel) -> bool {
        channel
            .parent_id
            .is_some_and(|parent| parent == self.main.id || parent == self.solved.id)
    }
}

impl GuildSnapshot {
    pub fn guild_id(&self) -> GuildId {
        self.guild.id
    }

    /// The @everyone role ID of the guild.
    pub fn everyone_role_id(&self) -> RoleId {
        RoleId::new(self.guild.id.get())
    }

    /// Finds any channel by ID. Threads are not channels here.
    pub fn channel(&self, channel_id: ChannelId) -> Option<&GuildChannel> {
        self.channels.iter().find(|channel| channel.id == channel_id)
    }

    /// Finds the channel a message was sent in, threads resolved to their parent.
    ///
    /// # Returns
    /// - `Some(&GuildChannel)` - The channel itself, or the channel a thread was
    ///   started in
    /// - `None` - Neither a known channel nor a known thread
    pub fn message_channel(&self, channel_id: ChannelId) -> Option<&GuildChannel> {
        if let Some(channel) = self.channel(channel_id) {
            return Some(channel);
        }

        let thread = self.threads.iter().find(|thread| thread.id == channel_id)?;
        self.channel(thread.parent_id?)
    }

    /// Finds a category by exact name.
    fn category_named(&self, name: &str) -> Option<&GuildChannel> {
        self.channels
            .iter()
            .find(|channel| channel.kind == ChannelType::Category && channel.name == name)
    }

    /// Finds the main category of a CTF.
    ///
    /// # Arguments
    /// - `normalized_ctf_name` - Normalized CTF name
    ///
    /// # Returns
    /// - `Some(&GuildChannel)` - The category named exactly `normalized_ctf_name`
    /// - `None` - No such category
    pub fn ctf_category(&self, normalized_ctf_name: &str) -> Option<&GuildChannel> {
        self.category_named(normalized_ctf_name)
    }

    /// Finds the solved category of a CTF, named `{normalized_ctf_name}-solved`.
    pub fn ctf_solved_category(&self, normalized_ctf_name: &str) -> Option<&GuildChannel> {
        self.category_named(&format!("{}{}", normalized_ctf_name, SOLVED_SUFFIX))
    }

    /// Finds both categories of a CTF.
    ///
    /// # Returns
    /// - `Some(CtfCategories)` - Both the main and the solved category exist
    /// - `None` - Either category is missing
    pub fn ctf_categories(&self, normalized_ctf_name: &str) -> Option<CtfCategories<'_>> {
        Some(CtfCategories {
            main: self.ctf_category(normalized_ctf_name)?,
            solved: self.ctf_solved_category(normalized_ctf_name)?,
        })
    }

    /// Iterates over the text channels residing in either category of a CTF.
    pub fn ctf_text_channels<'a>(
        &'a self,
        categories: CtfCategories<'a>,
    ) -> impl Iterator<Item = &'a GuildChannel> + 'a {
        self.channels
            .iter()
            .filter(move |channel| channel.kind == ChannelType::Text && categories.contains(channel))
    }

    /// Iterates over every channel (of any kind) residing in either category of a CTF.
    pub fn ctf_channels<'a>(
        &'a self,
        categories: CtfCategories<'a>,
    ) -> impl Iterator<Item = &'a GuildChannel> + 'a {
        self.channels
            .iter()
            .filter(move |channel| categories.contains(channel))
    }

    /// Finds a text channel by name within a CTF, main channel included.
    ///
    /// Used for uniqueness checks: a challenge name must not collide with any text
    /// channel of the CTF.
    pub fn ctf_text_channel(
        &self,
        normalized_ctf_name: &str,
        normalized_name: &str,
    ) -> Option<&GuildChannel> {
        let categories = self.ctf_categories(normalized_ctf_name)?;
        self.ctf_text_channels(categories)
            .find(|channel| channel.name == normalized_name)
    }

    /// Finds a challenge channel within a CTF.
    ///
    /// The challenge may reside in either the main or the solved category. The main
    /// channel is not a challenge and is never returned.
    ///
    /// # Arguments
    /// - `normalized_ctf_name` - Normalized CTF name
    /// - `normalized_chall_name` - Normalized challenge name
    /// - `main_channel_name` - Configured main channel name
    ///
    /// # Returns
    /// - `Some(&GuildChannel)` - The challenge channel
    /// - `None` - The CTF or the challenge does not exist
    pub fn challenge_channel(
        &self,
        normalized_ctf_name: &str,
        normalized_chall_name: &str,
        main_channel_name: &str,
    ) -> Option<&GuildChannel> {
        if normalized_chall_name == main_channel_name {
            return None;
        }
        self.ctf_text_channel(normalized_ctf_name, normalized_chall_name)
    }

    /// Finds the main channel of a CTF inside its main category.
    pub fn main_channel(
        &self,
        normalized_ctf_name: &str,
        main_channel_name: &str,
    ) -> Option<&GuildChannel> {
        let main = self.ctf_category(normalized_ctf_name)?;
        self.channels.iter().find(|channel| {
            channel.kind == ChannelType::Text
                && channel.parent_id == Some(main.id)
                && channel.name == main_channel_name
        })
    }
}
