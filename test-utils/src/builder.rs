use serenity::all::{GuildChannel, PartialGuild, PermissionOverwrite, Permissions, UserId};

use crate::{
    context::TestGuild,
    serenity::{
        create_test_category, create_test_partial_guild, create_test_role,
        create_test_text_channel, create_test_thread,
    },
};

/// Default permissions granted to @everyone by the builder.
///
/// Mirrors the permissions a freshly created Discord guild grants to every member
/// that matter to channel visibility.
pub const DEFAULT_EVERYONE_PERMISSIONS: Permissions = Permissions::VIEW_CHANNEL
    .union(Permissions::SEND_MESSAGES)
    .union(Permissions::READ_MESSAGE_HISTORY)
    .union(Permissions::ADD_REACTIONS);

/// Builder for creating guild fixtures with categories, channels and roles.
///
/// Provides a fluent interface for laying out the guild a test runs against. The
/// @everyone role (whose ID equals the guild ID) is always present. Call `build()`
/// to obtain the configured `TestGuild`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::GuildBuilder;
///
/// let guild = GuildBuilder::new(1)
///     .with_role(10, "member", 0)
///     .with_category(100, "dummyctf")
///     .with_category(101, "dummyctf-solved")
///     .with_text_channel(102, "main", Some(100))
///     .build();
/// ```
pub struct GuildBuilder {
    guild_id: u64,
    guild: PartialGuild,
    channels: Vec<GuildChannel>,
    threads: Vec<GuildChannel>,
}

impl GuildBuilder {
    /// Creates a builder for a guild with only the @everyone role.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID, also used as the @everyone role ID
    ///
    /// # Returns
    /// - New `GuildBuilder` instance owned by user `1`
    pub fn new(guild_id: u64) -> Self {
        let everyone = create_test_role(
            guild_id,
            guild_id,
            "@everyone",
            DEFAULT_EVERYONE_PERMISSIONS.bits(),
        );
        let mut guild = create_test_partial_guild(guild_id, 1);
        guild.roles.insert(everyone.id, everyone);

        Self {
            guild_id,
            guild,
            channels: Vec::new(),
            threads: Vec::new(),
        }
    }

    /// Sets the guild owner.
    pub fn owner(mut self, owner_id: u64) -> Self {
        self.guild.owner_id = UserId::new(owner_id);
        self
    }

    /// Adds a role with the given permission bits.
    pub fn with_role(mut self, role_id: u64, name: &str, permissions: u64) -> Self {
        let role = create_test_role(self.guild_id, role_id, name, permissions);
        self.guild.roles.insert(role.id, role);
        self
    }

    /// Adds a category channel.
    pub fn with_category(mut self, channel_id: u64, name: &str) -> Self {
        self.channels
            .push(create_test_category(self.guild_id, channel_id, name));
        self
    }

    /// Adds a text channel, optionally placed under a category.
    pub fn with_text_channel(mut self, channel_id: u64, name: &str, parent_id: Option<u64>) -> Self {
        self.channels.push(create_test_text_channel(
            self.guild_id,
            channel_id,
            name,
            parent_id,
        ));
        self
    }

    /// Adds an active thread started in a text channel.
    pub fn with_thread(mut self, channel_id: u64, name: &str, parent_id: u64) -> Self {
        self.threads.push(create_test_thread(
            self.guild_id,
            channel_id,
            name,
            parent_id,
        ));
        self
    }

    /// Adds a complete CTF workspace: main category, solved category and main channel.
    ///
    /// IDs are allocated consecutively starting at `first_id`:
    /// - `first_id` - main category named `name`
    /// - `first_id + 1` - solved category named `{name}-solved`
    /// - `first_id + 2` - main text channel named `main_channel_name`
    ///
    /// # Arguments
    /// - `first_id` - First channel ID to allocate
    /// - `name` - Normalized CTF name
    /// - `main_channel_name` - Name of the CTF's main channel
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_ctf(self, first_id: u64, name: &str, main_channel_name: &str) -> Self {
        self.with_category(first_id, name)
            .with_category(first_id + 1, &format!("{}-solved", name))
            .with_text_channel(first_id + 2, main_channel_name, Some(first_id))
    }

    /// Adds a permission overwrite to an already added channel.
    ///
    /// # Panics
    /// - If no channel with `channel_id` was added before
    pub fn with_overwrite(mut self, channel_id: u64, overwrite: PermissionOverwrite) -> Self {
        let channel = self
            .channels
            .iter_mut()
            .find(|channel| channel.id.get() == channel_id)
            .expect("Overwrite target channel must be added first");
        channel.permission_overwrites.push(overwrite);
        self
    }

    /// Builds the configured guild fixture.
    pub fn build(self) -> TestGuild {
        TestGuild {
            guild: self.guild,
            channels: self.channels,
            threads: self.threads,
        }
    }
}
