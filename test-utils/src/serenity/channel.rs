//! Test factories for creating Serenity GuildChannel objects.
//!
//! Categories and text channels are both `GuildChannel`s in Serenity, told apart
//! by their `kind`. Both factories deserialize the JSON shape Discord returns from
//! the channel endpoints.

use serenity::all::GuildChannel;

const CHANNEL_TYPE_TEXT: u8 = 0;
const CHANNEL_TYPE_CATEGORY: u8 = 4;
const CHANNEL_TYPE_PUBLIC_THREAD: u8 = 11;

/// Creates a test category channel without permission overwrites.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the category belongs to
/// - `channel_id` - Discord channel ID of the category
/// - `name` - Category name
///
/// # Returns
/// - `GuildChannel` - A channel of kind `ChannelType::Category`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_category(guild_id: u64, channel_id: u64, name: &str) -> GuildChannel {
    create_test_guild_channel(guild_id, channel_id, name, CHANNEL_TYPE_CATEGORY, None)
}

/// Creates a test text channel, optionally placed under a category.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `channel_id` - Discord channel ID
/// - `name` - Channel name
/// - `parent_id` - Category the channel resides in, if any
///
/// # Returns
/// - `GuildChannel` - A channel of kind `ChannelType::Text`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::channel::{create_test_category, create_test_text_channel};
///
/// let category = create_test_category(1, 100, "dummyctf");
/// let channel = create_test_text_channel(1, 101, "pwn-baby", Some(100));
/// assert_eq!(channel.parent_id.unwrap(), category.id);
/// ```
pub fn create_test_text_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    parent_id: Option<u64>,
) -> GuildChannel {
    create_test_guild_channel(guild_id, channel_id, name, CHANNEL_TYPE_TEXT, parent_id)
}

/// Creates a test public thread started in a text channel.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the thread belongs to
/// - `channel_id` - Discord channel ID of the thread
/// - `name` - Thread name
/// - `parent_id` - Text channel the thread was started in
///
/// # Returns
/// - `GuildChannel` - A channel of kind `ChannelType::PublicThread`
pub fn create_test_thread(guild_id: u64, channel_id: u64, name: &str, parent_id: u64) -> GuildChannel {
    create_test_guild_channel(
        guild_id,
        channel_id,
        name,
        CHANNEL_TYPE_PUBLIC_THREAD,
        Some(parent_id),
    )
}

fn create_test_guild_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "parent_id": parent_id.map(|id| id.to_string()),
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
