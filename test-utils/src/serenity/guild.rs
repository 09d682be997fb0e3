//! Test factory for creating Serenity PartialGuild objects.
//!
//! `PartialGuild` is what Discord returns from the guild endpoint and what the
//! cached `Guild` converts into. The factory deserializes that JSON shape.

use serenity::all::PartialGuild;

/// Creates a test Serenity PartialGuild without roles.
///
/// Roles are added afterwards through the public `roles` map. All other fields
/// are set to the defaults of a fresh guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake), also the @everyone role ID
/// - `owner_id` - User ID of the guild owner
///
/// # Returns
/// - `PartialGuild` - A valid Serenity PartialGuild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_partial_guild, create_test_role};
///
/// let mut guild = create_test_partial_guild(1, 100);
/// let everyone = create_test_role(1, 1, "@everyone", 0);
/// guild.roles.insert(everyone.id, everyone);
/// ```
pub fn create_test_partial_guild(guild_id: u64, owner_id: u64) -> PartialGuild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": "Test Guild",
        "icon": null,
        "icon_hash": null,
        "splash": null,
        "discovery_splash": null,
        "owner_id": owner_id.to_string(),
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "application_id": null,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "rules_channel_id": null,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "public_updates_channel_id": null,
        "nsfw_level": 0,
        "max_presences": 25000,
        "max_members": 100000,
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
