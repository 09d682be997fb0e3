//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, no color).
///
/// # Arguments
/// - `guild_id` - Discord guild ID the role belongs to
/// - `role_id` - Discord role ID (snowflake); pass the guild ID for @everyone
/// - `name` - Role name
/// - `permissions` - Raw permission bits granted by the role
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// // @everyone with the usual defaults
/// let everyone = create_test_role(1, 1, "@everyone", Permissions::VIEW_CHANNEL.bits());
///
/// // Administrator role
/// let admin = create_test_role(1, 10, "Admin", Permissions::ADMINISTRATOR.bits());
/// ```
pub fn create_test_role(guild_id: u64, role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 0,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
