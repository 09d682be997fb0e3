//! Test factory for creating Serenity PartialMember objects.
//!
//! Guild messages carry the author as a `PartialMember` without the nested
//! user object. The factory produces the same shape.

use serenity::all::PartialMember;

/// Creates a test Serenity PartialMember holding the given roles.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `role_ids` - Roles of the member, @everyone excluded
///
/// # Returns
/// - `PartialMember` - A member without nickname and without nested user
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialMember (indicates invalid test data)
pub fn create_test_partial_member(guild_id: u64, role_ids: &[u64]) -> PartialMember {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "roles": roles,
        "nick": null,
        "user": null,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "pending": false,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
