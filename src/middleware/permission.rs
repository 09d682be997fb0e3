use serenity::all::{GuildChannel, Permissions};

use crate::model::{guild::GuildSnapshot, invocation::Invoker};

/// Permissions granted to each CTF participant on both categories.
pub const PARTICIPANT_PERMISSIONS: Permissions =
    Permissions::VIEW_CHANNEL.union(Permissions::MANAGE_CHANNELS);

/// Computes the permissions an invoker holds in a channel.
///
/// Resolution of roles and overwrites is left to Serenity. An invoker without
/// guild membership holds nothing.
///
/// # Arguments
/// - `guild` - Snapshot providing roles and the owner
/// - `channel` - Channel (or category) whose overwrites apply
/// - `invoker` - User whose permissions are computed
///
/// # Returns
/// - `Permissions` - The effective permissions in `channel`
pub fn effective_permissions(
    guild: &GuildSnapshot,
    channel: &GuildChannel,
    invoker: &Invoker,
) -> Permissions {
    match &invoker.member {
        Some(member) => guild
            .guild
            .partial_member_permissions_in(channel, invoker.user_id, member),
        None => Permissions::empty(),
    }
}

/// Whether the invoker can see a channel (or category).
pub fn can_view(guild: &GuildSnapshot, channel: &GuildChannel, invoker: &Invoker) -> bool {
    effective_permissions(guild, channel, invoker).contains(Permissions::VIEW_CHANNEL)
}
