//! Operations behind the bot's commands.
//!
//! Each service borrows the `GuildApi` it mutates the guild through and works on
//! the `GuildSnapshot` read at the start of the command. Arguments arrive already
//! resolved by the guard (inferred names prepended), but not yet normalized.
//!
//! - `ctf` - Creating, renaming, publishing and deleting CTF workspaces
//! - `challenge` - Creating, renaming and moving challenge channels
//! - `membership` - Joining and leaving CTFs through member overwrites
//! - `pin` - Toggling the pinned state of messages through reactions
//! - `ctftime` - Listing upcoming CTFs from the CTFtime calendar

pub mod challenge;
pub mod ctf;
pub mod ctftime;
pub mod membership;
pub mod pin;

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId};

use crate::middleware::permission::PARTICIPANT_PERMISSIONS;

/// Overwrite granting participant permissions to a role.
pub(crate) fn allow_role(role_id: RoleId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: PARTICIPANT_PERMISSIONS,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Role(role_id),
    }
}

/// Overwrite denying participant permissions to a role.
pub(crate) fn deny_role(role_id: RoleId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::empty(),
        deny: PARTICIPANT_PERMISSIONS,
        kind: PermissionOverwriteType::Role(role_id),
    }
}

/// Overwrite granting participant permissions to a single user.
pub(crate) fn allow_member(user_id: UserId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: PARTICIPANT_PERMISSIONS,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Member(user_id),
    }
}

/// Overwrite denying participant permissions to a single user.
pub(crate) fn deny_member(user_id: UserId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::empty(),
        deny: PARTICIPANT_PERMISSIONS,
        kind: PermissionOverwriteType::Member(user_id),
    }
}
