use thiserror::Error;

/// Rejections reported back to the invoking user.
///
/// Every variant stops the command before (or instead of) any mutation and is
/// answered with a reply to the invoking message. The `Display` form is meant for
/// logs; `reply_message` produces the chat-facing text.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command sent from a guild other than the configured one.
    #[error("Command invoked outside of the configured guild")]
    ForeignGuild,

    /// Command restricted to the bot channel was sent elsewhere.
    #[error("Command invoked outside of the bot channel")]
    NotBotChannel,

    /// Command needing a CTF was sent neither from the bot channel nor from a CTF category.
    #[error("Command invoked outside of the bot channel and any CTF category")]
    NotCtfContext,

    /// Command needing a challenge was sent neither from the bot channel nor from a CTF category.
    #[error("Command invoked outside of the bot channel and any challenge channel")]
    NotChallengeContext,

    /// Invoker cannot view the CTF the command targets.
    #[error("Invoker lacks access to the targeted CTF")]
    PermissionDenied,

    /// No category carries the given CTF name.
    ///
    /// # Fields
    /// - The CTF name as typed by the user
    #[error("Unknown CTF '{0}'")]
    UnknownCtf(String),

    /// No challenge channel carries the given name within the CTF.
    ///
    /// # Fields
    /// - The challenge name as typed by the user
    #[error("Unknown challenge '{0}'")]
    UnknownChallenge(String),

    /// A category for the CTF name already exists.
    #[error("CTF '{0}' already exists")]
    CtfExists(String),

    /// The CTF name ends with the suffix reserved for solved categories.
    #[error("CTF name '{0}' ends with the solved suffix")]
    ReservedCtfName(String),

    /// A channel with the challenge name already exists within the CTF.
    #[error("Challenge '{0}' already exists")]
    ChallengeExists(String),

    /// Required arguments are missing.
    ///
    /// # Fields
    /// - Usage text of the command
    #[error("Missing arguments")]
    Usage(&'static str),

    /// A role ID argument is not a valid snowflake.
    #[error("Invalid role ID '{0}'")]
    InvalidRoleId(String),

    /// The day count of `upcoming` is not a number between 1 and 365.
    #[error("Invalid day count '{0}'")]
    InvalidDays(String),

    /// The confirmation digest of `delete-ctf` does not match the CTF name.
    #[error("Deletion confirmation digest mismatch for '{0}'")]
    DigestMismatch(String),
}

impl CommandError {
    /// Renders the reply sent to the invoking user.
    ///
    /// # Returns
    /// - `String` - Chat message, prefixed with `:exclamation:` for all but the
    ///   foreign guild case
    pub fn reply_message(&self) -> String {
        match self {
            Self::ForeignGuild => "Nope".to_string(),
            Self::NotBotChannel => {
                ":exclamation: This command can only be executed in the bot channel.".to_string()
            }
            Self::NotCtfContext => ":exclamation: This command can only be executed in the bot channel or inside a CTF category.".to_string(),
            Self::NotChallengeContext => ":exclamation: This command can only be executed in the bot channel or inside a challenge channel.".to_string(),
            Self::PermissionDenied => ":exclamation: You haven't enough permissions!".to_string(),
            Self::UnknownCtf(name) => format!(":exclamation: Unknown ctf: {}", name),
            Self::UnknownChallenge(name) => format!(":exclamation: Unknown challenge: {}", name),
            Self::CtfExists(name) => format!(":exclamation: CTF already exists: {}", name),
            Self::ReservedCtfName(name) => format!(
                ":exclamation: CTF names cannot end with `-solved`: {}",
                name
            ),
            Self::ChallengeExists(name) => {
                format!(":exclamation: Challenge already exists: {}", name)
            }
            Self::Usage(usage) => format!(":exclamation: Usage:\n```\n{}\n```", usage),
            Self::InvalidRoleId(value) => format!(":exclamation: Invalid role id: {}", value),
            Self::InvalidDays(value) => format!(
                ":exclamation: Invalid number of days: {} (expected 1 to 365)",
                value
            ),
            Self::DigestMismatch(name) => format!(
                ":exclamation: Confirmation does not match. Use `printf {} | sha256sum`.",
                name
            ),
        }
    }
}
