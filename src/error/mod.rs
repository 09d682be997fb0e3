//! Error types of the bot.
//!
//! `AppError` is the top-level error type returned by every operation. It wraps the
//! user-facing `CommandError` rejections, configuration errors raised at startup,
//! and failures of the remote services the bot talks to (Discord, CTFtime).

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. Command errors are
/// answered with a reply to the invoking message; every other variant is logged and
/// ends the handling of the current event.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command rejected for the invoking user.
    ///
    /// Reported back to the user through `CommandError::reply_message()`.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the CTFtime API cannot be reached or answers with garbage.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
