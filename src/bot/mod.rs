//! Discord gateway integration.
//!
//! Connects to Discord, receives message and reaction events from the configured
//! guild and hands them to the command layer and the pin service.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Populates the cache with the guild's roles and channels
//! - `GUILD_MESSAGES` - Receives command messages
//! - `MESSAGE_CONTENT` - Reads the content of command messages (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Receives 📌 reactions
//!
//! `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod handler;
pub mod start;
