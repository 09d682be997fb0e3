//! Access to remote guild state.
//!
//! The `GuildApi` trait is the only way the bot reads or mutates categories,
//! channels, overwrites, messages and reactions. `DiscordGuildRepository`
//! implements it on top of Serenity; tests use the in-memory `FakeGuildApi`.

#[cfg(test)]
pub mod fake;
pub mod guild;
