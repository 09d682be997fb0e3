//! Guards run before every command.
//!
//! - `guard` - Guild check, command-context resolution and the participant check
//! - `permission` - Channel permission resolution used by the participant check

pub mod guard;
pub mod permission;

#[cfg(test)]
mod test;
