//! Domain models shared by the guard, service and command layers.
//!
//! - `guild` - Snapshot of the guild and CTF/challenge resolution over it
//! - `invocation` - Who sent a command, and where
//! - `ctftime` - Events returned by the CTFtime calendar API

pub mod ctftime;
pub mod guild;
pub mod invocation;
