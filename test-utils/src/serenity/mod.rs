//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (PartialGuild, PartialMember, Role, GuildChannel) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_category, create_test_role};
//!
//! #[tokio::test]
//! async fn test_resolution() {
//!     let member = create_test_role(1, 222222222, "member", 0);
//!     let category = create_test_category(1, 100, "dummyctf");
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_partial_guild` - Create Serenity PartialGuild objects
//! - `member::create_test_partial_member` - Create message authors
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_category` - Create category channels
//! - `channel::create_test_text_channel` - Create text channels
//! - `channel::create_test_thread` - Create threads inside text channels

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{create_test_category, create_test_text_channel, create_test_thread};
pub use guild::create_test_partial_guild;
pub use member::create_test_partial_member;
pub use role::create_test_role;
