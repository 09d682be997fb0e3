//! Noonbot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the noonbot
//! application. This crate offers a builder pattern for laying out guild fixtures
//! (roles, categories, channels, permission overwrites) out of valid Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **GuildBuilder**: Fluent builder for configuring a guild fixture
//! - **TestGuild**: The fixture itself, holding Serenity roles and channels
//! - **serenity**: Factories deserializing Serenity objects from Discord-shaped JSON
//!
//! # Usage
//!
//! Use `GuildBuilder` to create the guild a test runs against:
//!
//! ```rust,ignore
//! use test_utils::builder::GuildBuilder;
//!
//! #[tokio::test]
//! async fn test_solved() {
//!     let guild = GuildBuilder::new(1)
//!         .with_ctf(100, "dummyctf", "main")
//!         .with_text_channel(110, "pwn-baby", Some(100))
//!         .build();
//!
//!     // Hand the fixture to the code under test...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod serenity;
