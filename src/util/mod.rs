//! Small pure helpers shared by the command and service layers.

pub mod name;
pub mod parse;
