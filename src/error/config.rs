use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A Discord ID argument is zero.
    ///
    /// Discord snowflakes are never zero; a zero usually means an unset
    /// environment variable was substituted. Check the `.env` file or the
    /// command-line arguments.
    #[error("Configuration value {0} must be a non-zero Discord ID")]
    ZeroId(&'static str),

    /// A text argument that must not be empty is empty.
    #[error("Configuration value {0} must not be empty")]
    Empty(&'static str),
}
