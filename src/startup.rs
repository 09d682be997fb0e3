use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `level` applies to every target,
/// with Serenity's gateway chatter capped at `warn`.
///
/// # Arguments
/// - `level` - Fallback log level (`trace`, `debug`, `info`, `warn`, `error`)
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},serenity=warn,tracing=warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Builds the HTTP client used for external API requests.
///
/// Redirects are not followed.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(reqwest::Error)` - The TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
