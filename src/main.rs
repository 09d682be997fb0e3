mod bot;
mod command;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod service;
mod startup;
mod state;
mod util;

#[cfg(test)]
mod fixture;

use clap::Parser;

use crate::{
    config::{Args, Config},
    error::AppError,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    startup::init_logging(&args.log_level);

    let config = Config::from_args(args)?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!(
        "Serving guild {} with prefix {}",
        config.guild_id,
        config.prefix
    );

    bot::start::start_bot(BotState::new(config, http_client)).await
}
