#![recursion_limit = "256"]

use game_day_notifications::config::Config;
use game_day_notifications::handler::handler;
use game_day_notifications::pipeline::Pipeline;
use game_day_notifications::sns::Sns;
use game_day_notifications::sportsdata::SportsData;
use lambda_runtime::{Error, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let config = Config::from_env()?;
    info!(config = ?config, "Loaded configuration");

    let source = SportsData::from_config(&config);
    let publisher = Sns::from_env(config.topic_arn.clone()).await;
    let pipeline = Pipeline::new(source, publisher, config.zone);

    let pipeline = &pipeline;
    lambda_runtime::run(service_fn(move |event| async move { handler(pipeline, event).await })).await
}
