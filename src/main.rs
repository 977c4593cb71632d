use anyhow::Context;
use dotenv::dotenv;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use saddlestats::{env_utils, get_main_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!("initializing app state ...");

    let session_secret = env_utils::get_session_secret()
        .context("SESSION_SECRET environment variable not found")?;
    let state = AppState::new(&session_secret);

    let port = env_utils::get_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let host_uri = env_utils::get_host_uri(Some(port));

    info!("Starting server at host: {}", host_uri);

    axum::Server::bind(&addr)
        .serve(get_main_router().with_state(state).into_make_service())
        .await
        .context("error while starting API server")?;

    anyhow::Ok(())
}
