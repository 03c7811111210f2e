use std::time::Duration;

use dotenvy::dotenv;
use followup_service::{app_module::AppState, app_router::application, config::AppConfig};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env();

    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if config.is_dev() {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )?;
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )?;
    }

    // Must outlast the polish call so its fallback message reaches the client.
    let request_timeout = config.timeout + Duration::from_secs(5);
    let sweep_interval = config.session_sweep_interval();
    let bind_address = config.bind_address.clone();
    let state = AppState::new(config)?;

    state.sessions.spawn_idle_sweep(sweep_interval);
    let app = application(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    tracing::info!("Server started, listening on {}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
