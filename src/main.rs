use oil_interval::config::{self, Config};
use oil_interval::error::AppError;
use oil_interval::estimation::table::IntervalSource;
use oil_interval::estimation::{self, StandardIntervals};
use oil_interval::{api, state};
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(config.log_level())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = config::load_default()?;
    init_tracing(&config);
    tracing::info!(
        app = %config.app.name,
        config_path = config::DEFAULT_CONFIG_PATH,
        "oil-interval starting"
    );

    let intervals = select_intervals(&config);
    tracing::info!(source = intervals.name(), "Interval table selected");
    let state = Arc::new(state::AppState::new(intervals));

    let app = api::router(state);
    let port = config.server_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the configured interval file, falling back to the built-in table.
fn select_intervals(config: &Config) -> Arc<dyn IntervalSource> {
    match config.interval_table_path() {
        Some(path) => match estimation::load_intervals_from_path(path) {
            Ok(source) => {
                tracing::info!(path = %path.display(), "Interval table loaded");
                Arc::from(source)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load interval table, using default");
                Arc::new(StandardIntervals)
            }
        },
        None => {
            tracing::info!("No interval table configured, using default");
            Arc::new(StandardIntervals)
        }
    }
}
