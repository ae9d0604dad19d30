use anyhow::Context;

use wordstock::config::AppConfig;
use wordstock::database::{self, repository::WordRepository};
use wordstock::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!("Starting Wordstock with {:?} storage", config.database.backend);

    let pool = database::connect(&config.database)
        .await
        .context("failed to open database pool")?;
    database::migrate(&pool, config.database.backend)
        .await
        .context("schema auto-creation failed")?;

    let state = AppState {
        repo: WordRepository::new(pool),
        security: config.security.clone(),
    };
    let app = wordstock::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Wordstock listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
