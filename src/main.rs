use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblion::{config, db, server};

#[tokio::main]
async fn main() {
    // .env must be loaded before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biblion=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start_server(db, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
