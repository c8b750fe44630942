use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliocatalog::api::menu::Menu;
use bibliocatalog::infrastructure::AppState;
use bibliocatalog::{config, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing. Logs go to stderr so the menu owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibliocatalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env().with_args(std::env::args().skip(1));

    tracing::info!("Catalog capacity: {}", config.capacity);
    let state = AppState::new(config.capacity);

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        let added = seed::seed_demo_data(state.catalog()).await;
        tracing::info!("Demo data seeded ({} books).", added);
    }

    if config.serve {
        if let Err(e) =
            server::run_server(state, config.port, &config.cors_allowed_origins).await
        {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    if let Err(e) = Menu::new(state.catalog(), stdin, stdout).run().await {
        tracing::error!("Menu stopped: {}", e);
        std::process::exit(1);
    }
}
