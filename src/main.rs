use dioxus_logger::tracing::{self, Level};

use funews::server::{
    config::{AdminAccountConfig, Config},
    startup::{self, BootstrapStatus},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match startup::bootstrap(&db, AdminAccountConfig::from_env()).await {
        BootstrapStatus::Created(account) => {
            tracing::info!(account_id = account.account_id, "Bootstrap complete")
        }
        BootstrapStatus::AlreadyProvisioned => tracing::info!("Bootstrap complete"),
        // Already logged; administrative features stay unavailable until the next start
        BootstrapStatus::Failed(_) => {
            tracing::warn!("Continuing without a guaranteed administrator account")
        }
    }
}
