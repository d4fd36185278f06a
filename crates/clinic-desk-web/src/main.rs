//! Clinic front desk server binary.
//!
//! # Environment Variables
//! - `CLINIC_DESK_ADDR`: bind address (default "0.0.0.0:8000")
//! - `CLINIC_DESK_DB`: SQLite file, or `:memory:` (default "clinic_desk.db")
//! - `CLINIC_DESK_USERNAME` / `CLINIC_DESK_PASSWORD`: operator account (default admin/admin)
//! - `CLINIC_DESK_LOG` or `RUST_LOG`: tracing filter

use clinic_desk_core::{ClinicDesk, StaticCredentials};
use clinic_desk_web::{
    config::{DatabaseLocation, WebConfig},
    logging, router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = WebConfig::from_env()?;
    logging::init_tracing(&config)?;

    let desk = match &config.database {
        DatabaseLocation::File(path) => {
            tracing::info!(path = %path, "opening record store");
            ClinicDesk::open(path)?
        }
        DatabaseLocation::InMemory => {
            tracing::warn!("using in-memory record store; data is lost on exit");
            ClinicDesk::open_in_memory()?
        }
    };

    let state = AppState::new(
        desk,
        StaticCredentials::new(config.username.clone(), config.password.clone()),
    );
    let app = router(state);

    tracing::info!("-- Starting clinic desk on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
