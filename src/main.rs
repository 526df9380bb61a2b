mod web;

use std::io;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use internhub::config::Config;
use internhub::gateway::{Gateway, MemoryGateway, PgGateway};
use internhub::services::seed_database;

use crate::web::{AppState, Backend};

async fn seed<G: Gateway>(gateway: &G) {
    match seed_database(gateway, Utc::now()).await {
        Ok(report) => log::info!("Seeded {} demo records", report.total()),
        Err(e) => log::error!("Seeding failed: {e}"),
    }
}

async fn open_backend(config: &Config) -> io::Result<Backend> {
    let credentials = config.admin_email.as_deref().zip(config.admin_password.as_deref());

    let Some(url) = config.database_url.as_deref() else {
        let gateway = MemoryGateway::new();
        seed(&gateway).await;
        if let Some((email, password)) = credentials {
            gateway.add_account(email, password).map_err(io::Error::other)?;
        }
        return Ok(Backend::Memory(gateway));
    };

    let gateway = PgGateway::connect(url, config.max_connections)
        .await
        .map_err(io::Error::other)?;

    if let Some((email, password)) = credentials {
        gateway
            .upsert_admin(email, password)
            .await
            .map_err(io::Error::other)?;
        log::info!("Admin account {email} is ready");
    }

    if config.seed_database {
        seed(&gateway).await;
    }

    Ok(Backend::Postgres(gateway))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let gateway = open_backend(&config).await?;

    let state = AppState::new(gateway, config.timeout, config.cookie_secure);

    web::serve(state, &config.bind_addr).await
}
