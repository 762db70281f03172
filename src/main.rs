use std::process;

use anyhow::Result;
use clap::Parser;

use oedb_db_sqlite as sqlite;

mod cli;
mod config;
mod gateways;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = run().await {
        log::error!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = cli::Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let enable_cors = cfg.webserver.enable_cors || args.enable_cors;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?);

    if let (Some(name), Some(api_token)) = (&cfg.admin.name, &cfg.admin.api_token) {
        let admin = oedb_application::prelude::ensure_bootstrap_admin(&connections, name, api_token)?;
        log::info!("Bootstrap admin account '{}' is in place", admin.name);
    }

    let media_gw = gateways::media_gateway_from_config(&cfg.media)?;
    let translation_gw = gateways::translation_gateway_from_config(&cfg.translations)?;

    let web_cfg = oedb_webserver::Cfg {
        media_sweep_min_age: cfg.media.sweep_min_age,
    };
    oedb_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        media_gw,
        translation_gw,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
