use anyhow::Result;
use clap::Parser;
use gpsdb_core::repositories::AddressRepo as _;
use std::path::PathBuf;

use crate::{
    config::{Config, Overrides},
    gateways,
};

#[derive(Debug, Parser)]
#[command(version, about = "Look up GPS coordinates and addresses and keep them in a database")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the SQLite database (overrides DATABASE_URL)
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Port of the web server (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

pub async fn run() -> Result<()> {
    let Args {
        config,
        db_url,
        port,
    } = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    cfg.apply_env_overrides()?;
    cfg.apply_cli_overrides(Overrides { db_url, port });

    let Config {
        db,
        webserver,
        geocoding,
    } = cfg;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections = gpsdb_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size)?;

    log::info!("Running embedded database migrations");
    gpsdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    log::info!(
        "The database contains {} address record(s)",
        connections.count_addresses()?
    );

    let geo_gw = gateways::geocoding_gateway(geocoding);

    let web_cfg = gpsdb_webserver::Cfg {
        address: webserver.address,
        port: webserver.port,
    };
    gpsdb_webserver::run(connections, web_cfg, geo_gw).await;
    Ok(())
}
