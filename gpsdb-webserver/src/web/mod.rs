use std::{net::IpAddr, sync::Arc};

use gpsdb_core::gateways::geocode::GeoCodingGateway;
use gpsdb_db_sqlite::Connections;
use rocket::{config::Config as RocketCfg, Rocket, Route};

mod error;
mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

pub use error::Error;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;
    let Gateways { geocoding } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);

    let mut instance = r
        .manage(db)
        .manage(geo_gw)
        .register("/", frontend::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(
    db: Connections,
    cfg: Cfg,
    geocoding: Box<dyn GeoCodingGateway + Send + Sync>,
) {
    let Cfg { address, port } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
    };
    let gateways = Gateways {
        geocoding: Arc::from(geocoding),
    };
    log::info!("Starting web server on {address}:{port}");
    let instance = rocket_instance(options, db, gateways);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
