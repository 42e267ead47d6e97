#![recursion_limit = "128"]

use gpsdb_core::gateways::geocode::GeoCodingGateway;
use gpsdb_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    geo_gw: Box<dyn GeoCodingGateway + Send + Sync>,
) {
    web::run(connections, cfg, geo_gw).await;
}
