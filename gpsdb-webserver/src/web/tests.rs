use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use gpsdb_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingError, GeoCodingGateway},
};

use gpsdb_db_sqlite::Connections;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, DummyGeoGW};

    pub use gpsdb_core::repositories::AddressRepo;
}

/// Answers every query with the same result or
/// with [`GeoCodingError::NoResults`] if none is configured.
#[derive(Debug, Clone, Default)]
pub struct DummyGeoGW {
    pub position: Option<(f64, f64)>,
    pub address: Option<String>,
}

impl GeoCodingGateway for DummyGeoGW {
    fn forward(&self, _: &str) -> Result<MapPoint, GeoCodingError> {
        self.position
            .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng))
            .ok_or(GeoCodingError::NoResults)
    }

    fn reverse(&self, _: MapPoint) -> Result<String, GeoCodingError> {
        self.address.clone().ok_or(GeoCodingError::NoResults)
    }
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
    geo_gw: DummyGeoGW,
) -> (rocket::Rocket<rocket::Build>, Connections) {
    let db = Connections::init(":memory:", 1).unwrap();
    gpsdb_db_sqlite::run_embedded_database_migrations(db.exclusive().unwrap()).unwrap();
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let gateways = super::Gateways {
        geocoding: Arc::new(geo_gw),
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    (rocket, db)
}

pub fn setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    geo_gw: DummyGeoGW,
) -> (Client, Connections) {
    let (rocket, db) = rocket_test_instance(mounts, geo_gw);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
