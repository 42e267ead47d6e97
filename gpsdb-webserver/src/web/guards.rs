use core::ops::Deref;
use std::sync::Arc;

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use gpsdb_core::gateways::geocode::GeoCodingGateway;
use gpsdb_db_sqlite::Connections;

/// Handle to the connection pool of the address store.
#[derive(Clone)]
pub struct Db(Connections);

impl Deref for Db {
    type Target = Connections;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Db {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(Self(connections.inner().clone()))
    }
}

#[derive(Clone)]
pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl Deref for GeoCoding {
    type Target = dyn GeoCodingGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GeoCoding {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let geo_gw = try_outcome!(request.guard::<&State<GeoCoding>>().await);
        Outcome::Success(geo_gw.inner().clone())
    }
}
