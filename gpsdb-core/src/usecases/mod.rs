mod delete_address;
mod error;
mod geocode_address;
mod load_addresses;
mod reverse_geocode;


pub use self::{
    delete_address::*, error::Error, geocode_address::*, load_addresses::*, reverse_geocode::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::{self, AddressRepo},
    };
}

use self::prelude::*;

fn store_new_record<R: AddressRepo>(
    repo: &R,
    address: String,
    location: MapPoint,
) -> Result<AddressRecord> {
    let record = AddressRecord {
        id: Id::new(),
        address,
        location,
        created_at: Timestamp::now(),
    };
    repo.create_address(&record).map_err(|err| match err {
        repositories::Error::AlreadyExists => {
            log::warn!("Rejected duplicate address '{}'", record.address);
            Error::AddressExists(record.address.clone())
        }
        err => err.into(),
    })?;
    log::info!("Saved address '{}' at {}", record.address, record.location);
    Ok(record)
}
