use super::{prelude::*, store_new_record};
use crate::util::validate::required_field;

/// Raw form input, any field may be absent.
#[derive(Debug, Clone, Default)]
pub struct NewCoordinates {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl NewCoordinates {
    pub fn validate(&self) -> Result<MapPoint> {
        let lat = required_field("latitude", self.latitude.as_deref())?;
        let lng = required_field("longitude", self.longitude.as_deref())?;
        Ok(MapPoint::parse_lat_lng_deg(&lat, &lng)?)
    }
}

/// Resolve the address at a position and store both.
pub fn reverse_geocode<R, G>(repo: &R, geo_gw: &G, new: &NewCoordinates) -> Result<AddressRecord>
where
    R: AddressRepo,
    G: GeoCodingGateway + ?Sized,
{
    let pos = new.validate()?;
    let address = geo_gw.reverse(pos).inspect_err(|err| {
        log::error!("Failed to resolve the address at {pos}: {err}");
    })?;
    log::debug!("Resolved address at {pos}: '{address}'");
    store_new_record(repo, address, pos)
}
