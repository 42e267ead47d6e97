use super::{prelude::*, store_new_record};
use crate::util::validate::required_field;

/// Raw form input, any field may be absent.
#[derive(Debug, Clone, Default)]
pub struct NewStreetAddress {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
}

impl NewStreetAddress {
    pub fn validate(&self) -> Result<StreetAddress> {
        Ok(StreetAddress {
            street_number: required_field("streetNumber", self.street_number.as_deref())?,
            street_name: required_field("streetName", self.street_name.as_deref())?,
            city: required_field("city", self.city.as_deref())?,
            state_province: required_field("stateProvince", self.state_province.as_deref())?,
            country: required_field("country", self.country.as_deref())?,
        })
    }
}

/// Resolve the position of a street address and store both.
pub fn geocode_address<R, G>(repo: &R, geo_gw: &G, new: &NewStreetAddress) -> Result<AddressRecord>
where
    R: AddressRepo,
    G: GeoCodingGateway + ?Sized,
{
    let address = new.validate()?.to_query_string();
    let location = geo_gw.forward(&address).inspect_err(|err| {
        log::error!("Failed to resolve the position of '{address}': {err}");
    })?;
    log::debug!("Resolved position of '{address}': {location}");
    store_new_record(repo, address, location)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyGeoGW, MockDb},
        *,
    };
    use crate::{gateways::geocode::GeoCodingError, util::validate::FieldInvalidation};

    fn new_street_address() -> NewStreetAddress {
        NewStreetAddress {
            street_number: Some(" 1600 ".into()),
            street_name: Some("Amphitheatre Parkway".into()),
            city: Some("Mountain View ".into()),
            state_province: Some("CA".into()),
            country: Some("USA".into()),
        }
    }

    #[test]
    fn store_resolved_position() {
        let db = MockDb::default();
        let gw = DummyGeoGW::default().with_position(37.4224764, -122.0842499);
        let record = geocode_address(&db, &gw, &new_street_address()).unwrap();
        assert_eq!(
            "1600 Amphitheatre Parkway Mountain View CA USA",
            record.address
        );
        assert_eq!((37.4224764, -122.0842499), record.location.to_lat_lng_deg());
        assert_eq!(
            vec!["1600 Amphitheatre Parkway Mountain View CA USA".to_string()],
            *gw.forward_queries.borrow()
        );
        let stored = db.all_addresses().unwrap();
        assert_eq!(vec![record], stored);
    }

    #[test]
    fn reject_duplicate_address() {
        let db = MockDb::default();
        let gw = DummyGeoGW::default().with_position(1.0, 2.0);
        assert!(geocode_address(&db, &gw, &new_street_address()).is_ok());
        let err = geocode_address(&db, &gw, &new_street_address()).unwrap_err();
        assert!(matches!(err, Error::AddressExists(_)));
        assert_eq!(1, db.count_addresses().unwrap());
    }

    #[test]
    fn missing_field_is_a_validation_error() {
        let db = MockDb::default();
        let gw = DummyGeoGW::default().with_position(1.0, 2.0);
        let new = NewStreetAddress {
            city: None,
            ..new_street_address()
        };
        let err = geocode_address(&db, &gw, &new).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(FieldInvalidation::Missing("city"))
        ));
        assert!(gw.forward_queries.borrow().is_empty());
        assert_eq!(0, db.count_addresses().unwrap());
    }

    #[test]
    fn blank_field_is_a_validation_error() {
        let db = MockDb::default();
        let gw = DummyGeoGW::default().with_position(1.0, 2.0);
        let new = NewStreetAddress {
            country: Some("  ".into()),
            ..new_street_address()
        };
        let err = geocode_address(&db, &gw, &new).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(FieldInvalidation::Blank("country"))
        ));
    }

    #[test]
    fn nothing_is_stored_without_results() {
        let db = MockDb::default();
        let gw = DummyGeoGW::default();
        let err = geocode_address(&db, &gw, &new_street_address()).unwrap_err();
        assert!(matches!(err, Error::GeoCoding(GeoCodingError::NoResults)));
        assert_eq!(0, db.count_addresses().unwrap());
    }
}
