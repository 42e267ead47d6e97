use itertools::Itertools;

use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// A resolved address together with its geographical position.
///
/// The `address` text is unique among all stored records.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: Id,
    pub address: String,
    pub location: MapPoint,
    pub created_at: Timestamp,
}

/// The components of a postal address as entered into the form.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreetAddress {
    pub street_number  : String,
    pub street_name    : String,
    pub city           : String,
    pub state_province : String,
    pub country        : String,
}

impl StreetAddress {
    /// Free-text query for forward geocoding.
    pub fn to_query_string(&self) -> String {
        [
            &self.street_number,
            &self.street_name,
            &self.city,
            &self.state_province,
            &self.country,
        ]
        .into_iter()
        .join(" ")
    }
}
