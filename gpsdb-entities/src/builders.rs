pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_record_builder::*;

pub mod address_record_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = address.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.record.location = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.record.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> AddressRecordBuild {
            AddressRecordBuild {
                record: AddressRecord {
                    id: Id::new(),
                    address: "".into(),
                    location: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
