pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gpsdb_entities::{address::*, geo::*, id::*, time::*};
}
