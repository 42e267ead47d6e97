use crate::{gateways::geocode::GeoCodingError, repositories, util::validate::FieldInvalidation};
use gpsdb_entities::geo::MapPointParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] FieldInvalidation),
    #[error("Invalid position: {0}")]
    InvalidPosition(#[from] MapPointParseError),
    #[error(transparent)]
    GeoCoding(#[from] GeoCodingError),
    #[error("The address '{0}' has already been stored")]
    AddressExists(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
