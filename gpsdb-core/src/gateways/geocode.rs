use gpsdb_entities::geo::MapPoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoCodingError {
    #[error("No matching results found")]
    NoResults,
    #[error("The geocoding service is not reachable: {0}")]
    Network(#[source] anyhow::Error),
    #[error("The geocoding service rejected the request ({status}): {message}")]
    Api { status: String, message: String },
    #[error("Unexpected response from the geocoding service: {0}")]
    InvalidResponse(String),
}

/// Translates between free-text addresses and geographical positions.
pub trait GeoCodingGateway {
    /// Resolve the position of the first match for an address query.
    fn forward(&self, address: &str) -> Result<MapPoint, GeoCodingError>;

    /// Resolve the formatted address of the first match for a position.
    fn reverse(&self, pos: MapPoint) -> Result<String, GeoCodingError>;
}
