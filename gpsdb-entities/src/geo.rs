use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical position in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}': {1}")]
    Latitude(String, ParseFloatError),
    #[error("Invalid longitude '{0}': {1}")]
    Longitude(String, ParseFloatError),
    #[error("Latitude degrees out of range: {0}")]
    LatitudeRange(f64),
    #[error("Longitude degrees out of range: {0}")]
    LongitudeRange(f64),
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
}

pub fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

pub fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

impl MapPoint {
    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        (is_valid_lat_deg(lat) && is_valid_lng_deg(lng)).then_some(Self { lat, lng })
    }

    pub fn parse_lat_lng_deg(
        lat_deg_str: &str,
        lng_deg_str: &str,
    ) -> Result<Self, MapPointParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| MapPointParseError::Latitude(lat_deg_str.to_owned(), err))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| MapPointParseError::Longitude(lng_deg_str.to_owned(), err))?;
        if !is_valid_lat_deg(lat) {
            return Err(MapPointParseError::LatitudeRange(lat));
        }
        if !is_valid_lng_deg(lng) {
            return Err(MapPointParseError::LongitudeRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((lat, lng)) => Self::parse_lat_lng_deg(lat, lng),
            None => Err(MapPointParseError::Format(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ranges() {
        assert!(MapPoint::try_from_lat_lng_deg(90, 180).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90, -180).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.000001, 0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0, -180.000001).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0, f64::INFINITY).is_none());
    }

    #[test]
    fn parse_from_str() {
        let p: MapPoint = "48.1371, 11.5754".parse().unwrap();
        assert_eq!((48.1371, 11.5754), p.to_lat_lng_deg());
        assert!(matches!(
            "48.1371".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
        assert!(matches!(
            "north,11.5".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(..))
        ));
        assert!(matches!(
            "1.0,east".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(..))
        ));
        assert_eq!(
            Err(MapPointParseError::LatitudeRange(91.0)),
            "91,0".parse::<MapPoint>()
        );
        assert_eq!(
            Err(MapPointParseError::LongitudeRange(-181.0)),
            "0,-181".parse::<MapPoint>()
        );
    }

    #[test]
    fn display_as_query_text() {
        let p = MapPoint::try_from_lat_lng_deg(40.714224, -73.961452).unwrap();
        assert_eq!("40.714224,-73.961452", p.to_string());
    }
}
