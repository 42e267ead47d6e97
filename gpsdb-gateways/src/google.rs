use gpsdb_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingError, GeoCodingGateway},
};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Geocoding gateway based on the Google Maps Geocoding API.
///
/// Every lookup is a single request without retries.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_key: String,
    api_base_url: String,
}

impl GoogleMaps {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, api_base_url: String) -> Self {
        if api_key.is_empty() {
            log::warn!(
                "No Google geocoding API key configured: requests will most likely be denied"
            );
        }
        let api_base_url = api_base_url.trim_end_matches('/').to_owned();
        Self {
            api_key,
            api_base_url,
        }
    }

    fn lookup(&self, param: (&str, &str)) -> Result<GeocodeResult, GeoCodingError> {
        let url = format!("{}/json", self.api_base_url);
        log::debug!("Requesting {url}?{}={}", param.0, param.1);
        let response = reqwest::blocking::Client::new()
            .get(&url)
            .query(&[param, ("key", self.api_key.as_str())])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| GeoCodingError::Network(anyhow::Error::from(err)))?;
        let response: GeocodeResponse = response
            .json()
            .map_err(|err| GeoCodingError::InvalidResponse(err.to_string()))?;
        response.into_first_result()
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn forward(&self, address: &str) -> Result<MapPoint, GeoCodingError> {
        self.lookup(("address", address))?.position()
    }

    fn reverse(&self, pos: MapPoint) -> Result<String, GeoCodingError> {
        let latlng = pos.to_string();
        Ok(self.lookup(("latlng", &latlng))?.formatted_address)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    fn into_first_result(self) -> Result<GeocodeResult, GeoCodingError> {
        let Self {
            status,
            results,
            error_message,
        } = self;
        match status.as_str() {
            STATUS_OK => results.into_iter().next().ok_or(GeoCodingError::NoResults),
            STATUS_ZERO_RESULTS => Err(GeoCodingError::NoResults),
            _ => Err(GeoCodingError::Api {
                message: error_message.unwrap_or_else(|| "no details available".to_owned()),
                status,
            }),
        }
    }
}

impl GeocodeResult {
    fn position(&self) -> Result<MapPoint, GeoCodingError> {
        let LatLng { lat, lng } = &self.geometry.location;
        let (lat, lng) = (*lat, *lng);
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| {
            GeoCodingError::InvalidResponse(format!("Invalid position {lat},{lng}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<GeocodeResult, GeoCodingError> {
        serde_json::from_str::<GeocodeResponse>(json)
            .unwrap()
            .into_first_result()
    }

    #[test]
    fn take_the_first_result() {
        let res = parse(
            r#"{
              "results": [
                {
                  "formatted_address": "277 Bedford Ave, Brooklyn, NY 11211, USA",
                  "geometry": { "location": { "lat": 40.714232, "lng": -73.9612889 }, "location_type": "ROOFTOP" },
                  "place_id": "ChIJd8BlQ2BZwokRAFUEcm_qrcA"
                },
                {
                  "formatted_address": "Williamsburg, Brooklyn, NY, USA",
                  "geometry": { "location": { "lat": 40.7081156, "lng": -73.9570696 } }
                }
              ],
              "status": "OK"
            }"#,
        )
        .unwrap();
        assert_eq!("277 Bedford Ave, Brooklyn, NY 11211, USA", res.formatted_address);
        assert_eq!(
            (40.714232, -73.9612889),
            res.position().unwrap().to_lat_lng_deg()
        );
    }

    #[test]
    fn zero_results() {
        assert!(matches!(
            parse(r#"{ "results": [], "status": "ZERO_RESULTS" }"#),
            Err(GeoCodingError::NoResults)
        ));
        assert!(matches!(
            parse(r#"{ "results": [], "status": "OK" }"#),
            Err(GeoCodingError::NoResults)
        ));
    }

    #[test]
    fn rejected_request() {
        let err = parse(
            r#"{
              "error_message": "The provided API key is invalid.",
              "results": [],
              "status": "REQUEST_DENIED"
            }"#,
        )
        .err()
        .unwrap();
        match err {
            GeoCodingError::Api { status, message } => {
                assert_eq!("REQUEST_DENIED", status);
                assert_eq!("The provided API key is invalid.", message);
            }
            other => panic!("Unexpected error: {other}"),
        }
        assert!(matches!(
            parse(r#"{ "status": "OVER_QUERY_LIMIT" }"#),
            Err(GeoCodingError::Api { .. })
        ));
    }

    #[test]
    fn invalid_position() {
        let res = parse(
            r#"{
              "results": [ { "formatted_address": "Nowhere", "geometry": { "location": { "lat": 123.0, "lng": 0.0 } } } ],
              "status": "OK"
            }"#,
        )
        .unwrap();
        assert!(matches!(
            res.position(),
            Err(GeoCodingError::InvalidResponse(_))
        ));
    }

    mod http {
        use super::*;
        use httpmock::prelude::*;

        const FORWARD_RESPONSE: &str = r#"{
          "results": [
            {
              "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
              "geometry": { "location": { "lat": 1.5, "lng": 2.5 } }
            }
          ],
          "status": "OK"
        }"#;

        fn gateway(server: &MockServer, api_key: &str) -> GoogleMaps {
            GoogleMaps::with_base_url(api_key.into(), server.url("/geocode"))
        }

        #[test]
        fn forward_sends_encoded_address_and_key() {
            let server = MockServer::start();
            let m = server.mock(|when, then| {
                when.method(GET)
                    .path("/geocode/json")
                    .query_param("address", "1600 Amph & Co #5")
                    .query_param("key", "k&y");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(FORWARD_RESPONSE);
            });
            let pos = gateway(&server, "k&y").forward("1600 Amph & Co #5").unwrap();
            m.assert();
            assert_eq!((1.5, 2.5), pos.to_lat_lng_deg());
        }

        #[test]
        fn reverse_sends_latlng_and_key() {
            let server = MockServer::start();
            let m = server.mock(|when, then| {
                when.method(GET)
                    .path("/geocode/json")
                    .query_param("latlng", "1.5,2.5")
                    .query_param("key", "k");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(FORWARD_RESPONSE);
            });
            let pos = MapPoint::try_from_lat_lng_deg(1.5, 2.5).unwrap();
            let address = gateway(&server, "k").reverse(pos).unwrap();
            m.assert();
            assert_eq!(
                "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                address
            );
        }

        #[test]
        fn http_error_status_is_a_network_error() {
            let server = MockServer::start();
            let m = server.mock(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(500).body("internal error");
            });
            let err = gateway(&server, "k").forward("somewhere").unwrap_err();
            m.assert();
            assert!(matches!(err, GeoCodingError::Network(_)));
        }

        #[test]
        fn non_json_body_is_an_invalid_response() {
            let server = MockServer::start();
            let m = server.mock(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(200).body("<html>maintenance</html>");
            });
            let err = gateway(&server, "k").forward("somewhere").unwrap_err();
            m.assert();
            assert!(matches!(err, GeoCodingError::InvalidResponse(_)));
        }

        #[test]
        fn api_status_is_reported() {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{ "results": [], "status": "REQUEST_DENIED" }"#);
            });
            let err = gateway(&server, "").forward("somewhere").unwrap_err();
            assert!(matches!(
                err,
                GeoCodingError::Api { ref status, .. } if status == "REQUEST_DENIED"
            ));
        }

        #[test]
        fn unreachable_service_is_a_network_error() {
            let gw = GoogleMaps::with_base_url("k".into(), "http://127.0.0.1:1".into());
            let pos = MapPoint::try_from_lat_lng_deg(1.5, 2.5).unwrap();
            assert!(matches!(gw.reverse(pos), Err(GeoCodingError::Network(_))));
        }
    }

    #[test]
    fn strip_trailing_slash_from_base_url() {
        let gw = GoogleMaps::with_base_url("key".into(), "http://localhost:1234/geocode/".into());
        assert_eq!("http://localhost:1234/geocode", gw.api_base_url);
    }
}
