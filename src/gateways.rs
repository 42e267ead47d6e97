use crate::config::GeocodingGateway;
use gpsdb_core::gateways::geocode::GeoCodingGateway;
use gpsdb_gateways::google::GoogleMaps;

pub fn geocoding_gateway(cfg: GeocodingGateway) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match cfg {
        GeocodingGateway::Google { api_key, base_url } => {
            let gw = match base_url {
                Some(url) => {
                    log::info!("Use Google geocoding gateway at {url}");
                    GoogleMaps::with_base_url(api_key, url)
                }
                None => {
                    log::info!("Use Google geocoding gateway");
                    GoogleMaps::new(api_key)
                }
            };
            Box::new(gw)
        }
    }
}
