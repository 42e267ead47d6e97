use anyhow::{anyhow, Context as _, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "gpsdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_API_KEY: &str = "API_KEY";
const ENV_NAME_PORT: &str = "PORT";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: GeocodingGateway,
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Google {
        api_key: String,
        /// Defaults to the public Google Geocoding API.
        base_url: Option<String>,
    },
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub db_url: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: PathBuf = file_path
            .as_ref()
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(|| {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
            });

        let raw_config = match fs::read_to_string(&file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }

    /// Applies `DATABASE_URL`, `API_KEY` and `PORT`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| env::var(name).ok())
    }

    /// Empty values are treated as unset.
    fn apply_overrides_from<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| var(name).filter(|value| !value.trim().is_empty());
        if let Some(db_url) = var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(key) = var(ENV_NAME_API_KEY) {
            let GeocodingGateway::Google { api_key, .. } = &mut self.geocoding;
            *api_key = key;
        }
        if let Some(port) = var(ENV_NAME_PORT) {
            self.webserver.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, overrides: Overrides) {
        let Overrides { db_url, port } = overrides;
        if let Some(db_url) = db_url {
            self.db.conn_sqlite = db_url;
        }
        if let Some(port) = port {
            self.webserver.port = port;
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { address, port } = webserver.unwrap_or_default();
        let webserver = WebServer { address, port };

        let gw_name = geocoding
            .and_then(|g| g.gateway)
            .unwrap_or(raw::GeocodingGateway::Google);
        let geocoding = match gw_name {
            raw::GeocodingGateway::Google => {
                let raw::Google { api_key, base_url } = gateway
                    .and_then(|g| g.google)
                    .unwrap_or_default();
                GeocodingGateway::Google { api_key, base_url }
            }
        };

        Ok(Self {
            db,
            webserver,
            geocoding,
        })
    }
}
