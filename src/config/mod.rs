use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "openeatdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub media: Media,
    pub translations: Translations,
    pub admin: Admin,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Media {
    pub dir: PathBuf,
    pub base_url: String,
    /// Minimum age before an unreferenced stored file may be reclaimed.
    pub sweep_min_age: Duration,
}

pub struct Translations {
    pub file: Option<PathBuf>,
}

pub struct Admin {
    pub name: Option<String>,
    pub api_token: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            media,
            translations,
            admin,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();

        let webserver = WebServer { enable_cors: cors };

        let raw::Media {
            dir,
            base_url,
            sweep_min_age,
        } = media.unwrap_or_default();

        if base_url.is_empty() {
            return Err(anyhow!("Empty media base URL"));
        }
        let media = Media {
            dir,
            base_url,
            sweep_min_age,
        };

        let raw::Translations { file } = translations.unwrap_or_default();
        let translations = Translations { file };

        let raw::Admin { name, api_token } = admin.unwrap_or_default();
        if name.is_some() != api_token.is_some() {
            return Err(anyhow!(
                "Bootstrap admin requires both a name and an api-token"
            ));
        }
        let admin = Admin { name, api_token };

        Ok(Self {
            db,
            webserver,
            media,
            translations,
            admin,
        })
    }
}
