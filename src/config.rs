use serde_derive::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_listener_address")]
    pub(crate) listener_address: SocketAddr,
    pub(crate) db: DbConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct DbConfig {
    #[serde(default = "default_db_host")]
    pub(crate) host: String,
    #[serde(default = "default_db_port")]
    pub(crate) port: u16,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) database: String,
}

fn default_listener_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000)
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

pub(crate) fn load() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("timetable").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
