//! Configuration for the catalog API

use core_config::{
    AppInfo, FromEnv, app_info, env_optional, server::ServerConfig, uploads::UploadConfig,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub uploads: UploadConfig,
    /// `None` when `DATABASE_URL` is unset; products then live in memory.
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let uploads = UploadConfig::from_env()?;

        let database = match env_optional("DATABASE_URL") {
            Some(_) => Some(PostgresConfig::from_env()?),
            None => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            uploads,
            database,
        })
    }
}
