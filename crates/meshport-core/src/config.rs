//! Configuration module
//!
//! This module provides the service configuration: listen port, CORS, the two storage
//! directories and conversion settings. Values come from the environment (a `.env` file is
//! honoured) and are passed explicitly into storage and handlers at startup.

use std::env;
use std::path::{Path, PathBuf};

// Common constants
const SERVER_PORT: u16 = 5000;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const UPLOAD_DIR: &str = "uploads";
const EXPORT_DIR: &str = "exports";

/// HTTP-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub http_concurrency_limit: usize,
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub upload_dir: PathBuf,
    pub export_dir: PathBuf,
    pub max_upload_size_bytes: usize,
    pub obj_include_normals: bool,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    pub fn new(config: ServiceConfig) -> Self {
        Config(Box::new(config))
    }

    fn as_service(&self) -> &ServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.as_service().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = ServiceConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config::new(config))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_service().base.http_concurrency_limit
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_service().upload_dir
    }

    pub fn export_dir(&self) -> &Path {
        &self.as_service().export_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_service().max_upload_size_bytes
    }

    pub fn obj_include_normals(&self) -> bool {
        self.as_service().obj_include_normals
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

impl ServiceConfig {
    /// Build the configuration from a key lookup.
    ///
    /// `Config::from_env` passes `std::env::var`; tests pass a map so they never touch
    /// process-wide state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let max_upload_size_mb = lookup("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let http_concurrency_limit = lookup("HTTP_CONCURRENCY_LIMIT")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(HTTP_CONCURRENCY_LIMIT);

        let obj_include_normals = lookup("OBJ_INCLUDE_NORMALS")
            .map(|s| s.trim().to_lowercase())
            .map(|s| s == "true" || s == "1")
            .unwrap_or(false);

        Ok(ServiceConfig {
            base: BaseConfig {
                server_port,
                cors_origins,
                environment,
                http_concurrency_limit,
            },
            upload_dir: lookup("UPLOAD_DIR")
                .unwrap_or_else(|| UPLOAD_DIR.to_string())
                .into(),
            export_dir: lookup("EXPORT_DIR")
                .unwrap_or_else(|| EXPORT_DIR.to_string())
                .into(),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            obj_include_normals,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload_dir == self.export_dir {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and EXPORT_DIR must point to different directories (both are {})",
                self.upload_dir.display()
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT cannot be 0"));
        }

        if is_production_env(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }
}
