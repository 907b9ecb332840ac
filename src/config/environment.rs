//! Configuración de variables de entorno
//!
//! Se lee una sola vez al arrancar el proceso.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Backend de almacenamiento de vehículos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(anyhow!("VEHICLE_STORE must be 'postgres' or 'memory', got '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub store: StoreKind,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            request_timeout_secs: 30,
            store: StoreKind::Postgres,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración con una función de lookup arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            None => defaults.port,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse().with_context(|| {
                format!("REQUEST_TIMEOUT_SECS must be a valid number, got '{}'", value)
            })?,
            None => defaults.request_timeout_secs,
        };

        let store = match lookup("VEHICLE_STORE") {
            Some(value) => value.parse()?,
            None => defaults.store,
        };

        Ok(Self {
            host: lookup("HOSTNAME").unwrap_or(defaults.host),
            port,
            request_timeout_secs,
            store,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
