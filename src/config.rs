//! Host configuration parsed from environment variables.
//!
//! | Var        | Default              |
//! |------------|----------------------|
//! | `HOST`     | `0.0.0.0`            |
//! | `PORT`     | `3000`               |
//! | `SITE_DIR` | `<crate>/client/dist` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: AddrParseError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built client (`index.html`, wasm, assets).
    pub site_dir: PathBuf,
}

impl HostConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match get("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => DEFAULT_HOST,
        };
        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_dir = get("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);

        Ok(Self { host, port, site_dir })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// SPA entry document served for every client-side route.
    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client").join("dist")
}
