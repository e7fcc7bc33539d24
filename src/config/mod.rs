//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RECOMMENDER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::constants::DEFAULT_TOP_N;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RECOMMENDER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// `top_n` used when a request omits it. Default: `10`.
    pub default_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "RECOMMENDER_PORT";
    pub const ENV_BIND_ADDR: &'static str = "RECOMMENDER_BIND_ADDR";
    pub const ENV_DEFAULT_TOP_N: &'static str = "RECOMMENDER_DEFAULT_TOP_N";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let default_top_n = Self::parse_top_n_from_env(defaults.default_top_n)?;

        Ok(Self {
            port,
            bind_addr,
            default_top_n,
        })
    }

    /// Checks invariants that hold regardless of where the values came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort {
                value: self.port.to_string(),
            });
        }

        if self.default_top_n == 0 {
            return Err(ConfigError::InvalidTopN {
                value: self.default_top_n.to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"`, bracketing IPv6 addresses.
    pub fn socket_addr(&self) -> String {
        std::net::SocketAddr::new(self.bind_addr, self.port).to_string()
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.trim().parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_top_n_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_DEFAULT_TOP_N) {
            Ok(value) => {
                let top_n: usize = value.trim().parse().map_err(|e| ConfigError::TopNParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if top_n == 0 {
                    return Err(ConfigError::InvalidTopN { value });
                }

                Ok(top_n)
            }
            Err(_) => Ok(default),
        }
    }
}
