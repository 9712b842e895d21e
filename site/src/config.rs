//! Site runtime configuration.
//!
//! Resolved once at process startup and passed into the router, so request
//! handling never reads process-wide environment variables.

use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_SERVICE_URL: &str = "http://127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    listen_addr: SocketAddr,
    data_service_url: String,
}

impl SiteConfig {
    pub fn new(listen_addr: SocketAddr, data_service_url: &str) -> anyhow::Result<Self> {
        let data_service_url = data_service_url.trim();
        if !(data_service_url.starts_with("http://") || data_service_url.starts_with("https://")) {
            anyhow::bail!("DATA_SERVICE_URL must be an http(s) URL, got `{data_service_url}`");
        }
        Ok(Self {
            listen_addr,
            data_service_url: data_service_url.to_string(),
        })
    }

    /// Build from `SITE_ADDR` and `DATA_SERVICE_URL`, falling back to the
    /// local defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.to_string());
        let listen_addr = addr
            .parse()
            .with_context(|| format!("SITE_ADDR is not a socket address: `{addr}`"))?;
        let url = lookup("DATA_SERVICE_URL").unwrap_or_else(|| DEFAULT_DATA_SERVICE_URL.to_string());
        Self::new(listen_addr, &url)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn data_service_url(&self) -> &str {
        &self.data_service_url
    }
}
