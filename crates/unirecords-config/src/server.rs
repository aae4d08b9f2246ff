use crate::env_lookup;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub addr: String,
    /// Address the Prometheus exporter listens on.
    pub metrics_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            metrics_addr: lookup("METRICS_ADDR").unwrap_or_else(|| "0.0.0.0:9090".to_string()),
        }
    }
}
