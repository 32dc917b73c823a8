use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// UDP bind address for the DNS front-end.
    #[serde(default = "default_dns_bind")]
    pub dns_bind: String,

    /// Loopback bind address for the control-plane HTTP server.
    #[serde(default = "default_http_bind")]
    pub http_bind: String,
}

fn default_dns_bind() -> String {
    "0.0.0.0:53".to_string()
}

fn default_http_bind() -> String {
    "127.0.0.1:8081".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_bind: default_dns_bind(),
            http_bind: default_http_bind(),
        }
    }
}
