use serde::{Deserialize, Serialize};

/// Public recursive resolvers used when no server is named on the command line.
pub const DEFAULT_PUBLIC_SERVERS: [&str; 10] = [
    "1.0.0.1",        // Cloudflare
    "1.1.1.1",        // Cloudflare
    "8.8.4.4",        // Google
    "8.8.8.8",        // Google
    "8.26.56.26",     // Comodo
    "8.20.247.20",    // Comodo
    "9.9.9.9",        // Quad9
    "64.6.64.6",      // Verisign
    "208.67.222.222", // OpenDNS
    "208.67.220.220", // OpenDNS
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_public_servers")]
    pub public_servers: Vec<String>,

    /// When false every query carries the fixed id 0x4F42.
    #[serde(default = "default_true")]
    pub randomize_transaction_id: bool,

    /// Unset means wait for the reply indefinitely.
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            public_servers: default_public_servers(),
            randomize_transaction_id: default_true(),
            query_timeout_secs: None,
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_public_servers() -> Vec<String> {
    DEFAULT_PUBLIC_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}
