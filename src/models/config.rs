use serde::Deserialize;

/// Configuration options for the catalog server.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
}
