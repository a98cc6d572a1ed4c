//! Server settings loaded via OrthoConfig.
//!
//! Values layer command-line flags over `ROSTER_*` environment variables over
//! the defaults below.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from("0.0.0.0"))]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}
