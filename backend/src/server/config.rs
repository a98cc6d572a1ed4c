//! HTTP server configuration object.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use roster::domain::ports::StudentsQuery;
use roster::settings::ServerSettings;

/// Everything [`super::create_server`] needs to build the application.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) students: Arc<dyn StudentsQuery>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Bind according to `settings`, serving `students` and stamping errors
    /// with the system clock.
    #[must_use]
    pub fn new(settings: &ServerSettings, students: Arc<dyn StudentsQuery>) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
            students,
            clock: Arc::new(DefaultClock),
        }
    }
}
