//! HTTP listener construction.

mod config;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::info;

use roster::inbound::http::app::build_app;
use roster::inbound::http::health::HealthState;
use roster::inbound::http::state::HttpState;

/// Construct an Actix HTTP server serving the configured roster.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        host,
        port,
        students,
        clock,
    } = config;
    let http_state = web::Data::new(HttpState::new(students, clock));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind((host.as_str(), port))?
    .run();

    info!(%host, port, "listening");
    health_state.mark_ready();
    Ok(server)
}
