//! Student roster service library.
//!
//! A read-only HTTP service over a fixed, in-memory roster. The crate follows
//! a hexagonal layout: [`domain`] holds the roster and its port, [`inbound`]
//! adapts HTTP requests onto that port, and [`middleware`] carries
//! request-scoped tracing. [`settings`] loads the listener configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
