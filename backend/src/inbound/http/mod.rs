//! HTTP inbound adapter exposing REST endpoints.

pub mod app;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
