//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside the handlers, such as
//! correlating log lines with a per-request identifier.

pub mod trace;

pub use trace::Trace;
