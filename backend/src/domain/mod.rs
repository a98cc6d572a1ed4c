//! Domain primitives and use-case ports.
//!
//! Purpose: define the student record, the read-only roster holding it, and
//! the transport-agnostic error type adapters translate into responses.
//!
//! Public surface:
//! - Error / ErrorCode — domain failure and its stable category.
//! - Student — first/last name pair.
//! - StudentRoster — fixed, ordered collection addressed by index.

pub mod error;
pub mod ports;
pub mod roster;
pub mod student;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::roster::{RosterLookupError, StudentRoster};
pub use self::student::Student;
