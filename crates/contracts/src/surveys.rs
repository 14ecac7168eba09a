//! Survey listing contract.
//!
//! `GET /surveys` returns a plain JSON array of survey names; the names are
//! opaque display strings with no identifiers attached.

/// Survey listing route path
pub const SURVEYS_PATH: &str = "/surveys";
