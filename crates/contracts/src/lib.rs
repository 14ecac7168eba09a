//! Wire contract shared between the frontend and the backend.
//!
//! Every type and route path that crosses the HTTP boundary lives here so
//! both sides agree on a single definition.

pub mod ping;
pub mod surveys;
