use serde::{Deserialize, Serialize};

/// Health-check route path
pub const PING_PATH: &str = "/ping";

/// Body of the `GET /ping` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}
