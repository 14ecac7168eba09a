//! API utilities for frontend-backend communication.

/// Backend endpoint configuration.
///
/// Passed explicitly to every component that issues requests; there is no
/// ambient/context lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Config pointing at the backend on the current host.
    ///
    /// Derives the endpoint from the window location, using port 3000 for
    /// the backend server. Falls back to an empty endpoint (relative URLs)
    /// if no window is available.
    pub fn from_window() -> Self {
        Self {
            endpoint: api_base(),
        }
    }
}

/// Base URL like "http://localhost:3000", or an empty string if window is
/// not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_carries_endpoint() {
        let config = ApiConfig::new("http://localhost:3000");
        assert_eq!(config.endpoint, "http://localhost:3000");
    }
}
