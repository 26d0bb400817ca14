//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing collection service URLs.

/// Build the base URL from explicit location parts.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_base_from;
/// assert_eq!(api_base_from("http:", "localhost", 5678), "http://localhost:5678");
/// ```
pub fn api_base_from(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// replacing the port with the collection service port.
///
/// # Returns
/// - API base URL like "http://localhost:5678"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    api_base_from(&protocol, &hostname, port)
}
