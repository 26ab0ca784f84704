//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::AdminError;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> AdminError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => AdminError::config(format!(
                "Port {} is already in use. Stop the other process or start with --port {}",
                port,
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => AdminError::config(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. --port 8000",
                port
            )),
            _ => AdminError::config(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
