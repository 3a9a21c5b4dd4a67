//! HTTP server configuration object.

use std::net::SocketAddr;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
