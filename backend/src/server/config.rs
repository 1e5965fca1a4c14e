//! HTTP server configuration object.

use std::net::{Ipv4Addr, SocketAddr};

/// Bind configuration for the HTTP server.
///
/// The service binds all interfaces on port 8000; no environment-variable
/// configuration surface exists. Embedders and tests can still pass an
/// explicit address.
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000)))
    }
}
