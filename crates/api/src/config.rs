use std::net::SocketAddr;

/// Port the service always listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
///
/// There is no env-var or CLI surface: the binary always uses `Default`.
/// Tests build their own config to listen on an ephemeral port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Loopback, OS-assigned port.
    pub fn ephemeral() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_all_interfaces_port_8080() {
        assert_eq!(ServerConfig::default().addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn ephemeral_uses_port_zero_on_loopback() {
        let cfg = ServerConfig::ephemeral();
        assert!(cfg.addr.ip().is_loopback());
        assert_eq!(cfg.addr.port(), 0);
    }
}
