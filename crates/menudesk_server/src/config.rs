//! Server runtime configuration.

use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Resolved settings needed to serve requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

/// Host value that does not parse as an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHost(pub String);

impl Display for InvalidHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid listen host `{}`; expected an IP address", self.0)
    }
}

impl std::error::Error for InvalidHost {}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, db_path: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            port,
            db_path: db_path.into(),
        }
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHost> {
        let host = self.host.trim();
        let ip: IpAddr = host.parse().map_err(|_| InvalidHost(host.to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidHost, ServerConfig};

    #[test]
    fn bind_addr_accepts_ipv4_and_ipv6() {
        let v4 = ServerConfig::new("0.0.0.0", 8080, "menudesk.sqlite3");
        assert_eq!(v4.bind_addr().unwrap().to_string(), "0.0.0.0:8080");

        let v6 = ServerConfig::new(" ::1 ", 9000, "menudesk.sqlite3");
        assert_eq!(v6.bind_addr().unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let config = ServerConfig::new("localhost", 8080, "menudesk.sqlite3");
        assert_eq!(
            config.bind_addr().unwrap_err(),
            InvalidHost("localhost".to_string())
        );
    }
}
