// ⚙️ Server Configuration - flags with environment fallbacks

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-server", version, about = "Receipt points HTTP service")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3000,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["receipt-server", "--port", "8080", "--host", "127.0.0.1"])
                .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_default_binds_all_interfaces_on_3000() {
        let expected: SocketAddr = "0.0.0.0:3000".parse().unwrap();
        assert_eq!(ServerConfig::default().socket_addr(), expected);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["receipt-server", "--port", "70000"]).is_err());
    }
}
