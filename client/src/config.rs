use crate::error::ClientError;
use skiff_types::Version;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_VERSION: &str = "1.24";
const DEFAULT_UNIX_SOCKET: &str = "/var/run/docker.sock";
const DEFAULT_TCP_PORT: u16 = 2375;

/// Address of the daemon's API socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonHost {
    Unix(PathBuf),
    Tcp { host: String, port: u16 },
}

impl Default for DaemonHost {
    fn default() -> Self {
        DaemonHost::Unix(PathBuf::from(DEFAULT_UNIX_SOCKET))
    }
}

impl FromStr for DaemonHost {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(path) = s.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(ClientError::InvalidHost(s.to_string()));
            }
            return Ok(DaemonHost::Unix(PathBuf::from(path)));
        }

        if s.starts_with('/') {
            return Ok(DaemonHost::Unix(PathBuf::from(s)));
        }

        if let Some(addr) = s.strip_prefix("tcp://") {
            let addr = addr.trim_end_matches('/');
            let invalid = || ClientError::InvalidHost(s.to_string());

            // IPv6 literals come bracketed: tcp://[::1]:2375
            let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
                let (host, rest) = rest.split_once(']').ok_or_else(invalid)?;
                match rest.strip_prefix(':') {
                    Some(port) => (host, port.parse().map_err(|_| invalid())?),
                    None if rest.is_empty() => (host, DEFAULT_TCP_PORT),
                    None => return Err(invalid()),
                }
            } else {
                match addr.rsplit_once(':') {
                    Some((host, port)) => (host, port.parse().map_err(|_| invalid())?),
                    None => (addr, DEFAULT_TCP_PORT),
                }
            };
            if host.is_empty() {
                return Err(invalid());
            }
            return Ok(DaemonHost::Tcp {
                host: host.to_string(),
                port,
            });
        }

        Err(ClientError::InvalidHost(s.to_string()))
    }
}

impl std::fmt::Display for DaemonHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaemonHost::Unix(path) => write!(f, "unix://{}", path.display()),
            DaemonHost::Tcp { host, port } if host.contains(':') => {
                write!(f, "tcp://[{}]:{}", host, port)
            }
            DaemonHost::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: DaemonHost,
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DaemonHost::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(host: DaemonHost) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// The version record this client reports for itself.
    pub fn client_version(&self) -> Version {
        Version {
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_version: self.api_version.clone(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            ..Default::default()
        }
    }
}
