mod config;
mod dial;
mod error;
mod hijack;
mod stream;
mod transport;

pub use config::{ClientConfig, DEFAULT_API_VERSION, DaemonHost};
pub use dial::connect;
pub use error::ClientError;
pub use hijack::{CloseWriter, Connection, HijackedResponse};
pub use stream::pump;
pub use transport::{Transport, version_report};
