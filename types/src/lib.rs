mod auth;
mod container;
mod error;
pub mod filters;
mod options;
mod summary;
mod ulimit;
mod version;

use std::pin::Pin;

pub use auth::AuthConfig;
pub use container::Config;
pub use error::TypesError;
pub use filters::Args;
pub use options::*;
pub use summary::*;
pub use ulimit::Ulimit;
pub use version::{Version, VersionResponse};

/// A single-pass byte stream handed to or returned from the transport.
pub type ByteStream = Pin<Box<dyn tokio::io::AsyncRead + Send>>;
