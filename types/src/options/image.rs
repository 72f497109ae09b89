use crate::ByteStream;
use crate::auth::AuthConfig;
use crate::error::TypesError;
use crate::filters::Args;
use crate::ulimit::Ulimit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Isolation technology used for build containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Isolation {
    #[default]
    Default,
    Process,
    HyperV,
}

impl FromStr for Isolation {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "default" => Ok(Isolation::Default),
            "process" => Ok(Isolation::Process),
            "hyperv" => Ok(Isolation::HyperV),
            other => Err(TypesError::InvalidIsolation(other.to_string())),
        }
    }
}

impl TryFrom<String> for Isolation {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Isolation> for String {
    fn from(isolation: Isolation) -> Self {
        isolation.to_string()
    }
}

impl std::fmt::Display for Isolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Isolation::Default => write!(f, "default"),
            Isolation::Process => write!(f, "process"),
            Isolation::HyperV => write!(f, "hyperv"),
        }
    }
}

/// Everything needed to build an image. The build `context` is a tar
/// stream consumed once by the transport.
#[derive(Default)]
pub struct ImageBuildOptions {
    pub tags: Vec<String>,
    pub suppress_output: bool,
    pub remote_context: String,
    pub no_cache: bool,
    pub remove: bool,
    pub force_remove: bool,
    pub pull_parent: bool,
    pub isolation: Isolation,
    pub cpu_set_cpus: String,
    pub cpu_set_mems: String,
    pub cpu_shares: i64,
    pub cpu_quota: i64,
    pub cpu_period: i64,
    pub memory: i64,
    pub memory_swap: i64,
    pub cgroup_parent: String,
    pub shm_size: String,
    pub dockerfile: String,
    pub ulimits: Vec<Ulimit>,
    /// Raw `KEY=value` strings.
    pub build_args: Vec<String>,
    /// Credentials keyed by registry host.
    pub auth_configs: HashMap<String, AuthConfig>,
    pub context: Option<ByteStream>,
}

impl std::fmt::Debug for ImageBuildOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuildOptions")
            .field("tags", &self.tags)
            .field("suppress_output", &self.suppress_output)
            .field("remote_context", &self.remote_context)
            .field("no_cache", &self.no_cache)
            .field("remove", &self.remove)
            .field("force_remove", &self.force_remove)
            .field("pull_parent", &self.pull_parent)
            .field("isolation", &self.isolation)
            .field("cpu_set_cpus", &self.cpu_set_cpus)
            .field("cpu_set_mems", &self.cpu_set_mems)
            .field("cpu_shares", &self.cpu_shares)
            .field("cpu_quota", &self.cpu_quota)
            .field("cpu_period", &self.cpu_period)
            .field("memory", &self.memory)
            .field("memory_swap", &self.memory_swap)
            .field("cgroup_parent", &self.cgroup_parent)
            .field("shm_size", &self.shm_size)
            .field("dockerfile", &self.dockerfile)
            .field("ulimits", &self.ulimits)
            .field("build_args", &self.build_args)
            .field("auth_configs", &self.auth_configs.keys().collect::<Vec<_>>())
            .field("context", &self.context.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Streamed build output. The caller drains `body` to completion.
pub struct ImageBuildResponse {
    pub body: ByteStream,
    pub os_type: String,
}

impl std::fmt::Debug for ImageBuildResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuildResponse")
            .field("os_type", &self.os_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCreateOptions {
    /// Image to create this image from.
    pub parent: String,
    pub tag: String,
    /// Pre-encoded registry credentials.
    pub registry_auth: String,
}

#[derive(Default)]
pub struct ImageImportOptions {
    pub source: Option<ByteStream>,
    /// Where the daemon fetches the image from when `source` is absent,
    /// e.g. a URL, or "-" for the attached stream.
    pub source_name: String,
    pub repository_name: String,
    pub message: String,
    pub tag: String,
    pub changes: Vec<String>,
}

impl std::fmt::Debug for ImageImportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageImportOptions")
            .field("source", &self.source.as_ref().map(|_| ".."))
            .field("source_name", &self.source_name)
            .field("repository_name", &self.repository_name)
            .field("message", &self.message)
            .field("tag", &self.tag)
            .field("changes", &self.changes)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageListOptions {
    pub match_name: String,
    pub all: bool,
    pub filters: Args,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePullOptions {
    pub image_id: String,
    pub tag: String,
    /// Pre-encoded registry credentials.
    pub registry_auth: String,
}

// TODO: give push its own struct once it needs destination-specific fields.
pub type ImagePushOptions = ImagePullOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRemoveOptions {
    pub image_id: String,
    pub force: bool,
    pub prune_children: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSearchOptions {
    pub term: String,
    pub registry_auth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTagOptions {
    pub image_id: String,
    pub repository_name: String,
    pub tag: String,
    pub force: bool,
}
