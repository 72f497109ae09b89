use crate::ByteStream;
use crate::container::Config;
use crate::filters::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerAttachOptions {
    pub container_id: String,
    pub stream: bool,
    pub stdin: bool,
    pub stdout: bool,
    pub stderr: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerCommitOptions {
    pub container_id: String,
    pub repository_name: String,
    pub tag: String,
    pub comment: String,
    pub author: String,
    pub changes: Vec<String>,
    pub pause: bool,
    pub config: Option<Config>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerExecInspect {
    pub exec_id: String,
    pub container_id: String,
    pub running: bool,
    pub exit_code: i32,
}

impl ContainerExecInspect {
    /// The exit code, once the exec session has stopped running.
    pub fn exit_status(&self) -> Option<i32> {
        if self.running {
            None
        } else {
            Some(self.exit_code)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerListOptions {
    pub quiet: bool,
    pub size: bool,
    pub all: bool,
    pub latest: bool,
    pub since: String,
    pub before: String,
    /// Zero or negative means no limit.
    pub limit: i32,
    pub filter: Args,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerLogsOptions {
    pub container_id: String,
    pub show_stdout: bool,
    pub show_stderr: bool,
    pub since: String,
    pub timestamps: bool,
    pub follow: bool,
    /// A line count, or "all".
    pub tail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRemoveOptions {
    pub container_id: String,
    pub remove_volumes: bool,
    pub remove_links: bool,
    pub force: bool,
}

/// A file or archive to write into a container. `content` is read once by
/// the transport.
#[derive(Default)]
pub struct CopyToContainerOptions {
    pub container_id: String,
    pub path: String,
    pub content: Option<ByteStream>,
    pub allow_overwrite_dir_with_file: bool,
}

impl std::fmt::Debug for CopyToContainerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyToContainerOptions")
            .field("container_id", &self.container_id)
            .field("path", &self.path)
            .field("content", &self.content.as_ref().map(|_| ".."))
            .field(
                "allow_overwrite_dir_with_file",
                &self.allow_overwrite_dir_with_file,
            )
            .finish()
    }
}
