//! The seam to whatever executes requests against the daemon.
//!
//! Each option bundle is the single argument of one operation and is handed
//! over untouched. Every method defaults to [`ClientError::Unsupported`], so
//! an implementation only provides the operations it can carry.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::hijack::HijackedResponse;
use async_trait::async_trait;
use skiff_types::*;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn container_attach(
        &self,
        _options: ContainerAttachOptions,
    ) -> Result<HijackedResponse, ClientError> {
        Err(ClientError::Unsupported("container attach"))
    }

    async fn container_exec_attach(
        &self,
        _exec_id: &str,
    ) -> Result<HijackedResponse, ClientError> {
        Err(ClientError::Unsupported("exec attach"))
    }

    async fn container_commit(
        &self,
        _options: ContainerCommitOptions,
    ) -> Result<IdResponse, ClientError> {
        Err(ClientError::Unsupported("container commit"))
    }

    async fn container_exec_inspect(
        &self,
        _exec_id: &str,
    ) -> Result<ContainerExecInspect, ClientError> {
        Err(ClientError::Unsupported("exec inspect"))
    }

    async fn container_list(
        &self,
        _options: ContainerListOptions,
    ) -> Result<Vec<ContainerSummary>, ClientError> {
        Err(ClientError::Unsupported("container list"))
    }

    async fn container_logs(
        &self,
        _options: ContainerLogsOptions,
    ) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("container logs"))
    }

    async fn container_remove(&self, _options: ContainerRemoveOptions) -> Result<(), ClientError> {
        Err(ClientError::Unsupported("container remove"))
    }

    async fn copy_to_container(&self, _options: CopyToContainerOptions) -> Result<(), ClientError> {
        Err(ClientError::Unsupported("copy to container"))
    }

    async fn container_resize(&self, _options: ResizeOptions) -> Result<(), ClientError> {
        Err(ClientError::Unsupported("container resize"))
    }

    async fn container_exec_resize(&self, _options: ResizeOptions) -> Result<(), ClientError> {
        Err(ClientError::Unsupported("exec resize"))
    }

    async fn events(&self, _options: EventsOptions) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("events"))
    }

    async fn image_build(
        &self,
        _options: ImageBuildOptions,
    ) -> Result<ImageBuildResponse, ClientError> {
        Err(ClientError::Unsupported("image build"))
    }

    async fn image_create(&self, _options: ImageCreateOptions) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("image create"))
    }

    async fn image_import(&self, _options: ImageImportOptions) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("image import"))
    }

    async fn image_list(
        &self,
        _options: ImageListOptions,
    ) -> Result<Vec<ImageSummary>, ClientError> {
        Err(ClientError::Unsupported("image list"))
    }

    async fn image_pull(&self, _options: ImagePullOptions) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("image pull"))
    }

    async fn image_push(&self, _options: ImagePushOptions) -> Result<ByteStream, ClientError> {
        Err(ClientError::Unsupported("image push"))
    }

    async fn image_remove(
        &self,
        _options: ImageRemoveOptions,
    ) -> Result<Vec<ImageDeleteResponseItem>, ClientError> {
        Err(ClientError::Unsupported("image remove"))
    }

    async fn image_search(
        &self,
        _options: ImageSearchOptions,
    ) -> Result<Vec<SearchResult>, ClientError> {
        Err(ClientError::Unsupported("image search"))
    }

    async fn image_tag(&self, _options: ImageTagOptions) -> Result<(), ClientError> {
        Err(ClientError::Unsupported("image tag"))
    }

    async fn server_version(&self) -> Result<Version, ClientError> {
        Err(ClientError::Unsupported("server version"))
    }
}

/// Report the client version and, if the daemon answers, the server's.
pub async fn version_report<T>(transport: &T, config: &ClientConfig) -> VersionResponse
where
    T: Transport + ?Sized,
{
    let server = match transport.server_version().await {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!("Could not get server version from {}: {}", config.host, e);
            None
        }
    };

    VersionResponse {
        client: Some(config.client_version()),
        server,
    }
}
