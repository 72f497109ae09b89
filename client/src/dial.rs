use crate::config::DaemonHost;
use crate::error::ClientError;
use crate::hijack::Connection;
use tokio::net::TcpStream;

/// Open a raw connection to the daemon socket.
pub async fn connect(host: &DaemonHost) -> Result<Box<dyn Connection>, ClientError> {
    tracing::debug!("Connecting to {}", host);

    match host {
        DaemonHost::Tcp { host, port } => {
            let stream = TcpStream::connect((host.as_str(), *port)).await?;
            stream.set_nodelay(true)?;
            Ok(Box::new(stream))
        }
        #[cfg(unix)]
        DaemonHost::Unix(path) => {
            let stream = tokio::net::UnixStream::connect(path).await?;
            Ok(Box::new(stream))
        }
        #[cfg(not(unix))]
        DaemonHost::Unix(path) => Err(ClientError::InvalidHost(format!(
            "unix sockets are not supported on this platform: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hijack::HijackedResponse;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connect_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            sock.write_all(b"hello").await.unwrap();
        });

        let host = DaemonHost::Tcp {
            host: "127.0.0.1".to_string(),
            port,
        };
        let mut resp = HijackedResponse::new(connect(&host).await.unwrap());

        let mut greeting = String::new();
        resp.read_to_string(&mut greeting).await.unwrap();
        assert_eq!(greeting, "hello");

        resp.close();
        server.await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_connect_unix_supports_half_close() {
        use tokio::net::UnixListener;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daemon.sock");
        let listener = UnixListener::bind(&path).unwrap();

        let server = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            sock.read_to_end(&mut received).await.unwrap();
            sock.write_all(&received).await.unwrap();
        });

        let mut conn = connect(&DaemonHost::Unix(path)).await.unwrap();
        assert!(conn.close_writer().is_some());

        let mut resp = HijackedResponse::new(conn);
        resp.write_all(b"stdin").await.unwrap();
        resp.close_write().await.unwrap();

        let mut echoed = Vec::new();
        resp.read_to_end(&mut echoed).await.unwrap();
        assert_eq!(echoed, b"stdin");

        resp.close();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let host = DaemonHost::Tcp {
            host: "127.0.0.1".to_string(),
            port,
        };
        assert!(matches!(connect(&host).await, Err(ClientError::Io(_))));
    }
}
