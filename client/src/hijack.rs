//! Raw connections taken over from an upgraded API request.
//!
//! Attach and exec sessions leave the request/response exchange behind and
//! talk over the bare socket. Whether that socket can be half-closed depends
//! on its concrete type, so the capability is queried at runtime through
//! [`Connection::close_writer`].

use async_trait::async_trait;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadBuf};
use tokio::net::TcpStream;

/// Connections that can stop sending while still receiving.
#[async_trait]
pub trait CloseWriter: Send {
    async fn close_write(&mut self) -> io::Result<()>;
}

pub trait Connection: AsyncRead + AsyncWrite + Send + Unpin {
    /// The half-close capability, if this connection has one.
    fn close_writer(&mut self) -> Option<&mut dyn CloseWriter> {
        None
    }

    /// Release the connection. Dropping it is enough for sockets.
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CloseWriter for TcpStream {
    async fn close_write(&mut self) -> io::Result<()> {
        AsyncWriteExt::shutdown(self).await
    }
}

impl Connection for TcpStream {
    fn close_writer(&mut self) -> Option<&mut dyn CloseWriter> {
        Some(self)
    }
}

#[cfg(unix)]
#[async_trait]
impl CloseWriter for tokio::net::UnixStream {
    async fn close_write(&mut self) -> io::Result<()> {
        AsyncWriteExt::shutdown(self).await
    }
}

#[cfg(unix)]
impl Connection for tokio::net::UnixStream {
    fn close_writer(&mut self) -> Option<&mut dyn CloseWriter> {
        Some(self)
    }
}

/// A hijacked connection plus the buffered reader over it.
///
/// The reader owns the connection, so buffered bytes and the socket can
/// never drift apart. Reads must go through the reader; writes go straight
/// to the connection. Call [`HijackedResponse::close`] once all reads and
/// writes are done.
pub struct HijackedResponse {
    reader: BufReader<Box<dyn Connection>>,
}

impl HijackedResponse {
    pub fn new(conn: Box<dyn Connection>) -> Self {
        Self {
            reader: BufReader::new(conn),
        }
    }

    pub fn reader(&mut self) -> &mut BufReader<Box<dyn Connection>> {
        &mut self.reader
    }

    pub fn conn(&mut self) -> &mut dyn Connection {
        self.reader.get_mut().as_mut()
    }

    /// Half-close the connection. Succeeds without doing anything when the
    /// connection cannot be half-closed; otherwise returns whatever the
    /// connection reports.
    pub async fn close_write(&mut self) -> io::Result<()> {
        match self.reader.get_mut().close_writer() {
            Some(writer) => {
                tracing::debug!("Half-closing hijacked connection");
                writer.close_write().await
            }
            None => Ok(()),
        }
    }

    /// Close the connection, discarding anything still buffered.
    pub fn close(self) {
        if let Err(e) = self.reader.into_inner().close() {
            tracing::debug!("Error closing hijacked connection: {}", e);
        }
    }
}

impl std::fmt::Debug for HijackedResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HijackedResponse")
            .field("buffered", &self.reader.buffer().len())
            .finish_non_exhaustive()
    }
}

impl AsyncRead for HijackedResponse {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().reader).poll_read(cx, buf)
    }
}

impl AsyncBufRead for HijackedResponse {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Pin::new(&mut self.get_mut().reader).poll_fill_buf(cx)
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        Pin::new(&mut self.get_mut().reader).consume(amt)
    }
}

impl AsyncWrite for HijackedResponse {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(self.get_mut().reader.get_mut()).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(self.get_mut().reader.get_mut()).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(self.get_mut().reader.get_mut()).poll_shutdown(cx)
    }
}
