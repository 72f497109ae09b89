use crate::error::ClientError;
use crate::hijack::HijackedResponse;
use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};

const BUF_SIZE: usize = 32 * 1024;

enum Step {
    Received(usize),
    Sent(usize),
    InputRead(usize),
}

/// Drive an attach-style session over a hijacked connection.
///
/// Bytes from `input` are sent to the peer; when `input` ends the connection
/// is half-closed so the remote process sees end of input. Everything the
/// peer sends is copied to `output` until the peer closes. Returns the number
/// of bytes received.
///
/// The peer is read while a send is still pending, so a peer that echoes
/// its input back cannot stall the session.
pub async fn pump<I, O>(
    response: &mut HijackedResponse,
    mut input: I,
    mut output: O,
) -> Result<u64, ClientError>
where
    I: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut in_buf = vec![0u8; BUF_SIZE];
    let mut out_buf = vec![0u8; BUF_SIZE];
    // Range of `in_buf` read from input but not yet written to the peer.
    let mut pending: Option<(usize, usize)> = None;
    let mut input_open = true;
    let mut peer_first = true;
    let mut sent: u64 = 0;
    let mut received: u64 = 0;

    loop {
        let step = poll_fn(|cx| {
            if peer_first {
                if let Poll::Ready(step) = poll_peer(response, &mut out_buf, cx) {
                    return Poll::Ready(step);
                }
                poll_local(response, &mut input, &mut in_buf, pending, input_open, cx)
            } else {
                if let Poll::Ready(step) =
                    poll_local(response, &mut input, &mut in_buf, pending, input_open, cx)
                {
                    return Poll::Ready(step);
                }
                poll_peer(response, &mut out_buf, cx)
            }
        })
        .await?;
        peer_first = !peer_first;

        match step {
            Step::Received(0) => break,
            Step::Received(n) => {
                output.write_all(&out_buf[..n]).await?;
                output.flush().await?;
                received += n as u64;
            }
            Step::Sent(0) => {
                return Err(io::Error::from(io::ErrorKind::WriteZero).into());
            }
            Step::Sent(n) => {
                sent += n as u64;
                pending = match pending {
                    Some((start, end)) if start + n < end => Some((start + n, end)),
                    _ => None,
                };
                if pending.is_none() {
                    response.flush().await?;
                }
            }
            Step::InputRead(0) => {
                input_open = false;
                tracing::debug!("Input closed after {} bytes, half-closing", sent);
                response.close_write().await?;
            }
            Step::InputRead(n) => pending = Some((0, n)),
        }
    }

    tracing::debug!("Peer closed stream (sent: {}, received: {})", sent, received);
    Ok(received)
}

fn poll_peer(
    response: &mut HijackedResponse,
    out_buf: &mut [u8],
    cx: &mut Context<'_>,
) -> Poll<io::Result<Step>> {
    let mut buf = ReadBuf::new(out_buf);
    match Pin::new(response).poll_read(cx, &mut buf) {
        Poll::Ready(Ok(())) => Poll::Ready(Ok(Step::Received(buf.filled().len()))),
        Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
        Poll::Pending => Poll::Pending,
    }
}

/// Push the pending chunk to the peer, or read the next one from input.
fn poll_local<I: AsyncRead + Unpin>(
    response: &mut HijackedResponse,
    input: &mut I,
    in_buf: &mut [u8],
    pending: Option<(usize, usize)>,
    input_open: bool,
    cx: &mut Context<'_>,
) -> Poll<io::Result<Step>> {
    if let Some((start, end)) = pending {
        return match Pin::new(response).poll_write(cx, &in_buf[start..end]) {
            Poll::Ready(Ok(n)) => Poll::Ready(Ok(Step::Sent(n))),
            Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
            Poll::Pending => Poll::Pending,
        };
    }
    if !input_open {
        return Poll::Pending;
    }

    let mut buf = ReadBuf::new(in_buf);
    match Pin::new(input).poll_read(cx, &mut buf) {
        Poll::Ready(Ok(())) => Poll::Ready(Ok(Step::InputRead(buf.filled().len()))),
        Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
        Poll::Pending => Poll::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hijack::tests::{FakeConn, HalfClose};
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_pump_half_closes_after_input() {
        let (local, mut remote) = tokio::io::duplex(64);
        let conn = FakeConn::new(local, HalfClose::Succeeds);
        let calls = conn.calls.clone();
        let mut resp = HijackedResponse::new(Box::new(conn));

        let peer = tokio::spawn(async move {
            let mut received = Vec::new();
            remote.read_to_end(&mut received).await.unwrap();
            remote.write_all(b"echo:").await.unwrap();
            remote.write_all(&received).await.unwrap();
        });

        let mut output = Vec::new();
        let received = pump(&mut resp, &b"hello"[..], &mut output).await.unwrap();

        assert_eq!(output, b"echo:hello");
        assert_eq!(received, 10);
        assert_eq!(calls.close_write.load(Ordering::SeqCst), 1);
        assert_eq!(calls.close.load(Ordering::SeqCst), 0);

        peer.await.unwrap();
        resp.close();
        assert_eq!(calls.close.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pump_stops_when_peer_closes_first() {
        let (local, mut remote) = tokio::io::duplex(64);
        let conn = FakeConn::new(local, HalfClose::Succeeds);
        let mut resp = HijackedResponse::new(Box::new(conn));

        remote.write_all(b"bye").await.unwrap();
        drop(remote);

        // Input never ends; the peer hanging up must still finish the pump.
        let (_input_writer, input) = tokio::io::duplex(64);
        let mut output = Vec::new();
        let received = pump(&mut resp, input, &mut output).await.unwrap();

        assert_eq!(received, 3);
        assert_eq!(output, b"bye");
    }

    #[tokio::test]
    async fn test_pump_surfaces_half_close_failure() {
        let (local, _remote) = tokio::io::duplex(64);
        let conn = FakeConn::new(local, HalfClose::Fails(1));
        let mut resp = HijackedResponse::new(Box::new(conn));

        let result = pump(&mut resp, tokio::io::empty(), tokio::io::sink()).await;
        assert!(matches!(
            result,
            Err(ClientError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
    }

    #[tokio::test]
    async fn test_pump_with_echoing_peer_larger_than_buffer() {
        let (local, mut remote) = tokio::io::duplex(64);
        let conn = FakeConn::new(local, HalfClose::Succeeds);
        let mut resp = HijackedResponse::new(Box::new(conn));

        let peer = tokio::spawn(async move {
            let mut chunk = [0u8; 16];
            loop {
                let n = remote.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                remote.write_all(&chunk[..n]).await.unwrap();
            }
        });

        let input: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        let mut output = Vec::new();
        let received = tokio::time::timeout(
            Duration::from_secs(5),
            pump(&mut resp, &input[..], &mut output),
        )
        .await
        .expect("session stalled against an echoing peer")
        .unwrap();

        assert_eq!(received, input.len() as u64);
        assert_eq!(output, input);
        peer.await.unwrap();
    }
}
