use skiff_client::{ClientConfig, HijackedResponse, connect, pump};
use std::io::Read;
use tokio::io::{AsyncWriteExt, DuplexStream};
use tokio::sync::mpsc;

const CHUNK_SIZE: usize = 8 * 1024;

pub async fn pipe_command(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = connect(&config.host).await?;
    let mut response = HijackedResponse::new(conn);

    let input = spawn_reader(std::io::stdin());
    let result = pump(&mut response, input, tokio::io::stdout()).await;
    response.close();

    let received = result?;
    tracing::info!("Received {} bytes from {}", received, config.host);
    Ok(())
}

/// Read `source` on a detached thread. A blocked read never holds up
/// runtime shutdown once the peer has hung up.
fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> DuplexStream {
    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(4);
    let (reader, mut writer) = tokio::io::duplex(CHUNK_SIZE);

    std::thread::spawn(move || {
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.blocking_send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::debug!("Input read failed: {}", e);
                    break;
                }
            }
        }
    });

    tokio::spawn(async move {
        while let Some(chunk) = rx.recv().await {
            if writer.write_all(&chunk).await.is_err() {
                break;
            }
        }
        let _ = writer.shutdown().await;
    });

    reader
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_spawn_reader_forwards_until_eof() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 97) as u8).collect();
        let mut reader = spawn_reader(std::io::Cursor::new(data.clone()));

        let mut forwarded = Vec::new();
        reader.read_to_end(&mut forwarded).await.unwrap();
        assert_eq!(forwarded, data);
    }

    #[test]
    fn test_runtime_shutdown_not_held_by_blocked_source() {
        struct Stalled(std::sync::mpsc::Receiver<()>);

        impl Read for Stalled {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                let _ = self.0.recv();
                Ok(0)
            }
        }

        let (release, rx) = std::sync::mpsc::channel();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let started = std::time::Instant::now();

        runtime.block_on(async {
            drop(spawn_reader(Stalled(rx)));
        });
        drop(runtime);

        assert!(started.elapsed() < std::time::Duration::from_secs(2));
        drop(release);
    }
}
