use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::traits::{Target, Transport};
use crate::errors::{AppResult, ErrorContextExt};

/// Dry-run transport: prints the payload instead of connecting
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTransport;

/// Write one payload followed by a newline
async fn write_payload<W>(writer: &mut W, payload: &[u8]) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(payload)
        .await
        .with_context("writing payload to stdout")?;
    writer
        .write_all(b"\n")
        .await
        .with_context("writing payload to stdout")?;
    writer.flush().await.with_context("flushing stdout")?;

    Ok(())
}

#[async_trait]
impl Transport for StdoutTransport {
    async fn deliver(&self, target: &Target, payload: &[u8]) -> AppResult<()> {
        info!("Dry run - would send {} bytes to {}", payload.len(), target);
        write_payload(&mut tokio::io::stdout(), payload).await
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}
