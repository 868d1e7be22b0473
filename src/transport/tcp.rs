//! TCP delivery
//!
//! Resolves the host, connects to the first address that accepts, writes the
//! whole payload and shuts the write side down. No framing, no response.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{lookup_host, TcpStream};
use tracing::{debug, info};

use super::traits::{Target, Transport};
use crate::errors::{AppError, AppResult};

/// Plain TCP transport
#[derive(Debug, Clone, Default)]
pub struct TcpTransport {
    connect_timeout: Option<Duration>,
}

impl TcpTransport {
    /// Create a transport that waits on connect for as long as the OS does
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound connection establishment per address
    pub fn with_connect_timeout(timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout: timeout,
        }
    }

    async fn resolve(&self, target: &Target) -> AppResult<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = lookup_host((target.host.as_str(), target.port))
            .await
            .map_err(|e| AppError::resolve_with_source(&target.host, e))?
            .collect();

        if addrs.is_empty() {
            return Err(AppError::resolve_with_source(
                &target.host,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses found"),
            ));
        }

        debug!("Resolved {} to {:?}", target.host, addrs);
        Ok(addrs)
    }

    async fn connect_one(&self, addr: SocketAddr) -> std::io::Result<TcpStream> {
        match self.connect_timeout {
            Some(limit) => tokio::time::timeout(limit, TcpStream::connect(addr))
                .await
                .map_err(|_| {
                    std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        format!("connection timed out after {:?}", limit),
                    )
                })?,
            None => TcpStream::connect(addr).await,
        }
    }

    async fn connect(&self, target: &Target) -> AppResult<(TcpStream, SocketAddr)> {
        let mut last_error = None;

        for addr in self.resolve(target).await? {
            match self.connect_one(addr).await {
                Ok(stream) => return Ok((stream, addr)),
                Err(e) => {
                    debug!("Connection to {} failed: {}", addr, e);
                    last_error = Some((addr, e));
                }
            }
        }

        match last_error {
            Some((addr, err)) => Err(AppError::connect_with_source(addr.to_string(), err)),
            None => Err(AppError::connect_with_source(
                target.to_string(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses to connect to"),
            )),
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn deliver(&self, target: &Target, payload: &[u8]) -> AppResult<()> {
        let (mut stream, addr) = self.connect(target).await?;
        debug!("Connected to {} ({})", target, addr);

        // write_all loops until every byte is accepted by the socket
        stream
            .write_all(payload)
            .await
            .map_err(|e| AppError::send_with_source(addr.to_string(), e))?;

        stream
            .flush()
            .await
            .map_err(|e| AppError::send_with_source(addr.to_string(), e))?;

        stream
            .shutdown()
            .await
            .map_err(|e| AppError::send_with_source(addr.to_string(), e))?;

        info!("Sent {} bytes to {}", payload.len(), target);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tcp"
    }
}
