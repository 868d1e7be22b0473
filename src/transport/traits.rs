use async_trait::async_trait;
use std::fmt;

use crate::errors::AppResult;

/// Where a payload is going
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Delivery of one encoded payload
///
/// Implementations own the whole exchange: open, write everything, close.
/// There is no acknowledgment to wait for.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver the complete payload to the target
    async fn deliver(&self, target: &Target, payload: &[u8]) -> AppResult<()>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
