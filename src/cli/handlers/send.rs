//! Send handler
//!
//! Runs the one-way pipeline for a single notification: validate, encode,
//! deliver. Any failure ends the pipeline.

use tracing::{debug, info};

use super::super::CliContext;
use crate::encoder;
use crate::errors::AppResult;
use crate::notification::{validate, NotificationDraft};
use crate::transport::{StdoutTransport, Target, TcpTransport, Transport};

/// Handler for sending one notification
pub struct SendHandler {
    transport: Box<dyn Transport>,
}

impl SendHandler {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Pick the transport for this run from the context and flags
    pub fn from_context(context: &CliContext, dry_run: bool) -> Self {
        let transport: Box<dyn Transport> = if dry_run {
            Box::new(StdoutTransport)
        } else {
            let timeout = context.config_manager.config().server.connect_timeout();
            Box::new(TcpTransport::with_connect_timeout(timeout))
        };

        Self::new(transport)
    }

    /// Validate, encode and deliver the notification
    pub async fn send(&self, draft: NotificationDraft) -> AppResult<()> {
        let notification = validate(draft)?;

        debug!("host   : {}:{}", notification.host(), notification.port());
        debug!("level  : {}", notification.level());
        debug!("title  : {}", notification.title());
        debug!("message: {}", notification.message());
        debug!("source : {}", notification.source());
        debug!("tag    : {:?}", notification.tag());

        let payload = encoder::encode(&notification)?;
        debug!("request: {}", String::from_utf8_lossy(&payload));

        let target = Target::new(notification.host(), notification.port());
        self.transport.deliver(&target, &payload).await?;

        info!(
            "Notification delivered via {} to {}",
            self.transport.name(),
            target
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every delivery instead of touching the network
    #[derive(Default, Clone)]
    struct RecordingTransport {
        sent: Arc<Mutex<Vec<(Target, Vec<u8>)>>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn deliver(&self, target: &Target, payload: &[u8]) -> AppResult<()> {
            self.sent
                .lock()
                .unwrap()
                .push((target.clone(), payload.to_vec()));
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn draft(level: &str) -> NotificationDraft {
        NotificationDraft {
            host: Some("localhost".to_string()),
            message: Some("hi".to_string()),
            level: level.to_string(),
            source: "bash".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_valid_notification_is_delivered() {
        let transport = RecordingTransport::default();
        let handler = SendHandler::new(Box::new(transport.clone()));

        handler.send(draft("critical")).await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Target::new("localhost", 5050));

        let received = encoder::decode(&sent[0].1).unwrap();
        assert_eq!(received.message, "hi");
        assert_eq!(received.level.as_str(), "critical");
        assert_eq!(received.source, "bash");
    }

    #[tokio::test]
    async fn test_invalid_level_stops_before_delivery() {
        let transport = RecordingTransport::default();
        let handler = SendHandler::new(Box::new(transport.clone()));

        let err = handler.send(draft("urgent")).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidLevel { .. }));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_host_stops_before_delivery() {
        let transport = RecordingTransport::default();
        let handler = SendHandler::new(Box::new(transport.clone()));

        let mut no_host = draft("low");
        no_host.host = None;
        let err = handler.send(no_host).await.unwrap_err();

        assert_eq!(err.to_string(), "missing host");
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
