//! Common test utilities and helpers
//!
//! A command builder for the notify-client binary that isolates it from the
//! user's environment, and a one-shot stub server that captures payloads.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::io::Read;
use std::net::TcpListener;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const ISOLATED_VARS: &[&str] = &[
    "NOTIFY_HOST",
    "NOTIFY_PORT",
    "NOTIFY_SOURCE",
    "NOTIFY_LEVEL",
    "NOTIFY_TAG",
    "NOTIFY_CLIENT_CONFIG",
    "NOTIFY_CLIENT_DETACHED",
    "RUST_LOG",
];

/// Test command builder for the notify-client binary
pub struct TestCommand {
    cmd: Command,
    _config_home: TempDir,
}

impl TestCommand {
    /// Create a command with no inherited notify settings and an empty config dir
    pub fn new() -> Self {
        let config_home = TempDir::new().expect("Failed to create temp directory");
        let mut cmd = Command::cargo_bin("notify-client").expect("Failed to find notify-client binary");

        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("XDG_CONFIG_HOME", config_home.path());

        Self {
            cmd,
            _config_home: config_home,
        }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    /// Set an environment variable for the command
    pub fn env<K: AsRef<str>, V: AsRef<str>>(mut self, key: K, value: V) -> Self {
        self.cmd.env(key.as_ref(), value.as_ref());
        self
    }

    /// Point the client at an explicit config file
    pub fn config(self, path: &Path) -> Self {
        let arg = format!("--config={}", path.display());
        self.arg(arg)
    }

    /// Run the command and hand back the assertion
    pub fn assert(mut self) -> assert_cmd::assert::Assert {
        self.cmd.timeout(Duration::from_secs(30)).assert()
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts a single connection and captures everything written to it
pub struct StubServer {
    port: u16,
    received: mpsc::Receiver<Vec<u8>>,
}

impl StubServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let port = listener.local_addr().unwrap().port();
        let (sender, received) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((mut socket, _)) = listener.accept() {
                let mut payload = Vec::new();
                if socket.read_to_end(&mut payload).is_ok() {
                    let _ = sender.send(payload);
                }
            }
        });

        Self { port, received }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Wait for the payload and parse it as JSON
    pub fn payload(&self, timeout: Duration) -> Option<Value> {
        let bytes = self.received.recv_timeout(timeout).ok()?;
        Some(serde_json::from_slice(&bytes).expect("stub received invalid JSON"))
    }

    /// Raw bytes of the payload
    pub fn raw_payload(&self, timeout: Duration) -> Option<Vec<u8>> {
        self.received.recv_timeout(timeout).ok()
    }
}

/// Grab a port that nothing is listening on
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
