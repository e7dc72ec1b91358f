//! IPC server for the focus-session timer daemon.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for timer commands
//! - Integration with TimerEngine and the cue player

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Mutex;
use tokio::time::{timeout, Duration};
use tracing::warn;

use crate::sound::CuePlayer;
use crate::types::{CueKind, IpcRequest, IpcResponse, TimerSnapshot};

use super::timer::TimerEngine;

// ============================================================================
// Constants
// ============================================================================

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

/// Returns the default daemon socket path (`~/.focus-timer/focus-timer.sock`).
#[must_use]
pub fn default_socket_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join(".focus-timer").join("focus-timer.sock")
}

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Read error
    #[error("Failed to read request: {0}")]
    ReadError(String),

    /// Write error
    #[error("Failed to write response: {0}")]
    WriteError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove stale socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("Failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .with_context(|| format!("Failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::ReadError(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("Connection closed by client");
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .map_err(|e| IpcError::SerializationError(e.to_string()))?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response)
            .map_err(|e| IpcError::SerializationError(e.to_string()))?;

        stream
            .write_all(&json)
            .await
            .map_err(|e| IpcError::WriteError(e.to_string()))?;
        stream
            .flush()
            .await
            .map_err(|e| IpcError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to the engine and the cue player.
pub struct RequestHandler {
    /// Shared reference to the timer engine
    engine: Arc<Mutex<TimerEngine>>,
    /// Cue player, for the sound flag and sound auditioning
    player: Arc<dyn CuePlayer>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(engine: Arc<Mutex<TimerEngine>>, player: Arc<dyn CuePlayer>) -> Self {
        Self { engine, player }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Toggle => self.handle_toggle().await,
            IpcRequest::Reset => self.handle_reset().await,
            IpcRequest::Config {
                focus_minutes,
                short_break_minutes,
                long_break_minutes,
            } => {
                self.handle_config(focus_minutes, short_break_minutes, long_break_minutes)
                    .await
            }
            IpcRequest::Sound => self.handle_sound().await,
            IpcRequest::TestSound { cue } => self.handle_test_sound(cue).await,
            IpcRequest::Status => self.handle_status().await,
        }
    }

    /// Handles the toggle command.
    async fn handle_toggle(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        engine.toggle();

        let message = if engine.get_state().is_active {
            "タイマーを開始しました"
        } else {
            "タイマーを一時停止しました"
        };
        IpcResponse::success(message, Some(self.snapshot_of(&engine)))
    }

    /// Handles the reset command.
    async fn handle_reset(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;
        engine.reset();

        IpcResponse::success(
            "タイマーをリセットしました",
            Some(self.snapshot_of(&engine)),
        )
    }

    /// Handles the config command.
    async fn handle_config(&self, focus: u32, short_break: u32, long_break: u32) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.apply_custom_durations(focus, short_break, long_break) {
            Ok(()) => IpcResponse::success(
                "タイマー設定を更新しました",
                Some(self.snapshot_of(&engine)),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the sound toggle command.
    async fn handle_sound(&self) -> IpcResponse {
        let enabled = !self.player.is_enabled();
        self.player.set_enabled(enabled);

        let message = if enabled {
            "サウンドを有効にしました"
        } else {
            "サウンドを無効にしました"
        };

        let engine = self.engine.lock().await;
        IpcResponse::success(message, Some(self.snapshot_of(&engine)))
    }

    /// Handles the test sound command.
    ///
    /// Playback problems stay on the daemon side; the client always gets a
    /// success response describing what happened.
    async fn handle_test_sound(&self, cue: CueKind) -> IpcResponse {
        let message = if !self.player.is_enabled() {
            "サウンドが無効のため再生をスキップしました"
        } else {
            match self.player.play_cue(cue) {
                Ok(()) => "テストサウンドを再生しました",
                Err(e) => {
                    warn!("Test cue playback failed: {}", e);
                    "サウンドを再生できませんでした"
                }
            }
        };

        let engine = self.engine.lock().await;
        IpcResponse::success(message, Some(self.snapshot_of(&engine)))
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let engine = self.engine.lock().await;
        IpcResponse::success("", Some(self.snapshot_of(&engine)))
    }

    fn snapshot_of(&self, engine: &TimerEngine) -> TimerSnapshot {
        TimerSnapshot::from_state(engine.get_state(), self.player.is_enabled())
    }
}

// ============================================================================
// Tests
// ============================================================================
