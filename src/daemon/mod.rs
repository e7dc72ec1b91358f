//! Daemon module for the focus-session timer.
//!
//! This module contains the daemon-side functionality:
//! - `timer`: Timer engine with state transitions and countdown logic
//! - `dispatch`: Notification dispatcher mapping transition events to cues
//! - `ipc`: Unix-socket server and request handling

pub mod dispatch;
pub mod ipc;
pub mod timer;

pub use dispatch::{MockNotifier, NoopNotifier, NotificationDispatcher, Notifier};
pub use timer::{spawn_ticker, TickerGuard, TimerEngine};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};

use crate::sound::create_cue_player;
use crate::types::TimerConfig;

use ipc::{IpcServer, RequestHandler};

/// Runs the daemon until Ctrl-C.
///
/// Owns the engine, the 1-second ticker, the cue player, the notification
/// dispatcher, and the IPC server. Client requests and transition events
/// are multiplexed through `select!` on one task, so no shared state
/// crosses threads. The ticker guard stops the tick task on every exit
/// path.
///
/// # Errors
///
/// Returns an error if the socket cannot be bound.
pub async fn run(socket_path: &Path) -> Result<()> {
    info!("Starting focus-timer daemon");

    let player = create_cue_player(true);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(TimerConfig::default(), event_tx)));
    let _ticker = spawn_ticker(Arc::clone(&engine));

    // Permission is requested once inside the constructor; a missing or
    // denied notification center degrades to audio-only.
    #[cfg(target_os = "macos")]
    let notifier = crate::notification::NotificationManager::new_with_fallback().await;
    #[cfg(not(target_os = "macos"))]
    let notifier: Option<NoopNotifier> = None;

    let dispatcher = NotificationDispatcher::new(Arc::clone(&player), notifier);
    let handler = RequestHandler::new(Arc::clone(&engine), Arc::clone(&player));
    let server = IpcServer::new(socket_path)?;
    info!("Listening on {:?}", server.socket_path());

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            Some(event) = event_rx.recv() => {
                dispatcher.dispatch(event).await;
            }
            conn = server.accept() => {
                match conn {
                    Ok(mut stream) => match IpcServer::receive_request(&mut stream).await {
                        Ok(request) => {
                            let response = handler.handle(request).await;
                            if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
                                warn!("Failed to send response: {}", e);
                            }
                        }
                        Err(e) => warn!("Failed to read request: {}", e),
                    },
                    Err(e) => error!("Accept failed: {}", e),
                }
            }
        }
    }

    info!("Daemon stopped");
    Ok(())
}
