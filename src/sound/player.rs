//! Cue player implementation using rodio.
//!
//! This module provides the `RodioCuePlayer` which uses the rodio v0.20
//! audio library for cue playback.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use crate::types::CueKind;

use super::embedded::cue_data;
use super::error::SoundError;
use super::source::{resolve_cue_source, SoundSource};

/// A cue player backed by rodio.
///
/// Playback is non-blocking. Each cue owns one sink slot: retriggering a cue
/// stops whatever is still playing in that slot and starts the sample from
/// the beginning, so cues restart instead of queueing or layering.
pub struct RodioCuePlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether cue playback is enabled.
    enabled: AtomicBool,
    /// Resolved source per cue, fixed at construction.
    sources: HashMap<CueKind, SoundSource>,
    /// Live sink per cue; replaced on retrigger.
    playing: Mutex<HashMap<CueKind, Sink>>,
}

impl RodioCuePlayer {
    /// Creates a new cue player.
    ///
    /// Resolves every cue's sound source once, up front.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Initial state of the playback flag.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(enabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        let sources = CueKind::ALL
            .into_iter()
            .map(|cue| (cue, resolve_cue_source(cue)))
            .collect();

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            enabled: AtomicBool::new(enabled),
            sources,
            playing: Mutex::new(HashMap::new()),
        })
    }

    /// Plays the cue's sound from the beginning.
    ///
    /// If the same cue is still sounding, that playback is stopped first.
    /// If a system sound fails to open or decode, playback falls back to the
    /// cue's embedded sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio format cannot be decoded or the sink
    /// cannot be created. A disabled player returns `Ok` without playing.
    pub fn play_cue(&self, cue: CueKind) -> Result<(), SoundError> {
        if !self.enabled.load(Ordering::Relaxed) {
            debug!("Cue playback disabled, skipping {}", cue.as_str());
            return Ok(());
        }

        match self.sources.get(&cue) {
            Some(SoundSource::System { path, name }) => {
                debug!("Playing system sound '{}' for {}", name, cue.as_str());
                match self.start_file(cue, path) {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        warn!(
                            "Failed to play system sound '{}': {}, falling back to embedded",
                            name, e
                        );
                        self.start_embedded(cue)
                    }
                }
            }
            _ => {
                debug!("Playing embedded sample for {}", cue.as_str());
                self.start_embedded(cue)
            }
        }
    }

    /// Starts a sound file from the filesystem in the cue's sink slot.
    fn start_file(&self, cue: CueKind, path: &std::path::Path) -> Result<(), SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let reader = BufReader::new(file);
        let decoder = Decoder::new(reader).map_err(|e| SoundError::DecodeError(e.to_string()))?;

        self.start_decoder(cue, decoder)
    }

    /// Starts the cue's embedded sample in its sink slot.
    fn start_embedded(&self, cue: CueKind) -> Result<(), SoundError> {
        let cursor = Cursor::new(cue_data(cue));
        let decoder = Decoder::new(cursor)
            .map_err(|e| SoundError::DecodeError(format!("embedded sample: {}", e)))?;

        self.start_decoder(cue, decoder)
    }

    /// Replaces the cue's sink with a fresh one playing the decoded source.
    fn start_decoder<R>(&self, cue: CueKind, decoder: Decoder<R>) -> Result<(), SoundError>
    where
        R: std::io::Read + std::io::Seek + Send + Sync + 'static,
    {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;
        sink.append(decoder);

        let mut playing = self
            .playing
            .lock()
            .map_err(|_| SoundError::PlaybackError("sink registry poisoned".to_string()))?;
        // Replacing the previous sink stops that playback; the new one
        // starts from the beginning of the sample.
        if let Some(old) = playing.insert(cue, sink) {
            old.stop();
        }

        debug!("Cue playback started for {}", cue.as_str());
        Ok(())
    }

    /// Returns true if cue playback is currently enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Sets the playback flag. Takes effect for subsequent triggers.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        debug!("Cue playback enabled: {}", enabled);
    }
}

impl std::fmt::Debug for RodioCuePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioCuePlayer")
            .field("enabled", &self.enabled.load(Ordering::Relaxed))
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

/// Creates a rodio cue player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned
/// so the caller can degrade to a silent player.
#[must_use]
pub fn try_create_player(enabled: bool) -> Option<Arc<RodioCuePlayer>> {
    match RodioCuePlayer::new(enabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, cues will be silent: {}", e);
            None
        }
    }
}
