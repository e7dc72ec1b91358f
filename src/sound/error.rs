//! Sound system error types.
//!
//! Cue playback is best-effort: these errors are logged by callers and
//! never reach the timer state machine.

use thiserror::Error;

/// Errors that can occur in the cue playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no output device connected).
    #[error("オーディオデバイスが利用できません: {0}")]
    DeviceNotAvailable(String),

    /// Cue sound file was not found at the specified path.
    #[error("サウンドファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// Failed to decode the audio file.
    #[error("サウンドファイルのデコードに失敗しました: {0}")]
    DecodeError(String),

    /// Failed to create the audio output stream or sink.
    #[error("オーディオストリームの作成に失敗しました: {0}")]
    StreamError(String),

    /// Generic cue playback error.
    #[error("サウンド再生エラー: {0}")]
    PlaybackError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SoundError::DeviceNotAvailable("no device".to_string());
        assert!(err.to_string().contains("no device"));
        assert!(err.to_string().contains("オーディオデバイスが利用できません"));

        let err = SoundError::FileNotFound("/path/to/cue.aiff".to_string());
        assert!(err.to_string().contains("/path/to/cue.aiff"));

        let err = SoundError::DecodeError("invalid format".to_string());
        assert!(err.to_string().contains("invalid format"));

        let err = SoundError::StreamError("stream failed".to_string());
        assert!(err.to_string().contains("stream failed"));

        let err = SoundError::PlaybackError("unknown error".to_string());
        assert!(err.to_string().contains("unknown error"));
    }
}
