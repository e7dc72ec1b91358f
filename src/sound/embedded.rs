//! Embedded cue data.
//!
//! Each cue has its own fallback sample compiled into the binary, used when
//! the preferred system sounds are not available. Keeping the three samples
//! distinct preserves the audible difference between cue kinds even without
//! system sounds.
//!
//! Note: In a production build, these would contain actual audio data.
//! For now, we provide minimal valid WAV files with short click patterns.

use crate::types::CueKind;

/// Embedded cue for regular focus completions.
///
/// WAV format structure:
/// - RIFF header (12 bytes)
/// - fmt chunk (24 bytes)
/// - data chunk header (8 bytes)
/// - audio data (variable)
pub const FOCUS_COMPLETE_CUE_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x2C, 0x00, 0x00, 0x00, // File size - 8 (44 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk
    0x64, 0x61, 0x74, 0x61, // "data"
    0x08, 0x00, 0x00, 0x00, // Data size (8 bytes)
    0x00, 0x40, 0x00, 0xC0, // Two-sample click
    0x00, 0x40, 0x00, 0xC0, // repeated once
];

/// Embedded cue for break completions.
pub const BREAK_COMPLETE_CUE_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x28, 0x00, 0x00, 0x00, // File size - 8 (40 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk
    0x64, 0x61, 0x74, 0x61, // "data"
    0x04, 0x00, 0x00, 0x00, // Data size (4 bytes)
    0x00, 0x20, 0x00, 0xE0, // Single softer click
];

/// Embedded cue for long-break milestones.
pub const MILESTONE_CUE_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x30, 0x00, 0x00, 0x00, // File size - 8 (48 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk
    0x64, 0x61, 0x74, 0x61, // "data"
    0x0C, 0x00, 0x00, 0x00, // Data size (12 bytes)
    0x00, 0x60, 0x00, 0xA0, // Triple click
    0x00, 0x60, 0x00, 0xA0, //
    0x00, 0x60, 0x00, 0xA0, //
];

/// Returns the embedded audio data for a cue.
#[must_use]
pub const fn cue_data(cue: CueKind) -> &'static [u8] {
    match cue {
        CueKind::FocusComplete => FOCUS_COMPLETE_CUE_DATA,
        CueKind::BreakComplete => BREAK_COMPLETE_CUE_DATA,
        CueKind::Milestone => MILESTONE_CUE_DATA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_data_exists_for_all_cues() {
        for cue in CueKind::ALL {
            assert!(!cue_data(cue).is_empty());
        }
    }

    #[test]
    fn test_cue_data_has_valid_wav_headers() {
        for cue in CueKind::ALL {
            let data = cue_data(cue);
            assert_eq!(&data[0..4], b"RIFF");
            assert_eq!(&data[8..12], b"WAVE");
            assert_eq!(&data[12..16], b"fmt ");
        }
    }

    #[test]
    fn test_cue_data_sizes_are_consistent() {
        for cue in CueKind::ALL {
            let data = cue_data(cue);
            let riff_size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
            assert_eq!(riff_size as usize, data.len() - 8);
        }
    }

    #[test]
    fn test_cue_data_is_distinct_per_cue() {
        assert_ne!(FOCUS_COMPLETE_CUE_DATA, BREAK_COMPLETE_CUE_DATA);
        assert_ne!(FOCUS_COMPLETE_CUE_DATA, MILESTONE_CUE_DATA);
        assert_ne!(BREAK_COMPLETE_CUE_DATA, MILESTONE_CUE_DATA);
    }
}
