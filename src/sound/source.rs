//! Cue source resolution.
//!
//! Each cue kind resolves to a concrete sound source at player startup:
//! a preferred macOS system sound when one exists, otherwise the embedded
//! sample for that cue. Hosts without system sound directories (Linux,
//! containers) always resolve to embedded sources.

use std::path::PathBuf;

use crate::types::CueKind;

/// Represents the source of a cue to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A system sound from `/System/Library/Sounds/` or similar.
    System {
        /// The name of the sound (e.g., "Glass").
        name: String,
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// An embedded sample compiled into the binary.
    Embedded {
        /// The cue this sample belongs to.
        cue: CueKind,
    },
}

impl SoundSource {
    /// Creates a new system sound source.
    #[must_use]
    pub fn system(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::System {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a new embedded source for the given cue.
    #[must_use]
    pub fn embedded(cue: CueKind) -> Self {
        Self::Embedded { cue }
    }

    /// Returns a display name for the source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::System { name, .. } => name,
            Self::Embedded { cue } => cue.as_str(),
        }
    }

    /// Returns true if this is a system sound.
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// Returns true if this is an embedded sample.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded { .. })
    }
}

/// Directories to search for system sounds, in order of priority.
const SYSTEM_SOUND_DIRS: &[&str] = &["/System/Library/Sounds", "/Library/Sounds"];

/// Supported audio file extensions.
const SUPPORTED_EXTENSIONS: &[&str] = &["aiff", "wav", "mp3", "m4a", "flac"];

/// Preferred system sound names per cue, in order of preference.
///
/// The lists are disjoint so the three cues stay audibly distinct even when
/// every preferred sound is present.
const fn preferred_sound_names(cue: CueKind) -> &'static [&'static str] {
    match cue {
        CueKind::FocusComplete => &["Glass", "Pop"],
        CueKind::BreakComplete => &["Ping", "Blow"],
        CueKind::Milestone => &["Hero", "Funk"],
    }
}

/// Discovers available system sounds.
///
/// Scans the system sound directories and returns a list of available
/// sounds, sorted by name. Returns an empty vector if no sounds are found.
#[must_use]
pub fn discover_system_sounds() -> Vec<SoundSource> {
    let mut sounds = Vec::new();

    for dir in SYSTEM_SOUND_DIRS {
        let path = PathBuf::from(dir);
        if !path.exists() {
            continue;
        }

        if let Ok(entries) = std::fs::read_dir(&path) {
            for entry in entries.flatten() {
                let file_path = entry.path();
                if let Some(ext) = file_path.extension() {
                    let ext_str = ext.to_string_lossy().to_lowercase();
                    if SUPPORTED_EXTENSIONS.contains(&ext_str.as_str()) {
                        if let Some(stem) = file_path.file_stem() {
                            sounds.push(SoundSource::System {
                                name: stem.to_string_lossy().into_owned(),
                                path: file_path,
                            });
                        }
                    }
                }
            }
        }
    }

    sounds.sort_by(|a, b| a.name().cmp(b.name()));
    sounds
}

/// Resolves the sound source for a cue.
///
/// Tries the cue's preferred system sounds in order; if none exists, the
/// cue's embedded sample is used. A missing preferred sound never borrows a
/// sound from another cue's list, so cues remain distinguishable.
#[must_use]
pub fn resolve_cue_source(cue: CueKind) -> SoundSource {
    let system_sounds = discover_system_sounds();

    for preferred_name in preferred_sound_names(cue) {
        if let Some(sound) = system_sounds.iter().find(|s| s.name() == *preferred_name) {
            return sound.clone();
        }
    }

    SoundSource::embedded(cue)
}
