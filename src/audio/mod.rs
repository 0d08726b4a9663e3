pub mod playback;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use hound::WavReader;

use crate::error::AppError;

pub use playback::play;

const FALLBACK_FILE_NAME: &str = "speech.wav";

#[derive(Debug, Clone, PartialEq)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f32,
}

/// Read the WAV header of fetched audio
pub fn inspect(wav: &[u8]) -> Result<AudioInfo, AppError> {
    let reader = WavReader::new(Cursor::new(wav))?;
    let spec = reader.spec();

    // duration() counts samples per channel
    let duration_secs = if spec.sample_rate == 0 {
        0.0
    } else {
        reader.duration() as f32 / spec.sample_rate as f32
    };

    Ok(AudioInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration_secs,
    })
}

/// File name to save a download under: the last segment of the download path.
pub fn file_name_for(download_path: &str) -> String {
    let last = download_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('/')
        .next()
        .unwrap_or_default();

    match Path::new(last).file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        _ => FALLBACK_FILE_NAME.to_string(),
    }
}

/// Write audio bytes into `dir`, named after the download path.
pub fn save(dir: &Path, download_path: &str, wav: &[u8]) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name_for(download_path));
    std::fs::write(&path, wav)?;

    tracing::info!("Saved {} bytes to {}", wav.len(), path.display());
    Ok(path)
}
