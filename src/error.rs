#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audio unavailable (HTTP {0})")]
    AudioUnavailable(u16),

    #[error("No audio yet, submit a request first")]
    NoAudio,

    #[error("Invalid WAV data: {0}")]
    Wav(#[from] hound::Error),

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("Playback is not available in this build")]
    PlaybackUnavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_unavailable_message() {
        assert_eq!(
            AppError::AudioUnavailable(404).to_string(),
            "Audio unavailable (HTTP 404)"
        );
    }

    #[test]
    fn test_config_message() {
        let err = AppError::Config("API_BASE_URL is empty".into());
        assert_eq!(err.to_string(), "Configuration error: API_BASE_URL is empty");
    }
}
