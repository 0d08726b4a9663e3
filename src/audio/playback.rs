use crate::error::AppError;

/// Play WAV bytes on the default output device, returning once playback ends.
///
/// Blocks the calling thread; run it on `spawn_blocking` from async code.
#[cfg(feature = "audio-playback")]
pub fn play(wav: Vec<u8>) -> Result<(), AppError> {
    use rodio::{Decoder, OutputStream, Sink};
    use std::io::Cursor;

    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AppError::Playback(format!("Failed to open audio output: {}", e)))?;

    let sink = Sink::try_new(&stream_handle)
        .map_err(|e| AppError::Playback(format!("Failed to create audio sink: {}", e)))?;

    let source = Decoder::new(Cursor::new(wav))
        .map_err(|e| AppError::Playback(format!("Failed to decode audio: {}", e)))?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}

#[cfg(not(feature = "audio-playback"))]
pub fn play(_wav: Vec<u8>) -> Result<(), AppError> {
    Err(AppError::PlaybackUnavailable)
}
