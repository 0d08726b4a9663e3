pub mod parser;
pub mod render;
pub mod voices;

use std::path::Path;

use crate::audio;
use crate::client::{Speed, SynthesisOutcome, SynthesisRequest, TtsClient};
use crate::error::AppError;

pub use parser::Command;

/// The service refuses longer text; we only warn and let it decide.
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Form fields plus the state of the current submission.
///
/// Only [`FormState::submit`] writes `loading` and `outcome`.
#[derive(Debug, Clone)]
pub struct FormState {
    pub text: String,
    pub voice: String,
    pub lang: String,
    pub speed: Speed,
    loading: bool,
    outcome: Option<SynthesisOutcome>,
    audio: Option<Vec<u8>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice: voices::DEFAULT_VOICE.to_string(),
            lang: voices::DEFAULT_LANG.to_string(),
            speed: Speed::default(),
            loading: false,
            outcome: None,
            audio: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Step {
    Continue(String),
    Quit,
}

impl FormState {
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn outcome(&self) -> Option<&SynthesisOutcome> {
        self.outcome.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn with_submission(
        text: &str,
        loading: bool,
        outcome: Option<SynthesisOutcome>,
        audio: Option<Vec<u8>>,
    ) -> Self {
        Self {
            text: text.to_string(),
            loading,
            outcome,
            audio,
            ..Self::default()
        }
    }

    /// Reason the submit action is disabled, if it is.
    pub fn submit_blocked(&self) -> Option<&'static str> {
        if self.loading {
            Some("A request is already in progress")
        } else if self.text.trim().is_empty() {
            Some("Nothing to say, set some text first")
        } else {
            None
        }
    }

    pub fn request(&self) -> SynthesisRequest {
        SynthesisRequest {
            text: self.text.clone(),
            voice: self.voice.clone(),
            lang: self.lang.clone(),
            speed: self.speed,
        }
    }

    /// Run one synthesis and hold its outcome until the next submission.
    pub async fn submit(&mut self, client: &TtsClient) -> &SynthesisOutcome {
        self.loading = true;
        self.outcome = None;
        self.audio = None;

        let outcome = client.synthesize(&self.request()).await;

        self.loading = false;
        self.outcome.insert(outcome)
    }

    /// Audio of the current successful outcome, fetched once and then cached.
    pub async fn audio(&mut self, client: &TtsClient) -> Result<&[u8], AppError> {
        let path = self
            .outcome
            .as_ref()
            .and_then(SynthesisOutcome::download_path)
            .ok_or(AppError::NoAudio)?;

        if self.audio.is_none() {
            let bytes = client.fetch_audio(path).await?;
            self.audio = Some(bytes);
        }

        Ok(self.audio.as_deref().unwrap_or_default())
    }

    pub async fn handle(&mut self, client: &TtsClient, command: Command) -> Result<Step, AppError> {
        let message = match command {
            Command::Text(text) => {
                let len = text.chars().count();
                self.text = text;
                if len > MAX_TEXT_LENGTH {
                    format!(
                        "Text set ({} chars, the service accepts at most {})",
                        len, MAX_TEXT_LENGTH
                    )
                } else {
                    format!("Text set ({} chars)", len)
                }
            }
            Command::Voice(voice) => {
                self.voice = voice;
                format!("Voice: {}", self.voice)
            }
            Command::Lang(lang) => {
                let name = voices::language_name(&lang).unwrap_or("unknown to this client");
                self.lang = lang;
                format!("Language: {} ({})", self.lang, name)
            }
            Command::Speed(raw) => match raw.parse::<Speed>() {
                Ok(speed) => {
                    self.speed = speed;
                    format!("Speed: {}", self.speed)
                }
                Err(e) => e.to_string(),
            },
            Command::Show => render::form(self, client.api_base_url()),
            Command::Voices => render::voice_list(&voices::catalogue()),
            Command::Submit => match self.submit_blocked() {
                Some(reason) => reason.to_string(),
                None => {
                    let outcome = self.submit(client).await;
                    render::outcome(outcome, client.api_base_url())
                }
            },
            Command::Play => {
                let wav = self.audio(client).await?.to_vec();
                let info = audio::inspect(&wav)?;
                tokio::task::spawn_blocking(move || audio::play(wav))
                    .await
                    .map_err(|e| AppError::Playback(e.to_string()))??;
                format!("Played {}", render::audio_info(&info))
            }
            Command::Save(dir) => {
                let dir = dir.unwrap_or_else(|| ".".to_string());
                let wav = self.audio(client).await?.to_vec();
                let path = self
                    .outcome
                    .as_ref()
                    .and_then(SynthesisOutcome::download_path)
                    .ok_or(AppError::NoAudio)?;
                let saved = audio::save(Path::new(&dir), path, &wav)?;
                match audio::inspect(&wav) {
                    Ok(info) => format!("Saved {} ({})", saved.display(), render::audio_info(&info)),
                    Err(e) => {
                        tracing::warn!("Saved audio is not a readable WAV: {}", e);
                        format!("Saved {}", saved.display())
                    }
                }
            }
            Command::Help => render::HELP.to_string(),
            Command::Quit => return Ok(Step::Quit),
            Command::Empty => String::new(),
            Command::Invalid(message) => message,
        };

        Ok(Step::Continue(message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{
        http::{header, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    use super::*;
    use crate::audio::tests::wav_fixture;
    use crate::client::tts::tests::{accepting_stub, spawn_stub};

    fn filled() -> FormState {
        FormState {
            text: "Hello".into(),
            ..FormState::default()
        }
    }

    fn continued(step: Step) -> String {
        match step {
            Step::Continue(message) => message,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    async fn stub_with_audio(downloads: Arc<AtomicUsize>) -> String {
        let router = accepting_stub().route(
            "/download/x.wav",
            get(move || {
                let downloads = Arc::clone(&downloads);
                async move {
                    downloads.fetch_add(1, Ordering::SeqCst);
                    ([(header::CONTENT_TYPE, "audio/wav")], wav_fixture(12000, 24000))
                }
            }),
        );
        spawn_stub(router).await
    }

    #[test]
    fn test_defaults() {
        let state = FormState::default();
        assert_eq!(state.voice, "af_heart");
        assert_eq!(state.lang, "f");
        assert_eq!(state.speed.value(), 1.0);
        assert!(state.outcome().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn test_submit_blocked() {
        let mut state = FormState::default();
        assert!(state.submit_blocked().is_some());

        state.text = "   ".into();
        assert!(state.submit_blocked().is_some());

        state.text = "Hello".into();
        assert!(state.submit_blocked().is_none());

        let state = FormState::with_submission("Hello", true, None, None);
        assert_eq!(
            state.submit_blocked(),
            Some("A request is already in progress")
        );
    }

    #[tokio::test]
    async fn test_submit_refused_while_loading() {
        let client = TtsClient::new("http://127.0.0.1:9");
        let mut state = FormState::with_submission("Hello", true, None, None);

        let message = continued(state.handle(&client, Command::Submit).await.unwrap());

        assert_eq!(message, "A request is already in progress");
        assert!(state.outcome().is_none());
    }

    #[tokio::test]
    async fn test_submit_stores_outcome() {
        let base = spawn_stub(accepting_stub()).await;
        let client = TtsClient::new(base.clone());
        let mut state = filled();

        let message = continued(state.handle(&client, Command::Submit).await.unwrap());

        assert_eq!(message, format!("Audio ready: {}/download/x.wav", base));
        assert!(!state.loading());
        assert_eq!(
            state.outcome(),
            Some(&SynthesisOutcome::Success {
                download_path: "/download/x.wav".into()
            })
        );
    }

    #[tokio::test]
    async fn test_new_submission_replaces_outcome() {
        let base = spawn_stub(Router::new().route(
            "/tts",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": "Text too long" })),
                )
            }),
        ))
        .await;
        let client = TtsClient::new(base);
        let mut state = FormState::with_submission(
            "Hello",
            false,
            Some(SynthesisOutcome::Success {
                download_path: "/download/old.wav".into(),
            }),
            Some(vec![1, 2, 3]),
        );

        state.submit(&client).await;

        assert_eq!(
            state.outcome(),
            Some(&SynthesisOutcome::ApiError {
                message: "Error: Text too long".into()
            })
        );
        assert!(matches!(state.audio(&client).await, Err(AppError::NoAudio)));
    }

    #[tokio::test]
    async fn test_field_commands() {
        let client = TtsClient::new("http://127.0.0.1:9");
        let mut state = FormState::default();

        state.handle(&client, Command::Voice("bf_emma".into())).await.unwrap();
        state.handle(&client, Command::Lang("b".into())).await.unwrap();
        state.handle(&client, Command::Speed("1.5".into())).await.unwrap();
        let message = continued(state.handle(&client, Command::Speed("fast".into())).await.unwrap());

        assert!(message.starts_with("invalid speed"));
        assert_eq!(
            state.request(),
            SynthesisRequest {
                text: String::new(),
                voice: "bf_emma".into(),
                lang: "b".into(),
                speed: Speed::new(1.5),
            }
        );
    }

    #[tokio::test]
    async fn test_long_text_warning() {
        let client = TtsClient::new("http://127.0.0.1:9");
        let mut state = FormState::default();

        let text = "a".repeat(MAX_TEXT_LENGTH + 1);
        let message = continued(state.handle(&client, Command::Text(text)).await.unwrap());

        assert!(message.contains("at most 3000"));
    }

    #[tokio::test]
    async fn test_save_fetches_once() {
        let downloads = Arc::new(AtomicUsize::new(0));
        let base = stub_with_audio(Arc::clone(&downloads)).await;
        let client = TtsClient::new(base);
        let mut state = filled();
        state.submit(&client).await;

        let dir = std::env::temp_dir().join(format!("kokoro-tts-form-{}", std::process::id()));
        let save = Command::Save(Some(dir.to_string_lossy().to_string()));
        let message = continued(state.handle(&client, save.clone()).await.unwrap());

        assert!(message.contains("x.wav"));
        assert!(message.contains("0.5s, 24000 Hz"));
        assert!(dir.join("x.wav").exists());

        let cached = state.audio(&client).await.unwrap().to_vec();
        continued(state.handle(&client, save).await.unwrap());

        assert_eq!(cached, wav_fixture(12000, 24000));
        assert_eq!(downloads.load(Ordering::SeqCst), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_play_without_outcome() {
        let client = TtsClient::new("http://127.0.0.1:9");
        let mut state = filled();

        let err = state.handle(&client, Command::Play).await.unwrap_err();

        assert!(matches!(err, AppError::NoAudio));
    }

    #[tokio::test]
    async fn test_quit() {
        let client = TtsClient::new("http://127.0.0.1:9");
        let mut state = FormState::default();

        assert_eq!(state.handle(&client, Command::Quit).await.unwrap(), Step::Quit);
    }
}
