use super::reply::{self, ServiceReply};
use super::{join_url, SynthesisOutcome, SynthesisRequest, UNKNOWN_ERROR};
use crate::error::AppError;

/// HTTP client for a Kokoro TTS service exposing `POST /tts` and `GET /download/{name}`.
pub struct TtsClient {
    http_client: reqwest::Client,
    api_base_url: String,
}

impl TtsClient {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base_url: api_base_url.into(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Sends one synthesis request and classifies whatever comes back.
    ///
    /// Never fails: every error is converted into a [`SynthesisOutcome`] carrying a
    /// message for the user, and the raw failure is logged.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> SynthesisOutcome {
        let endpoint = join_url(&self.api_base_url, "/tts");

        // "http://" joins into "http:///tts", which parses with host "tts"
        let has_host = reqwest::Url::parse(&self.api_base_url)
            .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
            .unwrap_or(false);
        if !has_host || reqwest::Url::parse(&endpoint).is_err() {
            tracing::error!("Invalid TTS endpoint built from base URL '{}'", self.api_base_url);
            return SynthesisOutcome::unexpected();
        }

        tracing::info!(
            "TTS request (len={}, voice={}, lang={}, speed={}) -> {}",
            request.text.chars().count(),
            request.voice,
            request.lang,
            request.speed,
            endpoint
        );

        let response = match self.http_client.post(&endpoint).json(request).send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                tracing::error!("Failed to build TTS request: {}", e);
                return SynthesisOutcome::unexpected();
            }
            Err(e) => {
                tracing::error!("No response from TTS service: {}", e);
                return SynthesisOutcome::network(&self.api_base_url);
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to read TTS response (HTTP {}): {}", status, e);
                return SynthesisOutcome::unexpected();
            }
        };

        match reply::parse(status, &body) {
            Ok(ServiceReply::Accepted {
                download_url,
                filename,
                message,
            }) => {
                tracing::info!(
                    "TTS accepted: {} (file={}, message={})",
                    download_url,
                    filename.as_deref().unwrap_or("-"),
                    message.as_deref().unwrap_or("-")
                );
                SynthesisOutcome::Success {
                    download_path: download_url,
                }
            }
            Ok(ServiceReply::Refused { message }) => {
                tracing::warn!(
                    "TTS refused (HTTP {}): {}",
                    status,
                    String::from_utf8_lossy(&body)
                );
                SynthesisOutcome::ApiError {
                    message: message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
                }
            }
            Ok(ServiceReply::Rejected { detail }) => {
                tracing::warn!("TTS rejected (HTTP {}): {}", status, detail);
                SynthesisOutcome::ApiError {
                    message: format!("Error: {}", detail),
                }
            }
            Err(e) => {
                tracing::error!(
                    "Unexpected TTS response (HTTP {}): {} - body: {}",
                    status,
                    e,
                    String::from_utf8_lossy(&body)
                );
                SynthesisOutcome::unexpected()
            }
        }
    }

    /// Fetches the generated audio behind a download path returned by [`Self::synthesize`].
    pub async fn fetch_audio(&self, download_path: &str) -> Result<Vec<u8>, AppError> {
        let url = join_url(&self.api_base_url, download_path);
        tracing::debug!("Fetching audio from {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Audio fetch failed (HTTP {}): {}", status, url);
            return Err(AppError::AudioUnavailable(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Fetched {} bytes of audio", bytes.len());

        Ok(bytes.to_vec())
    }
}

/// One-shot form of [`TtsClient::synthesize`].
pub async fn synthesize(request: &SynthesisRequest, api_base_url: &str) -> SynthesisOutcome {
    TtsClient::new(api_base_url).synthesize(request).await
}
