pub mod reply;
pub mod tts;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use tts::{synthesize, TtsClient};

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
pub const DEFAULT_SPEED: f32 = 1.0;

pub const UNKNOWN_ERROR: &str = "unknown error";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Body of `POST /tts`. Built per submission and dropped once sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub lang: String,
    pub speed: Speed,
}

/// Speech rate, always within `[MIN_SPEED, MAX_SPEED]` and sent as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Speed(f32);

impl Speed {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid speed '{0}', expected a number between 0.5 and 2.0")]
pub struct InvalidSpeed(pub String);

impl FromStr for Speed {
    type Err = InvalidSpeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| InvalidSpeed(s.to_string()))?;

        if !value.is_finite() {
            return Err(InvalidSpeed(s.to_string()));
        }

        Ok(Self::new(value))
    }
}

/// The single classified result of one synthesis attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisOutcome {
    /// Server-relative path of the generated audio, e.g. `/download/kokoro_1.wav`.
    Success { download_path: String },
    /// The service understood the request but reported a failure or rejected the input.
    ApiError { message: String },
    /// No response was received from the service.
    NetworkError { message: String },
    UnexpectedError { message: String },
}

impl SynthesisOutcome {
    pub fn network(api_base_url: &str) -> Self {
        SynthesisOutcome::NetworkError {
            message: format!("Connection error, is the API running at {}?", api_base_url),
        }
    }

    pub fn unexpected() -> Self {
        SynthesisOutcome::UnexpectedError {
            message: UNEXPECTED_ERROR.to_string(),
        }
    }

    pub fn download_path(&self) -> Option<&str> {
        match self {
            SynthesisOutcome::Success { download_path } => Some(download_path),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SynthesisOutcome::Success { .. })
    }
}

/// Joins the base URL and a server-relative path, tolerating a trailing `/` on the base.
pub fn join_url(api_base_url: &str, path: &str) -> String {
    let base = api_base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
