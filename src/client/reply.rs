use reqwest::StatusCode;
use serde::Deserialize;

/// A received response body, classified into one of the shapes the service produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply {
    /// `{ "success": true, "data": { "download_url": ... } }`
    Accepted {
        download_url: String,
        filename: Option<String>,
        message: Option<String>,
    },
    /// `{ "success": false, "message"?: ... }`, or any other object received with a 2xx status.
    Refused { message: Option<String> },
    /// `{ "detail": ... }`, the service's input validation and HTTP exceptions.
    Rejected { detail: String },
}

#[derive(thiserror::Error, Debug)]
pub enum ReplyError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("success reply without data.download_url")]
    MissingDownloadUrl,

    #[error("unrecognised reply (HTTP {0})")]
    Unrecognised(StatusCode),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: Option<bool>,
    message: Option<String>,
    data: Option<ReplyData>,
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ReplyData {
    download_url: Option<String>,
    filename: Option<String>,
}

pub fn parse(status: StatusCode, body: &[u8]) -> Result<ServiceReply, ReplyError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if let Some(detail) = envelope.detail {
        let detail = match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        return Ok(ServiceReply::Rejected { detail });
    }

    match envelope.success {
        Some(true) if status.is_success() => {
            let data = envelope.data.ok_or(ReplyError::MissingDownloadUrl)?;
            let download_url = data.download_url.ok_or(ReplyError::MissingDownloadUrl)?;
            Ok(ServiceReply::Accepted {
                download_url,
                filename: data.filename,
                message: envelope.message,
            })
        }
        // A success body on an error status is not trusted
        Some(true) => Ok(ServiceReply::Refused { message: None }),
        Some(false) => Ok(ServiceReply::Refused {
            message: envelope.message,
        }),
        None if status.is_success() => Ok(ServiceReply::Refused {
            message: envelope.message,
        }),
        None => Err(ReplyError::Unrecognised(status)),
    }
}
