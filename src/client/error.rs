//! Failures talking to the statistics API.

use serde::Deserialize;

/// Text shown to a user when a view cannot be populated.
pub const LOAD_FAILED: &str = "Error al cargar datos";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid endpoint url {0}")]
    InvalidUrl(String),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered {status}: {detail}")]
    Status {
        endpoint: String,
        status: u16,
        detail: String,
    },
    #[error("could not decode {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message for the view that failed. Lookups that miss keep the upstream
    /// explanation; everything else collapses to the generic load failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status: 404, detail, .. } if !detail.is_empty() => detail.clone(),
            _ => LOAD_FAILED.to_string(),
        }
    }
}

/// Error body emitted by the API: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}

pub(crate) fn detail_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| body.trim().chars().take(200).collect())
}
