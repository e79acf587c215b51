/*
[INPUT]:  VK API JSON bodies ({"response": ...} or {"error": ...})
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::{Result, VkError};

/// Top-level body of every API method call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: Option<T>,
    #[serde(default)]
    pub error: Option<ApiFailure>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Unwrap the payload, turning an `error` body or a missing `response` into an error
    pub fn into_response(self, field: &str) -> Result<T> {
        if let Some(failure) = self.error {
            return Err(failure.into());
        }
        self.response
            .ok_or_else(|| VkError::InvalidResponse(format!("missing {}", field)))
    }
}

/// Raw body of a validation call; only the top-level keys matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCheck(pub Map<String, Value>);

impl LinkCheck {
    /// Whether the body has an `error` key, whatever its value
    pub fn has_error(&self) -> bool {
        self.0.contains_key("error")
    }

    pub fn error(&self) -> Option<&Value> {
        self.0.get("error")
    }
}

/// `error` object returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}

impl From<ApiFailure> for VkError {
    fn from(failure: ApiFailure) -> Self {
        VkError::Api {
            code: failure.error_code,
            message: failure.error_msg,
        }
    }
}

/// Payload of `utils.getLinkStats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    #[serde(default)]
    pub key: Option<String>,
    pub stats: Vec<DailyViews>,
}

impl LinkStats {
    /// Total views across every day in the sequence
    pub fn total_views(&self) -> u64 {
        self.stats.iter().map(|day| day.views).sum()
    }
}

/// One per-day record from the stats sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyViews {
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub views: u64,
}

impl DailyViews {
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.date_naive())
    }
}

/// Payload of `utils.getShortLink`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    pub short_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
}
