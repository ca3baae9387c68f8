use chrono::{DateTime, Utc};
use sensors::Snapshot;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(ToSchema)]
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            status: "ignored".to_string(),
            message: Some(message.into()),
        }
    }
}

#[derive(ToSchema)]
#[derive(Debug, Serialize)]
pub struct SensorsResponse {
    /// Latest reading of every channel, keyed by channel name.
    #[schema(value_type = Object)]
    pub sensors: Snapshot,
    #[schema(value_type = String, format = "date-time")]
    pub timestamp: DateTime<Utc>,
}
