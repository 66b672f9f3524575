use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform envelope returned by every endpoint, success and failure alike
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Total matches for lists, 1 for single-entity operations, 0 for delete
    pub count: u64,
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// 200 envelope with a payload
    pub fn ok(count: u64, message: &str, data: T) -> Self {
        Self {
            count,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    /// 201 envelope for a freshly created entity
    pub fn created(message: &str, data: T) -> Self {
        Self {
            count: 1,
            status_code: StatusCode::CREATED.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    /// 200 envelope with a null payload (delete)
    pub fn no_data(message: &str) -> Self {
        Self {
            count: 0,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            data: None,
        }
    }
}
