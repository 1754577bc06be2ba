//! Caller identification.
//!
//! Authentication happens in front of this service; the gateway forwards
//! the authenticated user in `X-User-Id` and may add an `X-Request-Id`
//! used as the correlation id of published events.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{CommandMetadata, UserId};

use super::error::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extractor that requires an identified caller.
#[derive(Debug, Clone)]
pub struct RequireUser {
    pub user_id: UserId,
    pub request_id: Option<String>,
}

impl RequireUser {
    /// Command metadata for this request.
    pub fn metadata(&self) -> CommandMetadata {
        let metadata = CommandMetadata::new(self.user_id.clone()).with_source("http");
        match &self.request_id {
            Some(id) => metadata.with_correlation_id(id.clone()),
            None => metadata,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = UserRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or(UserRejection::Missing)?;
        let user_id = UserId::new(raw).map_err(|_| UserRejection::Missing)?;

        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        Ok(RequireUser {
            user_id,
            request_id,
        })
    }
}

/// Rejection when no usable user id was forwarded.
#[derive(Debug, Clone)]
pub enum UserRejection {
    Missing,
}

impl IntoResponse for UserRejection {
    fn into_response(self) -> Response {
        let message = match self {
            UserRejection::Missing => "Missing or empty X-User-Id header",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                code: "UNAUTHENTICATED".to_string(),
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
