use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
    #[error("Invalid plan id")]
    InvalidId,
    #[error("Plan not found")]
    NotFound,
    #[error("The search could not be processed. Check your selections and try again.")]
    SearchRejected,
    #[error("Too many requests right now. Wait a moment and try again.")]
    RateLimited,
    #[error("Unexpected response from the places provider (status: {0})")]
    UpstreamStatus(u16),
    #[error("Places provider error: {0}")]
    Provider(String),
    #[error("No places matched your filters. Try changing the search.")]
    NoPlacesMatched,
    #[error("No plan could be built from the matched places.")]
    NoResults,
    #[error("Places request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] mongodb::error::Error),
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
}

impl PlanError {
    /// Message shown to API clients. Internal failures are not echoed back.
    fn public_message(&self) -> String {
        match self {
            PlanError::Config(_) | PlanError::Storage(_) | PlanError::Encode(_) => {
                "Internal server error".to_string()
            }
            PlanError::Http(err) if err.is_timeout() => {
                "The places provider did not respond in time.".to_string()
            }
            PlanError::Http(_) => "Something went wrong while fetching places.".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for PlanError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlanError::Config(_) | PlanError::Storage(_) | PlanError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PlanError::InvalidFilter(_) | PlanError::InvalidId | PlanError::SearchRejected => {
                StatusCode::BAD_REQUEST
            }
            PlanError::NotFound | PlanError::NoPlacesMatched | PlanError::NoResults => {
                StatusCode::NOT_FOUND
            }
            PlanError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            PlanError::Http(err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            PlanError::UpstreamStatus(_) | PlanError::Provider(_) | PlanError::Http(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}
