//! Error types for the activities service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is a caller input problem; the Display text is the `detail` sent back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Missing required query parameter: email")]
    MissingEmail,

    #[error("Invalid email query parameter: {0}")]
    InvalidEmailQuery(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::ActivityNotFound => StatusCode::NOT_FOUND,
            Error::AlreadySignedUp | Error::NotSignedUp => StatusCode::BAD_REQUEST,
            Error::MissingEmail | Error::InvalidEmailQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(Error::ActivityNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::AlreadySignedUp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NotSignedUp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::MissingEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::InvalidEmailQuery("duplicate field `email`".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn into_response_keeps_status() {
        let response = Error::NotSignedUp.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
