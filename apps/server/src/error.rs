use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use burndown_core::errors::{Error as CoreError, SeriesError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Internal(String),
}

/// Body of every non-2xx response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::InvalidScopeParameter(_) | CoreError::Validation(_) => {
                    StatusCode::BAD_REQUEST
                }
                e if e.is_data_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
                CoreError::Series(SeriesError::Empty) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn maps_core_errors_to_status_codes() {
        let cases = [
            (
                CoreError::InvalidScopeParameter("unrecognized burndown type 'x'".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::DataUnavailable("database is locked".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (CoreError::Series(SeriesError::Empty), StatusCode::NOT_FOUND),
            (
                CoreError::Series(SeriesError::Gap {
                    previous: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                    next: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }
}
