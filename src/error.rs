//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::models::PricingError;
use crate::pricing::responses::ErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Pricing(err) => {
                let (status, error_type) = match err {
                    PricingError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
                    PricingError::UnknownFormula(_) => (StatusCode::BAD_REQUEST, "unknown_formula"),
                    // The UI renders this as "we don't yet serve this pickup
                    // location", so the kind must survive the wire.
                    PricingError::UnknownOriginCity(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "unknown_origin_city")
                    }
                    PricingError::RateSourceUnavailable(_) => {
                        (StatusCode::SERVICE_UNAVAILABLE, "rate_source_unavailable")
                    }
                };
                (status, error_type, err.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error_type, message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn pricing_errors_map_to_specific_statuses() {
        let cases = [
            (
                PricingError::InvalidInput("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PricingError::UnknownFormula("FLASH".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PricingError::UnknownOriginCity("Timbuktu".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                PricingError::RateSourceUnavailable("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
