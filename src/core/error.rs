use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("not found"),

            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                warn!("Foreign key violation: {}", db_err);
                Self::bad_request("Referenced entity does not exist")
                    .with_details(db_err.to_string())
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Database pool unavailable");
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Unexpected database error: {:?}", other);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_details(err.to_string())
    }
}

// Every body problem (syntax, wrong types, missing content type) is a client error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("Invalid request body").with_details(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let status = rejection.status();
        if status.is_server_error() {
            error!("Path extraction failed: {}", rejection.body_text());
            return Self::internal_server_error("Internal server error");
        }
        Self::bad_request("Invalid path parameter").with_details(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "not found");
    }

    #[test]
    fn test_pool_errors_map_to_503() {
        assert_eq!(
            AppError::from(sqlx::Error::PoolTimedOut).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(sqlx::Error::PoolClosed).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_other_storage_errors_map_to_500() {
        let err = AppError::from(sqlx::Error::ColumnNotFound("rating".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.details().is_none());
    }

    #[test]
    fn test_validation_errors_map_to_400_with_details() {
        #[derive(Validate)]
        struct Named {
            #[validate(length(max = 3))]
            name: String,
        }

        let errors = Named { name: "too long".to_string() }.validate().unwrap_err();
        let err = AppError::from(errors);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Validation error");
        assert!(err.details().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_into_response_renders_json_body() {
        let response = AppError::not_found("not found")
            .with_details("Movie 7 does not exist")
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not found");
        assert_eq!(body["details"], "Movie 7 does not exist");
    }
}
