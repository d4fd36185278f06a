use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use clinic_desk_core::ClinicDeskError;

use crate::views;

#[derive(Debug)]
pub struct WebError {
    status: StatusCode,
    message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Html(views::error_page(self.status, &self.message))).into_response()
    }
}

impl From<ClinicDeskError> for WebError {
    fn from(err: ClinicDeskError) -> Self {
        match err {
            ClinicDeskError::InvalidDateFormat(_) => {
                WebError::new(StatusCode::BAD_REQUEST, "Invalid date of birth format.")
            }
            ClinicDeskError::PatientNotFound(_) => {
                WebError::new(StatusCode::NOT_FOUND, "No visit records for this patient.")
            }
            ClinicDeskError::InvalidInput(message) => {
                WebError::new(StatusCode::BAD_REQUEST, message)
            }
            ClinicDeskError::DatabaseError(detail) => {
                tracing::error!("Store error: {}", detail);
                WebError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        }
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "form rejected");
        WebError::new(rejection.status(), "Invalid form submission.")
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "query rejected");
        WebError::new(rejection.status(), "Invalid request parameters.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ClinicDeskError::InvalidDateFormat("x".into()), StatusCode::BAD_REQUEST),
            (ClinicDeskError::PatientNotFound("x".into()), StatusCode::NOT_FOUND),
            (ClinicDeskError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (ClinicDeskError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(WebError::from(err).status(), status);
        }
    }

    #[test]
    fn test_store_detail_is_not_leaked() {
        let err =
            WebError::from(ClinicDeskError::DatabaseError("disk I/O error at /var/db".into()));
        assert_eq!(err.message, "Internal error");
    }
}
