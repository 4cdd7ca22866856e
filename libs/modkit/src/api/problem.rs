use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    title = "Problem",
    description = "RFC 9457 Problem Details for HTTP APIs"
)]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Machine-readable error code defined by the application.
    pub code: String,
    /// Request id useful for tracing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Field-level validation errors for 4xx problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "ValidationError")]
pub struct ValidationError {
    pub detail: String,
    /// JSON Pointer to the invalid location (e.g., "/email").
    pub pointer: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            request_id: None,
            errors: None,
        }
    }

    /// Problem titled with the canonical reason phrase of `status`.
    pub fn for_status(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Error"), detail)
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Axum response wrapper that renders `Problem` with correct status & content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

pub fn bad_request(detail: impl Into<String>) -> ProblemResponse {
    Problem::for_status(StatusCode::BAD_REQUEST, detail).into()
}

pub fn not_found(detail: impl Into<String>) -> ProblemResponse {
    Problem::for_status(StatusCode::NOT_FOUND, detail).into()
}

pub fn conflict(detail: impl Into<String>) -> ProblemResponse {
    Problem::for_status(StatusCode::CONFLICT, detail).into()
}

pub fn unprocessable(detail: impl Into<String>) -> ProblemResponse {
    Problem::for_status(StatusCode::UNPROCESSABLE_ENTITY, detail).into()
}

pub fn internal_error(detail: impl Into<String>) -> ProblemResponse {
    Problem::for_status(StatusCode::INTERNAL_SERVER_ERROR, detail).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn problem_into_response_sets_status_and_content_type() {
        let p = Problem::new(StatusCode::CONFLICT, "Conflict", "username taken")
            .with_code("TASKS_USERNAME_CONFLICT");
        let resp = ProblemResponse(p).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["status"], 409);
        assert_eq!(json["code"], "TASKS_USERNAME_CONFLICT");
        assert!(json.get("errors").is_none());
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn problem_builder_pattern() {
        let p = Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Failed",
            "Input validation errors",
        )
        .with_code("VALIDATION_ERROR")
        .with_instance("/users/123")
        .with_request_id("req-456")
        .with_errors(vec![ValidationError {
            detail: "Email is required".to_string(),
            pointer: "/email".to_string(),
        }]);

        assert_eq!(p.status, 422);
        assert_eq!(p.code, "VALIDATION_ERROR");
        assert_eq!(p.instance, "/users/123");
        assert_eq!(p.request_id.as_deref(), Some("req-456"));
        assert_eq!(p.errors.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn convenience_constructors_use_reason_phrases() {
        let cases = [
            (bad_request("x"), 400, "Bad Request"),
            (not_found("x"), 404, "Not Found"),
            (conflict("x"), 409, "Conflict"),
            (unprocessable("x"), 422, "Unprocessable Entity"),
            (internal_error("x"), 500, "Internal Server Error"),
        ];
        for (resp, status, title) in cases {
            assert_eq!(resp.0.status, status);
            assert_eq!(resp.0.title, title);
        }
    }

    #[test]
    fn invalid_status_falls_back_to_500() {
        let mut p = Problem::for_status(StatusCode::OK, "odd");
        p.status = 1000;
        assert_eq!(p.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
