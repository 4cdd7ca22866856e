use axum::http::StatusCode;
use modkit::api::problem::{Problem, ProblemResponse, ValidationError};

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{code}"))
        .with_code(code)
        .with_instance(instance);

    ProblemResponse(problem)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::UserNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "TASKS_USER_NOT_FOUND",
            "User not found",
            e.to_string(),
            instance,
        ),
        DomainError::CategoryNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "TASKS_CATEGORY_NOT_FOUND",
            "Category not found",
            e.to_string(),
            instance,
        ),
        DomainError::ProjectNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "TASKS_PROJECT_NOT_FOUND",
            "Project not found",
            e.to_string(),
            instance,
        ),
        DomainError::TaskNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "TASKS_TASK_NOT_FOUND",
            "Task not found",
            e.to_string(),
            instance,
        ),
        DomainError::ReferenceNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "TASKS_REFERENCE_NOT_FOUND",
            "Referenced record not found",
            e.to_string(),
            instance,
        ),
        DomainError::UsernameTaken { .. } => from_parts(
            StatusCode::CONFLICT,
            "TASKS_USERNAME_CONFLICT",
            "Username already registered",
            e.to_string(),
            instance,
        ),
        DomainError::EmailTaken { .. } => from_parts(
            StatusCode::CONFLICT,
            "TASKS_EMAIL_CONFLICT",
            "Email already registered",
            e.to_string(),
            instance,
        ),
        DomainError::CategoryNameTaken { .. } => from_parts(
            StatusCode::CONFLICT,
            "TASKS_CATEGORY_NAME_CONFLICT",
            "Category already exists",
            e.to_string(),
            instance,
        ),
        DomainError::Conflict { .. } => from_parts(
            StatusCode::CONFLICT,
            "TASKS_CONFLICT",
            "Conflict",
            e.to_string(),
            instance,
        ),
        DomainError::Validation { field, message } => {
            let ProblemResponse(problem) = from_parts(
                StatusCode::UNPROCESSABLE_ENTITY,
                "TASKS_VALIDATION",
                "Validation error",
                e.to_string(),
                instance,
            );
            ProblemResponse(problem.with_errors(vec![ValidationError {
                detail: message.clone(),
                pointer: format!("/{field}"),
            }]))
        }
        DomainError::PasswordHash { .. } | DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Internal error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TASKS_INTERNAL",
                "Internal error",
                "An internal error occurred",
                instance,
            )
        }
    }
}
