use thiserror::Error;

use crate::contract::error::TaskManagerError;
use crate::domain::repo::StorageError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: i32 },

    #[error("Category not found: {id}")]
    CategoryNotFound { id: i32 },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: i32 },

    #[error("Task not found: {id}")]
    TaskNotFound { id: i32 },

    #[error("Username '{username}' is already registered")]
    UsernameTaken { username: String },

    #[error("Email '{email}' is already registered")]
    EmailTaken { email: String },

    #[error("Category '{name}' already exists")]
    CategoryNameTaken { name: String },

    /// A foreign key pointed at a row that does not exist (caught by the store).
    #[error("Referenced record not found: {message}")]
    ReferenceNotFound { message: String },

    /// A unique constraint tripped in the store after the pre-checks passed.
    #[error("Conflicting record: {message}")]
    Conflict { message: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Password hashing failed: {message}")]
    PasswordHash { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: i32) -> Self {
        Self::UserNotFound { id }
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::CategoryNotFound { id }
    }

    pub fn project_not_found(id: i32) -> Self {
        Self::ProjectNotFound { id }
    }

    pub fn task_not_found(id: i32) -> Self {
        Self::TaskNotFound { id }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        Self::EmailTaken {
            email: email.into(),
        }
    }

    pub fn category_name_taken(name: impl Into<String>) -> Self {
        Self::CategoryNameTaken { name: name.into() }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UniqueViolation(message) => Self::Conflict { message },
            StorageError::ForeignKeyViolation(message) => Self::ReferenceNotFound { message },
            StorageError::Other(message) => Self::Database { message },
        }
    }
}

impl From<DomainError> for TaskManagerError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UserNotFound { id } => Self::not_found("User", id),
            DomainError::CategoryNotFound { id } => Self::not_found("Category", id),
            DomainError::ProjectNotFound { id } => Self::not_found("Project", id),
            DomainError::TaskNotFound { id } => Self::not_found("Task", id),
            DomainError::ReferenceNotFound { message } => Self::reference_not_found(message),
            DomainError::UsernameTaken { .. }
            | DomainError::EmailTaken { .. }
            | DomainError::CategoryNameTaken { .. }
            | DomainError::Conflict { .. } => Self::conflict(e.to_string()),
            DomainError::Validation { .. } => Self::validation(e.to_string()),
            DomainError::PasswordHash { .. } | DomainError::Database { .. } => Self::internal(),
        }
    }
}
