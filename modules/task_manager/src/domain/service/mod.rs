//! Domain service with the business rules of the task manager.
//!
//! Depends only on the repository ports and the password hasher port, never on
//! infra types. Operations are grouped per entity in the submodules.

use std::sync::Arc;

use modkit::{Page, PageQuery};

use crate::domain::error::DomainError;
use crate::domain::ports::PasswordHasher;
use crate::domain::repo::{
    CategoriesRepository, ProjectsRepository, TasksRepository, UsersRepository,
};

mod categories;
mod projects;
mod tasks;
mod users;

pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PERSON_NAME_MAX_LEN: usize = 50;
pub const CATEGORY_NAME_MAX_LEN: usize = 50;
pub const PROJECT_NAME_MAX_LEN: usize = 100;
pub const TASK_TITLE_MAX_LEN: usize = 255;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_limit: u64,
    pub max_page_limit: u64,
    pub min_password_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_limit: 100,
            max_page_limit: 1000,
            min_password_length: 1,
        }
    }
}

/// Repository ports the service is wired with.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UsersRepository>,
    pub categories: Arc<dyn CategoriesRepository>,
    pub projects: Arc<dyn ProjectsRepository>,
    pub tasks: Arc<dyn TasksRepository>,
}

#[derive(Clone)]
pub struct Service {
    users: Arc<dyn UsersRepository>,
    categories: Arc<dyn CategoriesRepository>,
    projects: Arc<dyn ProjectsRepository>,
    tasks: Arc<dyn TasksRepository>,
    hasher: Arc<dyn PasswordHasher>,
    config: ServiceConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repos: Repositories, hasher: Arc<dyn PasswordHasher>, config: ServiceConfig) -> Self {
        Self {
            users: repos.users,
            categories: repos.categories,
            projects: repos.projects,
            tasks: repos.tasks,
            hasher,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn page(&self, query: PageQuery) -> Page {
        query.resolve(self.config.default_page_limit, self.config.max_page_limit)
    }

    // --- existence checks shared by the entity operations ---

    async fn ensure_user(&self, id: i32) -> Result<(), DomainError> {
        match self.users.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::user_not_found(id)),
        }
    }

    async fn ensure_project(&self, id: i32) -> Result<(), DomainError> {
        match self.projects.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::project_not_found(id)),
        }
    }

    async fn ensure_category(&self, id: i32) -> Result<(), DomainError> {
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::category_not_found(id)),
        }
    }
}

// --- validation helpers ---

/// Non-blank and at most `max` characters.
fn validate_required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    validate_max_len(field, value, max)
}

fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(
            field,
            format!("too long: {len} characters (max: {max})"),
        ));
    }
    Ok(())
}

fn validate_optional_max_len(
    field: &str,
    value: Option<&String>,
    max: usize,
) -> Result<(), DomainError> {
    match value {
        Some(v) => validate_max_len(field, v, max),
        None => Ok(()),
    }
}

/// `local@domain.tld` shape: one `@`, non-empty local part, dotted domain, no whitespace.
fn validate_email(email: &str) -> Result<(), DomainError> {
    validate_max_len("email", email, EMAIL_MAX_LEN)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::validation(
            "email",
            format!("'{email}' is not a valid email address"),
        ))
    }
}
