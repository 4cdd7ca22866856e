//! Persistence ports the domain needs, one per entity.
//!
//! Object-safe and async-friendly via `async_trait`. The service computes
//! timestamps and validates; repositories persist and report constraint
//! violations as [`StorageError`].

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use modkit::Page;
use thiserror::Error;

use crate::contract::model::{
    Category, Project, ProjectStatus, Task, TaskPriority, TaskStatus, User,
};

/// Failure reported by a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("{0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Row to insert into `users`; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub user_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub user_id: i32,
    pub project_id: Option<i32>,
    pub category_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn insert(&self, draft: UserDraft) -> StorageResult<User>;
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;
    /// Ordered by id ascending.
    async fn list(&self, page: Page) -> StorageResult<Vec<User>>;
    /// Writes the mutable columns (the password hash is left untouched).
    /// `None` if no row has `u.id`.
    async fn update(&self, u: User) -> StorageResult<Option<User>>;
    /// Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> StorageResult<bool>;
}

#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn insert(&self, draft: CategoryDraft) -> StorageResult<Category>;
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Category>>;
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Category>>;
    async fn list(&self, page: Page) -> StorageResult<Vec<Category>>;
    async fn update(&self, c: Category) -> StorageResult<Option<Category>>;
    async fn delete(&self, id: i32) -> StorageResult<bool>;
}

#[async_trait]
pub trait ProjectsRepository: Send + Sync {
    async fn insert(&self, draft: ProjectDraft) -> StorageResult<Project>;
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Project>>;
    async fn list(&self, page: Page) -> StorageResult<Vec<Project>>;
    async fn list_by_user(&self, user_id: i32, page: Page) -> StorageResult<Vec<Project>>;
    async fn update(&self, p: Project) -> StorageResult<Option<Project>>;
    async fn delete(&self, id: i32) -> StorageResult<bool>;
}

#[async_trait]
pub trait TasksRepository: Send + Sync {
    async fn insert(&self, draft: TaskDraft) -> StorageResult<Task>;
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Task>>;
    async fn list(&self, page: Page) -> StorageResult<Vec<Task>>;
    async fn list_by_user(&self, user_id: i32, page: Page) -> StorageResult<Vec<Task>>;
    async fn list_by_project(&self, project_id: i32, page: Page) -> StorageResult<Vec<Task>>;
    async fn list_by_category(&self, category_id: i32, page: Page)
        -> StorageResult<Vec<Task>>;
    async fn update(&self, t: Task) -> StorageResult<Option<Task>>;
    async fn delete(&self, id: i32) -> StorageResult<bool>;
}
