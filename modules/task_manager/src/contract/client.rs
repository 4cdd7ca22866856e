use async_trait::async_trait;

use crate::contract::{
    error::TaskManagerError,
    model::{
        Category, CategoryPatch, NewCategory, NewProject, NewTask, NewUser, Project,
        ProjectPatch, Task, TaskPatch, User, UserPatch,
    },
};

/// Public API of the task_manager module for in-process consumers.
///
/// List calls take `skip`/`limit`; `None` falls back to the configured defaults.
#[async_trait]
pub trait TaskManagerApi: Send + Sync {
    // users
    async fn create_user(&self, new_user: NewUser) -> Result<User, TaskManagerError>;
    async fn get_user(&self, id: i32) -> Result<User, TaskManagerError>;
    async fn list_users(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<User>, TaskManagerError>;
    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<User, TaskManagerError>;
    async fn delete_user(&self, id: i32) -> Result<(), TaskManagerError>;

    // categories
    async fn create_category(&self, new: NewCategory) -> Result<Category, TaskManagerError>;
    async fn get_category(&self, id: i32) -> Result<Category, TaskManagerError>;
    async fn list_categories(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Category>, TaskManagerError>;
    async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> Result<Category, TaskManagerError>;
    async fn delete_category(&self, id: i32) -> Result<(), TaskManagerError>;

    // projects
    async fn create_project(&self, new: NewProject) -> Result<Project, TaskManagerError>;
    async fn get_project(&self, id: i32) -> Result<Project, TaskManagerError>;
    async fn list_projects(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Project>, TaskManagerError>;
    async fn list_user_projects(
        &self,
        user_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Project>, TaskManagerError>;
    async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Project, TaskManagerError>;
    async fn delete_project(&self, id: i32) -> Result<(), TaskManagerError>;

    // tasks
    async fn create_task(&self, new: NewTask) -> Result<Task, TaskManagerError>;
    async fn get_task(&self, id: i32) -> Result<Task, TaskManagerError>;
    async fn list_tasks(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError>;
    async fn list_user_tasks(
        &self,
        user_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError>;
    async fn list_project_tasks(
        &self,
        project_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError>;
    async fn list_category_tasks(
        &self,
        category_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError>;
    async fn update_task(&self, id: i32, patch: TaskPatch) -> Result<Task, TaskManagerError>;
    async fn delete_task(&self, id: i32) -> Result<(), TaskManagerError>;
}
