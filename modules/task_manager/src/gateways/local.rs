use async_trait::async_trait;
use modkit::PageQuery;
use std::sync::Arc;

use crate::contract::{
    client::TaskManagerApi,
    error::TaskManagerError,
    model::{
        Category, CategoryPatch, NewCategory, NewProject, NewTask, NewUser, Project,
        ProjectPatch, Task, TaskPatch, User, UserPatch,
    },
};
use crate::domain::service::Service;

/// Local implementation of the TaskManagerApi trait that delegates to the domain service
pub struct TaskManagerLocalClient {
    service: Arc<Service>,
}

impl TaskManagerLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn page(skip: Option<u64>, limit: Option<u64>) -> PageQuery {
    PageQuery { skip, limit }
}

#[async_trait]
impl TaskManagerApi for TaskManagerLocalClient {
    async fn create_user(&self, new_user: NewUser) -> Result<User, TaskManagerError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn get_user(&self, id: i32) -> Result<User, TaskManagerError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<User>, TaskManagerError> {
        self.service
            .list_users(page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<User, TaskManagerError> {
        self.service
            .update_user(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: i32) -> Result<(), TaskManagerError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category, TaskManagerError> {
        self.service.create_category(new).await.map_err(Into::into)
    }

    async fn get_category(&self, id: i32) -> Result<Category, TaskManagerError> {
        self.service.get_category(id).await.map_err(Into::into)
    }

    async fn list_categories(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Category>, TaskManagerError> {
        self.service
            .list_categories(page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> Result<Category, TaskManagerError> {
        self.service
            .update_category(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_category(&self, id: i32) -> Result<(), TaskManagerError> {
        self.service.delete_category(id).await.map_err(Into::into)
    }

    async fn create_project(&self, new: NewProject) -> Result<Project, TaskManagerError> {
        self.service.create_project(new).await.map_err(Into::into)
    }

    async fn get_project(&self, id: i32) -> Result<Project, TaskManagerError> {
        self.service.get_project(id).await.map_err(Into::into)
    }

    async fn list_projects(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Project>, TaskManagerError> {
        self.service
            .list_projects(page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn list_user_projects(
        &self,
        user_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Project>, TaskManagerError> {
        self.service
            .list_user_projects(user_id, page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Project, TaskManagerError> {
        self.service
            .update_project(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_project(&self, id: i32) -> Result<(), TaskManagerError> {
        self.service.delete_project(id).await.map_err(Into::into)
    }

    async fn create_task(&self, new: NewTask) -> Result<Task, TaskManagerError> {
        self.service.create_task(new).await.map_err(Into::into)
    }

    async fn get_task(&self, id: i32) -> Result<Task, TaskManagerError> {
        self.service.get_task(id).await.map_err(Into::into)
    }

    async fn list_tasks(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError> {
        self.service
            .list_tasks(page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn list_user_tasks(
        &self,
        user_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError> {
        self.service
            .list_user_tasks(user_id, page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn list_project_tasks(
        &self,
        project_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError> {
        self.service
            .list_project_tasks(project_id, page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn list_category_tasks(
        &self,
        category_id: i32,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Task>, TaskManagerError> {
        self.service
            .list_category_tasks(category_id, page(skip, limit))
            .await
            .map_err(Into::into)
    }

    async fn update_task(&self, id: i32, patch: TaskPatch) -> Result<Task, TaskManagerError> {
        self.service
            .update_task(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_task(&self, id: i32) -> Result<(), TaskManagerError> {
        self.service.delete_task(id).await.map_err(Into::into)
    }
}
