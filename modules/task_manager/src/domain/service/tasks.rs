use chrono::Utc;
use modkit::PageQuery;
use tracing::{debug, info, instrument};

use super::{validate_required, Service, TASK_TITLE_MAX_LEN};
use crate::contract::model::{NewTask, Task, TaskPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::TaskDraft;

impl Service {
    #[instrument(
        name = "task_manager.service.create_task",
        skip(self, new),
        fields(user_id = %new.user_id, project_id = ?new.project_id, category_id = ?new.category_id)
    )]
    pub async fn create_task(&self, new: NewTask) -> Result<Task, DomainError> {
        info!("Creating new task");

        validate_required("title", &new.title, TASK_TITLE_MAX_LEN)?;

        self.ensure_user(new.user_id).await?;
        if let Some(project_id) = new.project_id {
            self.ensure_project(project_id).await?;
        }
        if let Some(category_id) = new.category_id {
            self.ensure_category(category_id).await?;
        }

        let now = Utc::now();
        let task = self
            .tasks
            .insert(TaskDraft {
                title: new.title,
                description: new.description,
                user_id: new.user_id,
                project_id: new.project_id,
                category_id: new.category_id,
                due_date: new.due_date,
                priority: new.priority.unwrap_or_default(),
                status: new.status.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(task_id = task.id, "Successfully created task");
        Ok(task)
    }

    #[instrument(name = "task_manager.service.get_task", skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: i32) -> Result<Task, DomainError> {
        debug!("Getting task by id");
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::task_not_found(id))
    }

    #[instrument(name = "task_manager.service.list_tasks", skip(self))]
    pub async fn list_tasks(&self, query: PageQuery) -> Result<Vec<Task>, DomainError> {
        Ok(self.tasks.list(self.page(query)).await?)
    }

    #[instrument(
        name = "task_manager.service.list_user_tasks",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn list_user_tasks(
        &self,
        user_id: i32,
        query: PageQuery,
    ) -> Result<Vec<Task>, DomainError> {
        self.ensure_user(user_id).await?;
        Ok(self.tasks.list_by_user(user_id, self.page(query)).await?)
    }

    #[instrument(
        name = "task_manager.service.list_project_tasks",
        skip(self),
        fields(project_id = %project_id)
    )]
    pub async fn list_project_tasks(
        &self,
        project_id: i32,
        query: PageQuery,
    ) -> Result<Vec<Task>, DomainError> {
        self.ensure_project(project_id).await?;
        Ok(self
            .tasks
            .list_by_project(project_id, self.page(query))
            .await?)
    }

    #[instrument(
        name = "task_manager.service.list_category_tasks",
        skip(self),
        fields(category_id = %category_id)
    )]
    pub async fn list_category_tasks(
        &self,
        category_id: i32,
        query: PageQuery,
    ) -> Result<Vec<Task>, DomainError> {
        self.ensure_category(category_id).await?;
        Ok(self
            .tasks
            .list_by_category(category_id, self.page(query))
            .await?)
    }

    /// New `project_id`/`category_id` values are not pre-checked; a dangling
    /// reference is rejected by the store's foreign keys as `ReferenceNotFound`.
    #[instrument(name = "task_manager.service.update_task", skip(self), fields(task_id = %id))]
    pub async fn update_task(&self, id: i32, patch: TaskPatch) -> Result<Task, DomainError> {
        info!("Updating task");

        if let Some(ref title) = patch.title {
            validate_required("title", title, TASK_TITLE_MAX_LEN)?;
        }

        let mut current = self.get_task(id).await?;

        if let Some(title) = patch.title {
            current.title = title;
        }
        if let Some(description) = patch.description {
            current.description = Some(description);
        }
        if let Some(project_id) = patch.project_id {
            current.project_id = Some(project_id);
        }
        if let Some(category_id) = patch.category_id {
            current.category_id = Some(category_id);
        }
        if let Some(due_date) = patch.due_date {
            current.due_date = Some(due_date);
        }
        if let Some(priority) = patch.priority {
            current.priority = priority;
        }
        if let Some(status) = patch.status {
            current.status = status;
        }
        current.updated_at = Utc::now();

        self.tasks
            .update(current)
            .await?
            .ok_or_else(|| DomainError::task_not_found(id))
    }

    #[instrument(name = "task_manager.service.delete_task", skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting task");

        if !self.tasks.delete(id).await? {
            return Err(DomainError::task_not_found(id));
        }
        Ok(())
    }
}
