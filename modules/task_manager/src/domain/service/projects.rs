use chrono::Utc;
use modkit::PageQuery;
use tracing::{debug, info, instrument};

use super::{validate_required, Service, PROJECT_NAME_MAX_LEN};
use crate::contract::model::{NewProject, Project, ProjectPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::ProjectDraft;

impl Service {
    #[instrument(
        name = "task_manager.service.create_project",
        skip(self, new),
        fields(user_id = %new.user_id, name = %new.name)
    )]
    pub async fn create_project(&self, new: NewProject) -> Result<Project, DomainError> {
        info!("Creating new project");

        validate_required("name", &new.name, PROJECT_NAME_MAX_LEN)?;
        self.ensure_user(new.user_id).await?;

        let now = Utc::now();
        let project = self
            .projects
            .insert(ProjectDraft {
                name: new.name,
                description: new.description,
                user_id: new.user_id,
                start_date: new.start_date,
                end_date: new.end_date,
                status: new.status.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(project_id = project.id, "Successfully created project");
        Ok(project)
    }

    #[instrument(
        name = "task_manager.service.get_project",
        skip(self),
        fields(project_id = %id)
    )]
    pub async fn get_project(&self, id: i32) -> Result<Project, DomainError> {
        debug!("Getting project by id");
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::project_not_found(id))
    }

    #[instrument(name = "task_manager.service.list_projects", skip(self))]
    pub async fn list_projects(&self, query: PageQuery) -> Result<Vec<Project>, DomainError> {
        Ok(self.projects.list(self.page(query)).await?)
    }

    #[instrument(
        name = "task_manager.service.list_user_projects",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn list_user_projects(
        &self,
        user_id: i32,
        query: PageQuery,
    ) -> Result<Vec<Project>, DomainError> {
        self.ensure_user(user_id).await?;
        Ok(self
            .projects
            .list_by_user(user_id, self.page(query))
            .await?)
    }

    #[instrument(
        name = "task_manager.service.update_project",
        skip(self),
        fields(project_id = %id)
    )]
    pub async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Project, DomainError> {
        info!("Updating project");

        if let Some(ref name) = patch.name {
            validate_required("name", name, PROJECT_NAME_MAX_LEN)?;
        }

        let mut current = self.get_project(id).await?;

        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(description) = patch.description {
            current.description = Some(description);
        }
        if let Some(start_date) = patch.start_date {
            current.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            current.end_date = Some(end_date);
        }
        if let Some(status) = patch.status {
            current.status = status;
        }
        current.updated_at = Utc::now();

        self.projects
            .update(current)
            .await?
            .ok_or_else(|| DomainError::project_not_found(id))
    }

    /// Tasks of the project survive with `project_id` cleared.
    #[instrument(
        name = "task_manager.service.delete_project",
        skip(self),
        fields(project_id = %id)
    )]
    pub async fn delete_project(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting project");

        if !self.projects.delete(id).await? {
            return Err(DomainError::project_not_found(id));
        }
        Ok(())
    }
}
