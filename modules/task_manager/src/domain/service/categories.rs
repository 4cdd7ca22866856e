use chrono::Utc;
use modkit::PageQuery;
use tracing::{debug, info, instrument};

use super::{validate_required, Service, CATEGORY_NAME_MAX_LEN};
use crate::contract::model::{Category, CategoryPatch, NewCategory};
use crate::domain::error::DomainError;
use crate::domain::repo::CategoryDraft;

impl Service {
    #[instrument(
        name = "task_manager.service.create_category",
        skip(self, new),
        fields(name = %new.name)
    )]
    pub async fn create_category(&self, new: NewCategory) -> Result<Category, DomainError> {
        info!("Creating new category");

        validate_required("name", &new.name, CATEGORY_NAME_MAX_LEN)?;

        if self.categories.find_by_name(&new.name).await?.is_some() {
            return Err(DomainError::category_name_taken(new.name));
        }

        let now = Utc::now();
        let category = self
            .categories
            .insert(CategoryDraft {
                name: new.name,
                description: new.description,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(category_id = category.id, "Successfully created category");
        Ok(category)
    }

    #[instrument(
        name = "task_manager.service.get_category",
        skip(self),
        fields(category_id = %id)
    )]
    pub async fn get_category(&self, id: i32) -> Result<Category, DomainError> {
        debug!("Getting category by id");
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))
    }

    #[instrument(name = "task_manager.service.list_categories", skip(self))]
    pub async fn list_categories(&self, query: PageQuery) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.list(self.page(query)).await?)
    }

    #[instrument(
        name = "task_manager.service.update_category",
        skip(self),
        fields(category_id = %id)
    )]
    pub async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> Result<Category, DomainError> {
        info!("Updating category");

        if let Some(ref name) = patch.name {
            validate_required("name", name, CATEGORY_NAME_MAX_LEN)?;
        }

        let mut current = self.get_category(id).await?;

        if let Some(ref name) = patch.name {
            if name != &current.name && self.categories.find_by_name(name).await?.is_some() {
                return Err(DomainError::category_name_taken(name.clone()));
            }
        }

        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(description) = patch.description {
            current.description = Some(description);
        }
        current.updated_at = Utc::now();

        self.categories
            .update(current)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))
    }

    /// Tasks filed under the category keep existing with no category.
    #[instrument(
        name = "task_manager.service.delete_category",
        skip(self),
        fields(category_id = %id)
    )]
    pub async fn delete_category(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting category");

        if !self.categories.delete(id).await? {
            return Err(DomainError::category_not_found(id));
        }
        Ok(())
    }
}
