use modkit::Page;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::{map_db_err, not_updated_as_none};
use crate::contract::model::Project;
use crate::domain::repo::{ProjectDraft, ProjectsRepository, StorageResult};
use crate::infra::storage::entity::project::{
    ActiveModel as ProjectAM, Column, Entity as ProjectEntity,
};

pub struct SeaOrmProjectsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmProjectsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ProjectsRepository for SeaOrmProjectsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, draft: ProjectDraft) -> StorageResult<Project> {
        let m = ProjectAM {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
            user_id: Set(draft.user_id),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            status: Set(draft.status.into()),
            created_at: Set(draft.created_at),
            updated_at: Set(draft.updated_at),
        };
        let row = m
            .insert(&self.conn)
            .await
            .map_err(map_db_err("insert project"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Project>> {
        let found = ProjectEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err("find project by id"))?;
        Ok(found.map(Into::into))
    }

    async fn list(&self, page: Page) -> StorageResult<Vec<Project>> {
        let rows = ProjectEntity::find()
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err("list projects"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: i32, page: Page) -> StorageResult<Vec<Project>> {
        let rows = ProjectEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err("list projects by user"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, p: Project) -> StorageResult<Option<Project>> {
        let m = ProjectAM {
            id: Set(p.id),
            name: Set(p.name),
            description: Set(p.description),
            user_id: Set(p.user_id),
            start_date: Set(p.start_date),
            end_date: Set(p.end_date),
            status: Set(p.status.into()),
            created_at: NotSet,
            updated_at: Set(p.updated_at),
        };
        Ok(not_updated_as_none(m.update(&self.conn).await, "update project")?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let res = ProjectEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err("delete project"))?;
        Ok(res.rows_affected > 0)
    }
}
