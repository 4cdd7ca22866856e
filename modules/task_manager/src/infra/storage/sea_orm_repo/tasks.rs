use modkit::Page;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use super::{map_db_err, not_updated_as_none};
use crate::contract::model::Task;
use crate::domain::repo::{StorageResult, TaskDraft, TasksRepository};
use crate::infra::storage::entity::task::{ActiveModel as TaskAM, Column, Entity as TaskEntity};

pub struct SeaOrmTasksRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmTasksRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    async fn fetch_page(
        &self,
        select: Select<TaskEntity>,
        page: Page,
        op: &'static str,
    ) -> StorageResult<Vec<Task>> {
        let rows = select
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err(op))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait::async_trait]
impl<C> TasksRepository for SeaOrmTasksRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, draft: TaskDraft) -> StorageResult<Task> {
        let m = TaskAM {
            id: NotSet,
            title: Set(draft.title),
            description: Set(draft.description),
            user_id: Set(draft.user_id),
            project_id: Set(draft.project_id),
            category_id: Set(draft.category_id),
            due_date: Set(draft.due_date),
            priority: Set(draft.priority.into()),
            status: Set(draft.status.into()),
            created_at: Set(draft.created_at),
            updated_at: Set(draft.updated_at),
        };
        let row = m.insert(&self.conn).await.map_err(map_db_err("insert task"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Task>> {
        let found = TaskEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err("find task by id"))?;
        Ok(found.map(Into::into))
    }

    async fn list(&self, page: Page) -> StorageResult<Vec<Task>> {
        self.fetch_page(TaskEntity::find(), page, "list tasks").await
    }

    async fn list_by_user(&self, user_id: i32, page: Page) -> StorageResult<Vec<Task>> {
        let select = TaskEntity::find().filter(Column::UserId.eq(user_id));
        self.fetch_page(select, page, "list tasks by user").await
    }

    async fn list_by_project(&self, project_id: i32, page: Page) -> StorageResult<Vec<Task>> {
        let select = TaskEntity::find().filter(Column::ProjectId.eq(project_id));
        self.fetch_page(select, page, "list tasks by project").await
    }

    async fn list_by_category(
        &self,
        category_id: i32,
        page: Page,
    ) -> StorageResult<Vec<Task>> {
        let select = TaskEntity::find().filter(Column::CategoryId.eq(category_id));
        self.fetch_page(select, page, "list tasks by category").await
    }

    async fn update(&self, t: Task) -> StorageResult<Option<Task>> {
        let m = TaskAM {
            id: Set(t.id),
            title: Set(t.title),
            description: Set(t.description),
            user_id: Set(t.user_id),
            project_id: Set(t.project_id),
            category_id: Set(t.category_id),
            due_date: Set(t.due_date),
            priority: Set(t.priority.into()),
            status: Set(t.status.into()),
            created_at: NotSet,
            updated_at: Set(t.updated_at),
        };
        Ok(not_updated_as_none(m.update(&self.conn).await, "update task")?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let res = TaskEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err("delete task"))?;
        Ok(res.rows_affected > 0)
    }
}
