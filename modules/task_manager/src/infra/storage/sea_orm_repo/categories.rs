use modkit::Page;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::{map_db_err, not_updated_as_none};
use crate::contract::model::Category;
use crate::domain::repo::{CategoriesRepository, CategoryDraft, StorageResult};
use crate::infra::storage::entity::category::{
    ActiveModel as CategoryAM, Column, Entity as CategoryEntity,
};

pub struct SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> CategoriesRepository for SeaOrmCategoriesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, draft: CategoryDraft) -> StorageResult<Category> {
        let m = CategoryAM {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
            created_at: Set(draft.created_at),
            updated_at: Set(draft.updated_at),
        };
        let row = m
            .insert(&self.conn)
            .await
            .map_err(map_db_err("insert category"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<Category>> {
        let found = CategoryEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err("find category by id"))?;
        Ok(found.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Category>> {
        let found = CategoryEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.conn)
            .await
            .map_err(map_db_err("find category by name"))?;
        Ok(found.map(Into::into))
    }

    async fn list(&self, page: Page) -> StorageResult<Vec<Category>> {
        let rows = CategoryEntity::find()
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err("list categories"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, c: Category) -> StorageResult<Option<Category>> {
        let m = CategoryAM {
            id: Set(c.id),
            name: Set(c.name),
            description: Set(c.description),
            created_at: NotSet,
            updated_at: Set(c.updated_at),
        };
        Ok(not_updated_as_none(m.update(&self.conn).await, "update category")?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let res = CategoryEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err("delete category"))?;
        Ok(res.rows_affected > 0)
    }
}
