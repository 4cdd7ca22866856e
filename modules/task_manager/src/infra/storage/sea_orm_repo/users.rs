use modkit::Page;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::{map_db_err, not_updated_as_none};
use crate::contract::model::User;
use crate::domain::repo::{StorageResult, UserDraft, UsersRepository};
use crate::infra::storage::entity::user::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, draft: UserDraft) -> StorageResult<User> {
        let m = UserAM {
            id: NotSet,
            username: Set(draft.username),
            email: Set(draft.email),
            password_hash: Set(draft.password_hash),
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            created_at: Set(draft.created_at),
            updated_at: Set(draft.updated_at),
        };
        let row = m.insert(&self.conn).await.map_err(map_db_err("insert user"))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err("find user by id"))?;
        Ok(found.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let found = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.conn)
            .await
            .map_err(map_db_err("find user by username"))?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .map_err(map_db_err("find user by email"))?;
        Ok(found.map(Into::into))
    }

    async fn list(&self, page: Page) -> StorageResult<Vec<User>> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.conn)
            .await
            .map_err(map_db_err("list users"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, u: User) -> StorageResult<Option<User>> {
        let m = UserAM {
            id: Set(u.id),
            username: Set(u.username),
            email: Set(u.email),
            password_hash: NotSet,
            first_name: Set(u.first_name),
            last_name: Set(u.last_name),
            created_at: NotSet,
            updated_at: Set(u.updated_at),
        };
        Ok(not_updated_as_none(m.update(&self.conn).await, "update user")?.map(Into::into))
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(map_db_err("delete user"))?;
        Ok(res.rows_affected > 0)
    }
}
