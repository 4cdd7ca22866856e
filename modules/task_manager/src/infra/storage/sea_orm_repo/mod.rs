//! SeaORM-backed implementations of the repository ports.
//!
//! Each repository is generic over `C: ConnectionTrait`, so it can be built
//! with a `DatabaseConnection` or a transaction.

use db::{constraint_violation, ConstraintViolation};
use sea_orm::DbErr;

use crate::domain::repo::StorageError;

mod categories;
mod projects;
mod tasks;
mod users;

pub use categories::SeaOrmCategoriesRepository;
pub use projects::SeaOrmProjectsRepository;
pub use tasks::SeaOrmTasksRepository;
pub use users::SeaOrmUsersRepository;

/// Classify a SeaORM error; constraint violations keep their own variants so
/// the domain can tell conflicts and dangling references from outages.
fn map_db_err(op: &'static str) -> impl Fn(DbErr) -> StorageError {
    move |err| match constraint_violation(&err) {
        Some(ConstraintViolation::Unique(msg)) => StorageError::UniqueViolation(msg),
        Some(ConstraintViolation::ForeignKey(msg)) => StorageError::ForeignKeyViolation(msg),
        None => StorageError::Other(format!("{op} failed: {err}")),
    }
}

/// `ActiveModel::update` reports a missing row as `RecordNotUpdated`.
fn not_updated_as_none<T>(res: Result<T, DbErr>, op: &'static str) -> Result<Option<T>, StorageError> {
    match res {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(map_db_err(op)(e)),
    }
}
