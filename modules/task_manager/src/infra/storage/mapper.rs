//! Conversions between SeaORM models and contract models.

use crate::contract::model::{Category, Project, ProjectStatus, Task, TaskPriority, TaskStatus, User};
use crate::infra::storage::entity::project::DbProjectStatus;
use crate::infra::storage::entity::task::{DbTaskPriority, DbTaskStatus};
use crate::infra::storage::entity::{category, project, task, user};

// The password hash is dropped here and never reaches the contract model.
impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<category::Model> for Category {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            user_id: m.user_id,
            start_date: m.start_date,
            end_date: m.end_date,
            status: m.status.into(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<task::Model> for Task {
    fn from(m: task::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            user_id: m.user_id,
            project_id: m.project_id,
            category_id: m.category_id,
            due_date: m.due_date,
            priority: m.priority.into(),
            status: m.status.into(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

macro_rules! mirror_enum {
    ($db:ident <=> $model:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$db> for $model {
            fn from(v: $db) -> Self {
                match v {
                    $($db::$variant => $model::$variant),+
                }
            }
        }

        impl From<$model> for $db {
            fn from(v: $model) -> Self {
                match v {
                    $($model::$variant => $db::$variant),+
                }
            }
        }
    };
}

mirror_enum!(DbProjectStatus <=> ProjectStatus { NotStarted, InProgress, Completed, OnHold });
mirror_enum!(DbTaskPriority <=> TaskPriority { Low, Medium, High, Urgent });
mirror_enum!(DbTaskStatus <=> TaskStatus { ToDo, InProgress, Completed, Deferred });

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn stored_enum_strings_match_display_strings() {
        for s in ProjectStatus::ALL {
            assert_eq!(DbProjectStatus::from(*s).to_value(), s.as_str());
        }
        for p in TaskPriority::ALL {
            assert_eq!(DbTaskPriority::from(*p).to_value(), p.as_str());
        }
        for s in TaskStatus::ALL {
            assert_eq!(DbTaskStatus::from(*s).to_value(), s.as_str());
        }
    }
}
