use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{
    Category, CategoryPatch, NewCategory, NewProject, NewTask, NewUser, Project,
    ProjectPatch, ProjectStatus, Task, TaskPatch, TaskPriority, TaskStatus, User, UserPatch,
};

// --- enums: serialized as their display strings ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = ProjectStatus)]
pub enum ProjectStatusDto {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = TaskPriority)]
pub enum TaskPriorityDto {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = TaskStatus)]
pub enum TaskStatusDto {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Deferred")]
    Deferred,
}

macro_rules! mirror_enum {
    ($dto:ident <=> $model:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$model> for $dto {
            fn from(v: $model) -> Self {
                match v {
                    $($model::$variant => $dto::$variant),+
                }
            }
        }

        impl From<$dto> for $model {
            fn from(v: $dto) -> Self {
                match v {
                    $($dto::$variant => $model::$variant),+
                }
            }
        }
    };
}

mirror_enum!(ProjectStatusDto <=> ProjectStatus { NotStarted, InProgress, Completed, OnHold });
mirror_enum!(TaskPriorityDto <=> TaskPriority { Low, Medium, High, Urgent });
mirror_enum!(TaskStatusDto <=> TaskStatus { ToDo, InProgress, Completed, Deferred });

// --- users ---

/// REST DTO for user representation; the password hash is never part of it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = User)]
pub struct UserDto {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UserCreate)]
pub struct CreateUserReq {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl std::fmt::Debug for CreateUserReq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserReq")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[schema(as = UserUpdate)]
pub struct UpdateUserReq {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

// --- categories ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Category)]
pub struct CategoryDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CategoryCreate)]
pub struct CreateCategoryReq {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[schema(as = CategoryUpdate)]
pub struct UpdateCategoryReq {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CreateCategoryReq> for NewCategory {
    fn from(req: CreateCategoryReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

impl From<UpdateCategoryReq> for CategoryPatch {
    fn from(req: UpdateCategoryReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

// --- projects ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Project)]
pub struct ProjectDto {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatusDto,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ProjectCreate)]
pub struct CreateProjectReq {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Defaults to `Not Started`.
    #[serde(default)]
    pub status: Option<ProjectStatusDto>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[schema(as = ProjectUpdate)]
pub struct UpdateProjectReq {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatusDto>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            project_id: p.id,
            name: p.name,
            description: p.description,
            start_date: p.start_date,
            end_date: p.end_date,
            status: p.status.into(),
            user_id: p.user_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreateProjectReq> for NewProject {
    fn from(req: CreateProjectReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status.map(Into::into),
            user_id: req.user_id,
        }
    }
}

impl From<UpdateProjectReq> for ProjectPatch {
    fn from(req: UpdateProjectReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status.map(Into::into),
        }
    }
}

// --- tasks ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Task)]
pub struct TaskDto {
    pub task_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub project_id: Option<i32>,
    pub category_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriorityDto,
    pub status: TaskStatusDto,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = TaskCreate)]
pub struct CreateTaskReq {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Defaults to `Medium`.
    #[serde(default)]
    pub priority: Option<TaskPriorityDto>,
    /// Defaults to `To Do`.
    #[serde(default)]
    pub status: Option<TaskStatusDto>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[schema(as = TaskUpdate)]
pub struct UpdateTaskReq {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<i32>,
    pub category_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<TaskPriorityDto>,
    pub status: Option<TaskStatusDto>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            task_id: t.id,
            title: t.title,
            description: t.description,
            project_id: t.project_id,
            category_id: t.category_id,
            due_date: t.due_date,
            priority: t.priority.into(),
            status: t.status.into(),
            user_id: t.user_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

impl From<CreateTaskReq> for NewTask {
    fn from(req: CreateTaskReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            project_id: req.project_id,
            category_id: req.category_id,
            due_date: req.due_date,
            priority: req.priority.map(Into::into),
            status: req.status.map(Into::into),
            user_id: req.user_id,
        }
    }
}

impl From<UpdateTaskReq> for TaskPatch {
    fn from(req: UpdateTaskReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            project_id: req.project_id,
            category_id: req.category_id,
            due_date: req.due_date,
            priority: req.priority.map(Into::into),
            status: req.status.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn enum_strings_round_trip_over_json() {
        for s in ProjectStatus::ALL {
            let v = serde_json::to_value(ProjectStatusDto::from(*s)).unwrap();
            assert_eq!(v, json!(s.as_str()));
            let back: ProjectStatusDto = serde_json::from_value(v).unwrap();
            assert_eq!(ProjectStatus::from(back), *s);
        }
        for p in TaskPriority::ALL {
            let v = serde_json::to_value(TaskPriorityDto::from(*p)).unwrap();
            assert_eq!(v, json!(p.as_str()));
        }
        for s in TaskStatus::ALL {
            let v = serde_json::to_value(TaskStatusDto::from(*s)).unwrap();
            assert_eq!(v, json!(s.as_str()));
            let back: TaskStatusDto = serde_json::from_value(v).unwrap();
            assert_eq!(TaskStatus::from(back), *s);
        }
    }

    #[test]
    fn unknown_enum_string_is_rejected() {
        let res: Result<TaskStatusDto, _> = serde_json::from_value(json!("Done"));
        assert!(res.is_err());
    }

    #[test]
    fn user_dto_has_no_password_field() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let dto = UserDto::from(User {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
            first_name: None,
            last_name: Some("Smith".into()),
            created_at: at,
            updated_at: at,
        });
        let v = serde_json::to_value(dto).unwrap();
        assert_eq!(v["user_id"], 7);
        assert!(v.get("password").is_none());
        assert!(v.get("password_hash").is_none());
    }

    #[test]
    fn create_task_defaults_are_left_to_the_service() {
        let req: CreateTaskReq =
            serde_json::from_value(json!({ "title": "Write docs", "user_id": 1 })).unwrap();
        let new: NewTask = req.into();
        assert_eq!(new.priority, None);
        assert_eq!(new.status, None);
        assert_eq!(new.project_id, None);
    }

    #[test]
    fn update_with_null_field_means_unchanged() {
        let req: UpdateTaskReq =
            serde_json::from_value(json!({ "status": "Completed", "title": null })).unwrap();
        let patch: TaskPatch = req.into();
        assert_eq!(patch.status, Some(TaskStatus::Completed));
        assert_eq!(patch.title, None);
    }

    #[test]
    fn create_user_debug_hides_password() {
        let req = CreateUserReq {
            username: "bob".into(),
            email: "bob@example.com".into(),
            password: "hunter2".into(),
            first_name: None,
            last_name: None,
        };
        assert!(!format!("{req:?}").contains("hunter2"));
    }
}
