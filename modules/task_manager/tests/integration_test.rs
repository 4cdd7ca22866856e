//! Integration tests for the task_manager module.
//!
//! Each test runs on a fresh in-memory SQLite database with migrations applied.
//! The domain service and the local client are driven against the same graph
//! the server builds at start-up.

mod common;

use std::time::Duration;

use chrono::NaiveDate;
use modkit::PageQuery;

use task_manager::contract::client::TaskManagerApi;
use task_manager::contract::error::TaskManagerError;
use task_manager::contract::model::{
    NewCategory, NewProject, NewTask, NewUser, ProjectPatch, ProjectStatus, TaskPatch,
    TaskPriority, TaskStatus, UserPatch,
};
use task_manager::domain::error::DomainError;
use task_manager::domain::service::Service;

use common::{create_test_module, create_test_service};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "s3cret-pass".to_string(),
        first_name: None,
        last_name: None,
    }
}

fn new_task(title: &str, user_id: i32) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        project_id: None,
        category_id: None,
        due_date: None,
        priority: None,
        status: None,
        user_id,
    }
}

fn new_project(name: &str, user_id: i32) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: None,
        start_date: None,
        end_date: None,
        status: None,
        user_id,
    }
}

async fn seed_user(svc: &Service, username: &str) -> i32 {
    svc.create_user(new_user(username)).await.unwrap().id
}

#[tokio::test]
async fn create_user_then_get_by_id() {
    let svc = create_test_service().await;

    let created = svc.create_user(new_user("alice")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = svc.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict_and_first_user_survives() {
    let svc = create_test_service().await;
    let first = svc.create_user(new_user("alice")).await.unwrap();

    let mut dup = new_user("alice");
    dup.email = "other@example.com".into();
    let err = svc.create_user(dup).await.unwrap_err();
    assert!(matches!(err, DomainError::UsernameTaken { .. }), "{err:?}");

    assert_eq!(svc.get_user(first.id).await.unwrap(), first);
    let all = svc.list_users(PageQuery::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let svc = create_test_service().await;
    svc.create_user(new_user("alice")).await.unwrap();

    let mut dup = new_user("bob");
    dup.email = "alice@example.com".into();
    let err = svc.create_user(dup).await.unwrap_err();
    assert!(matches!(err, DomainError::EmailTaken { .. }), "{err:?}");
}

#[tokio::test]
async fn invalid_user_fields_are_rejected() {
    let svc = create_test_service().await;

    let mut bad_email = new_user("carol");
    bad_email.email = "not-an-email".into();
    assert!(matches!(
        svc.create_user(bad_email).await,
        Err(DomainError::Validation { .. })
    ));

    let long_name = new_user(&"x".repeat(51));
    assert!(matches!(
        svc.create_user(long_name).await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn update_user_checks_uniqueness_only_on_change() {
    let svc = create_test_service().await;
    let alice = svc.create_user(new_user("alice")).await.unwrap();
    svc.create_user(new_user("bob")).await.unwrap();

    // same username is not a conflict with itself
    let same = svc
        .update_user(
            alice.id,
            UserPatch {
                username: Some("alice".into()),
                first_name: Some("Alice".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.first_name.as_deref(), Some("Alice"));

    let err = svc
        .update_user(
            alice.id,
            UserPatch {
                username: Some("bob".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UsernameTaken { .. }));
}

#[tokio::test]
async fn task_with_missing_owner_is_not_found_and_not_persisted() {
    let svc = create_test_service().await;

    let err = svc.create_task(new_task("orphan", 999)).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { id: 999 }), "{err:?}");

    assert!(svc.list_tasks(PageQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn task_with_missing_project_or_category_is_not_found() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;

    let mut t = new_task("t", user_id);
    t.project_id = Some(42);
    assert!(matches!(
        svc.create_task(t).await,
        Err(DomainError::ProjectNotFound { id: 42 })
    ));

    let mut t = new_task("t", user_id);
    t.category_id = Some(7);
    assert!(matches!(
        svc.create_task(t).await,
        Err(DomainError::CategoryNotFound { id: 7 })
    ));

    assert!(svc.list_tasks(PageQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn task_defaults_apply_on_create() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;

    let task = svc.create_task(new_task("write docs", user_id)).await.unwrap();
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.status, TaskStatus::ToDo);

    let project = svc
        .create_project(new_project("docs", user_id))
        .await
        .unwrap();
    assert_eq!(project.status, ProjectStatus::NotStarted);
}

#[tokio::test]
async fn status_update_keeps_other_fields_and_advances_updated_at() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let project = svc
        .create_project(new_project("site", user_id))
        .await
        .unwrap();

    let mut t = new_task("ship it", user_id);
    t.description = Some("before friday".into());
    t.project_id = Some(project.id);
    t.due_date = NaiveDate::from_ymd_opt(2030, 1, 31);
    t.priority = Some(TaskPriority::High);
    let before = svc.create_task(t).await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let after = svc
        .update_task(
            before.id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(after.status, TaskStatus::Completed);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.project_id, before.project_id);
    assert_eq!(after.due_date, before.due_date);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);

    assert_eq!(svc.get_task(before.id).await.unwrap(), after);
}

#[tokio::test]
async fn task_update_with_dangling_project_is_reference_not_found() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let task = svc.create_task(new_task("t", user_id)).await.unwrap();

    let err = svc
        .update_task(
            task.id,
            TaskPatch {
                project_id: Some(12345),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ReferenceNotFound { .. }), "{err:?}");

    assert_eq!(svc.get_task(task.id).await.unwrap().project_id, None);
}

#[tokio::test]
async fn deleting_missing_project_is_not_found() {
    let svc = create_test_service().await;
    let err = svc.delete_project(404).await.unwrap_err();
    assert!(matches!(err, DomainError::ProjectNotFound { id: 404 }));
}

#[tokio::test]
async fn project_tasks_honor_skip_and_limit() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let project = svc
        .create_project(new_project("p", user_id))
        .await
        .unwrap();
    // a task outside the project must not show up
    svc.create_task(new_task("elsewhere", user_id)).await.unwrap();

    let mut ids = Vec::new();
    for i in 1..=5 {
        let mut t = new_task(&format!("task {i}"), user_id);
        t.project_id = Some(project.id);
        ids.push(svc.create_task(t).await.unwrap().id);
    }

    let page = svc
        .list_project_tasks(
            project.id,
            PageQuery {
                skip: Some(2),
                limit: Some(2),
            },
        )
        .await
        .unwrap();
    let got: Vec<i32> = page.iter().map(|t| t.id).collect();
    assert_eq!(got, vec![ids[2], ids[3]]);
    assert_eq!(page[0].title, "task 3");
    assert_eq!(page[1].title, "task 4");
}

#[tokio::test]
async fn owner_scoped_lists_require_the_owner() {
    let svc = create_test_service().await;
    assert!(matches!(
        svc.list_user_tasks(1, PageQuery::default()).await,
        Err(DomainError::UserNotFound { id: 1 })
    ));
    assert!(matches!(
        svc.list_user_projects(1, PageQuery::default()).await,
        Err(DomainError::UserNotFound { id: 1 })
    ));
    assert!(matches!(
        svc.list_category_tasks(1, PageQuery::default()).await,
        Err(DomainError::CategoryNotFound { id: 1 })
    ));
}

#[tokio::test]
async fn deleting_project_detaches_its_tasks() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let project = svc
        .create_project(new_project("p", user_id))
        .await
        .unwrap();
    let mut t = new_task("t", user_id);
    t.project_id = Some(project.id);
    let task = svc.create_task(t).await.unwrap();

    svc.delete_project(project.id).await.unwrap();

    let task = svc.get_task(task.id).await.unwrap();
    assert_eq!(task.project_id, None);
}

#[tokio::test]
async fn deleting_category_detaches_its_tasks() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let cat = svc
        .create_category(NewCategory {
            name: "Work".into(),
            description: None,
        })
        .await
        .unwrap();
    let mut t = new_task("t", user_id);
    t.category_id = Some(cat.id);
    let task = svc.create_task(t).await.unwrap();

    svc.delete_category(cat.id).await.unwrap();

    assert_eq!(svc.get_task(task.id).await.unwrap().category_id, None);
}

#[tokio::test]
async fn deleting_user_removes_their_projects_and_tasks() {
    let svc = create_test_service().await;
    let alice = seed_user(&svc, "alice").await;
    let bob = seed_user(&svc, "bob").await;
    svc.create_project(new_project("a", alice)).await.unwrap();
    svc.create_task(new_task("a", alice)).await.unwrap();
    let bobs = svc.create_task(new_task("b", bob)).await.unwrap();

    svc.delete_user(alice).await.unwrap();

    assert!(svc.list_projects(PageQuery::default()).await.unwrap().is_empty());
    let left = svc.list_tasks(PageQuery::default()).await.unwrap();
    assert_eq!(left, vec![bobs]);
}

#[tokio::test]
async fn duplicate_category_name_is_a_conflict() {
    let svc = create_test_service().await;
    let new = NewCategory {
        name: "Home".into(),
        description: Some("chores".into()),
    };
    svc.create_category(new.clone()).await.unwrap();
    assert!(matches!(
        svc.create_category(new).await,
        Err(DomainError::CategoryNameTaken { .. })
    ));
}

#[tokio::test]
async fn update_project_only_touches_supplied_fields() {
    let svc = create_test_service().await;
    let user_id = seed_user(&svc, "alice").await;
    let mut p = new_project("p", user_id);
    p.description = Some("keep me".into());
    let project = svc.create_project(p).await.unwrap();

    let updated = svc
        .update_project(
            project.id,
            ProjectPatch {
                status: Some(ProjectStatus::OnHold),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.name, "p");
}

#[tokio::test]
async fn limit_is_clamped_to_configured_maximum() {
    let svc = create_test_service().await;
    let max = svc.config().max_page_limit;
    seed_user(&svc, "alice").await;
    let users = svc
        .list_users(PageQuery {
            skip: None,
            limit: Some(max + 1),
        })
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn local_client_maps_errors_to_contract() {
    let module = create_test_module().await;
    let client = module.client();

    let user = client.create_user(new_user("dave")).await.unwrap();
    assert_eq!(client.get_user(user.id).await.unwrap().username, "dave");

    assert_eq!(
        client.get_user(user.id + 1).await.unwrap_err(),
        TaskManagerError::not_found("User", user.id + 1)
    );
    assert!(matches!(
        client.create_user(new_user("dave")).await.unwrap_err(),
        TaskManagerError::Conflict { .. }
    ));

    let task = client.create_task(new_task("t", user.id)).await.unwrap();
    let tasks = client.list_user_tasks(user.id, None, None).await.unwrap();
    assert_eq!(tasks, vec![task]);
}
