use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers::{categories, projects, tasks, users};
use crate::domain::service::Service;

/// Mount the module's REST routes on `router`.
///
/// Collection paths answer both with and without the trailing slash.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let users_collection = get(users::list_users).post(users::create_user);
    let user_projects = get(users::list_user_projects);
    let user_tasks = get(users::list_user_tasks);
    let categories_collection = get(categories::list_categories).post(categories::create_category);
    let category_tasks = get(categories::list_category_tasks);
    let projects_collection = get(projects::list_projects).post(projects::create_project);
    let project_tasks = get(projects::list_project_tasks);
    let tasks_collection = get(tasks::list_tasks).post(tasks::create_task);

    router
        // users
        .route("/users", users_collection.clone())
        .route("/users/", users_collection)
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{user_id}/projects", user_projects.clone())
        .route("/users/{user_id}/projects/", user_projects)
        .route("/users/{user_id}/tasks", user_tasks.clone())
        .route("/users/{user_id}/tasks/", user_tasks)
        // categories
        .route("/categories", categories_collection.clone())
        .route("/categories/", categories_collection)
        .route(
            "/categories/{category_id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/categories/{category_id}/tasks", category_tasks.clone())
        .route("/categories/{category_id}/tasks/", category_tasks)
        // projects
        .route("/projects", projects_collection.clone())
        .route("/projects/", projects_collection)
        .route(
            "/projects/{project_id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/projects/{project_id}/tasks", project_tasks.clone())
        .route("/projects/{project_id}/tasks/", project_tasks)
        // tasks
        .route("/tasks", tasks_collection.clone())
        .route("/tasks/", tasks_collection)
        .route(
            "/tasks/{task_id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .layer(Extension(service))
}
