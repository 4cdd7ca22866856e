use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::{PageQuery, Problem, ProblemResponse};
use tracing::{error, info};

use crate::api::rest::dto::{CreateTaskReq, TaskDto, UpdateTaskReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Create a task; owner, project and category must exist
#[utoipa::path(
    post,
    path = "/tasks/",
    tag = "Tasks",
    request_body = CreateTaskReq,
    responses(
        (status = 201, description = "Created task", body = TaskDto),
        (status = 404, description = "Referenced user, project or category not found", body = Problem),
        (status = 422, description = "Invalid body", body = Problem),
    )
)]
pub async fn create_task(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreateTaskReq>,
) -> Result<(StatusCode, Json<TaskDto>), ProblemResponse> {
    info!("Creating task: {:?}", req_body);

    match svc.create_task(req_body.into()).await {
        Ok(t) => Ok((StatusCode::CREATED, Json(TaskDto::from(t)))),
        Err(e) => {
            error!("Failed to create task: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/tasks/",
    tag = "Tasks",
    params(PageQuery),
    responses((status = 200, description = "Tasks", body = [TaskDto]))
)]
pub async fn list_tasks(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<TaskDto>>, ProblemResponse> {
    info!("Listing tasks with query: {:?}", query);

    match svc.list_tasks(query).await {
        Ok(items) => Ok(Json(items.into_iter().map(TaskDto::from).collect())),
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/tasks/{task_id}",
    tag = "Tasks",
    params(("task_id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = TaskDto),
        (status = 404, description = "Task not found", body = Problem),
    )
)]
pub async fn get_task(
    Extension(svc): Extension<Arc<Service>>,
    Path(task_id): Path<i32>,
    uri: Uri,
) -> Result<Json<TaskDto>, ProblemResponse> {
    info!("Getting task with id: {}", task_id);

    match svc.get_task(task_id).await {
        Ok(t) => Ok(Json(TaskDto::from(t))),
        Err(e) => {
            error!("Failed to get task {}: {}", task_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    put,
    path = "/tasks/{task_id}",
    tag = "Tasks",
    params(("task_id" = i32, Path, description = "Task id")),
    request_body = UpdateTaskReq,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 404, description = "Task or referenced record not found", body = Problem),
    )
)]
pub async fn update_task(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(task_id): Path<i32>,
    Json(req_body): Json<UpdateTaskReq>,
) -> Result<Json<TaskDto>, ProblemResponse> {
    info!("Updating task {} with: {:?}", task_id, req_body);

    match svc.update_task(task_id, req_body.into()).await {
        Ok(t) => Ok(Json(TaskDto::from(t))),
        Err(e) => {
            error!("Failed to update task {}: {}", task_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    tag = "Tasks",
    params(("task_id" = i32, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found", body = Problem),
    )
)]
pub async fn delete_task(
    Extension(svc): Extension<Arc<Service>>,
    Path(task_id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting task: {}", task_id);

    match svc.delete_task(task_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete task {}: {}", task_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
