use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::{PageQuery, Problem, ProblemResponse};
use tracing::{error, info};

use crate::api::rest::dto::{CreateUserReq, ProjectDto, TaskDto, UpdateUserReq, UserDto};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 409, description = "Username or email already registered", body = Problem),
        (status = 422, description = "Invalid body", body = Problem),
    )
)]
pub async fn create_user(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ProblemResponse> {
    info!("Creating user: {:?}", req_body);

    match svc.create_user(req_body.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List users ordered by id
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    params(PageQuery),
    responses((status = 200, description = "Users", body = [UserDto]))
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<UserDto>>, ProblemResponse> {
    info!("Listing users with query: {:?}", query);

    match svc.list_users(query).await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = Problem),
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i32>,
    uri: Uri,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Getting user with id: {}", user_id);

    match svc.get_user(user_id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Partially update a user; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User id")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 404, description = "User not found", body = Problem),
        (status = 409, description = "Username or email already registered", body = Problem),
    )
)]
pub async fn update_user(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i32>,
    Json(req_body): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Updating user {} with: {:?}", user_id, req_body);

    match svc.update_user(user_id, req_body.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a user together with their projects and tasks
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = Problem),
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting user: {}", user_id);

    match svc.delete_user(user_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete user {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/projects/",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User id"), PageQuery),
    responses(
        (status = 200, description = "Projects owned by the user", body = [ProjectDto]),
        (status = 404, description = "User not found", body = Problem),
    )
)]
pub async fn list_user_projects(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i32>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<ProjectDto>>, ProblemResponse> {
    info!("Listing projects of user {}", user_id);

    match svc.list_user_projects(user_id, query).await {
        Ok(projects) => Ok(Json(projects.into_iter().map(ProjectDto::from).collect())),
        Err(e) => {
            error!("Failed to list projects of user {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/tasks/",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User id"), PageQuery),
    responses(
        (status = 200, description = "Tasks owned by the user", body = [TaskDto]),
        (status = 404, description = "User not found", body = Problem),
    )
)]
pub async fn list_user_tasks(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i32>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<TaskDto>>, ProblemResponse> {
    info!("Listing tasks of user {}", user_id);

    match svc.list_user_tasks(user_id, query).await {
        Ok(tasks) => Ok(Json(tasks.into_iter().map(TaskDto::from).collect())),
        Err(e) => {
            error!("Failed to list tasks of user {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
