use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::{PageQuery, Problem, ProblemResponse};
use tracing::{error, info};

use crate::api::rest::dto::{CreateProjectReq, ProjectDto, TaskDto, UpdateProjectReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

#[utoipa::path(
    post,
    path = "/projects/",
    tag = "Projects",
    request_body = CreateProjectReq,
    responses(
        (status = 201, description = "Created project", body = ProjectDto),
        (status = 404, description = "Owner not found", body = Problem),
        (status = 422, description = "Invalid body", body = Problem),
    )
)]
pub async fn create_project(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreateProjectReq>,
) -> Result<(StatusCode, Json<ProjectDto>), ProblemResponse> {
    info!("Creating project: {:?}", req_body);

    match svc.create_project(req_body.into()).await {
        Ok(p) => Ok((StatusCode::CREATED, Json(ProjectDto::from(p)))),
        Err(e) => {
            error!("Failed to create project: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/projects/",
    tag = "Projects",
    params(PageQuery),
    responses((status = 200, description = "Projects", body = [ProjectDto]))
)]
pub async fn list_projects(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<ProjectDto>>, ProblemResponse> {
    info!("Listing projects with query: {:?}", query);

    match svc.list_projects(query).await {
        Ok(items) => Ok(Json(items.into_iter().map(ProjectDto::from).collect())),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = "Projects",
    params(("project_id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = ProjectDto),
        (status = 404, description = "Project not found", body = Problem),
    )
)]
pub async fn get_project(
    Extension(svc): Extension<Arc<Service>>,
    Path(project_id): Path<i32>,
    uri: Uri,
) -> Result<Json<ProjectDto>, ProblemResponse> {
    info!("Getting project with id: {}", project_id);

    match svc.get_project(project_id).await {
        Ok(p) => Ok(Json(ProjectDto::from(p))),
        Err(e) => {
            error!("Failed to get project {}: {}", project_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    put,
    path = "/projects/{project_id}",
    tag = "Projects",
    params(("project_id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectReq,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 404, description = "Project not found", body = Problem),
    )
)]
pub async fn update_project(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(project_id): Path<i32>,
    Json(req_body): Json<UpdateProjectReq>,
) -> Result<Json<ProjectDto>, ProblemResponse> {
    info!("Updating project {} with: {:?}", project_id, req_body);

    match svc.update_project(project_id, req_body.into()).await {
        Ok(p) => Ok(Json(ProjectDto::from(p))),
        Err(e) => {
            error!("Failed to update project {}: {}", project_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a project; its tasks stay, detached from any project
#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    tag = "Projects",
    params(("project_id" = i32, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = Problem),
    )
)]
pub async fn delete_project(
    Extension(svc): Extension<Arc<Service>>,
    Path(project_id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting project: {}", project_id);

    match svc.delete_project(project_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete project {}: {}", project_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/tasks/",
    tag = "Projects",
    params(("project_id" = i32, Path, description = "Project id"), PageQuery),
    responses(
        (status = 200, description = "Tasks of the project", body = [TaskDto]),
        (status = 404, description = "Project not found", body = Problem),
    )
)]
pub async fn list_project_tasks(
    Extension(svc): Extension<Arc<Service>>,
    Path(project_id): Path<i32>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<TaskDto>>, ProblemResponse> {
    info!("Listing tasks of project {}", project_id);

    match svc.list_project_tasks(project_id, query).await {
        Ok(tasks) => Ok(Json(tasks.into_iter().map(TaskDto::from).collect())),
        Err(e) => {
            error!("Failed to list tasks of project {}: {}", project_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
