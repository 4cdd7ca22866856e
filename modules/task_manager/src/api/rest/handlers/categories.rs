use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::{PageQuery, Problem, ProblemResponse};
use tracing::{error, info};

use crate::api::rest::dto::{CategoryDto, CreateCategoryReq, TaskDto, UpdateCategoryReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

#[utoipa::path(
    post,
    path = "/categories/",
    tag = "Categories",
    request_body = CreateCategoryReq,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 409, description = "Category name already exists", body = Problem),
        (status = 422, description = "Invalid body", body = Problem),
    )
)]
pub async fn create_category(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreateCategoryReq>,
) -> Result<(StatusCode, Json<CategoryDto>), ProblemResponse> {
    info!("Creating category: {:?}", req_body);

    match svc.create_category(req_body.into()).await {
        Ok(c) => Ok((StatusCode::CREATED, Json(CategoryDto::from(c)))),
        Err(e) => {
            error!("Failed to create category: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/categories/",
    tag = "Categories",
    params(PageQuery),
    responses((status = 200, description = "Categories", body = [CategoryDto]))
)]
pub async fn list_categories(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<CategoryDto>>, ProblemResponse> {
    info!("Listing categories with query: {:?}", query);

    match svc.list_categories(query).await {
        Ok(items) => Ok(Json(items.into_iter().map(CategoryDto::from).collect())),
        Err(e) => {
            error!("Failed to list categories: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Category not found", body = Problem),
    )
)]
pub async fn get_category(
    Extension(svc): Extension<Arc<Service>>,
    Path(category_id): Path<i32>,
    uri: Uri,
) -> Result<Json<CategoryDto>, ProblemResponse> {
    info!("Getting category with id: {}", category_id);

    match svc.get_category(category_id).await {
        Ok(c) => Ok(Json(CategoryDto::from(c))),
        Err(e) => {
            error!("Failed to get category {}: {}", category_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryReq,
    responses(
        (status = 200, description = "Updated category", body = CategoryDto),
        (status = 404, description = "Category not found", body = Problem),
        (status = 409, description = "Category name already exists", body = Problem),
    )
)]
pub async fn update_category(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(category_id): Path<i32>,
    Json(req_body): Json<UpdateCategoryReq>,
) -> Result<Json<CategoryDto>, ProblemResponse> {
    info!("Updating category {} with: {:?}", category_id, req_body);

    match svc.update_category(category_id, req_body.into()).await {
        Ok(c) => Ok(Json(CategoryDto::from(c))),
        Err(e) => {
            error!("Failed to update category {}: {}", category_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a category; its tasks stay, uncategorized
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = Problem),
    )
)]
pub async fn delete_category(
    Extension(svc): Extension<Arc<Service>>,
    Path(category_id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting category: {}", category_id);

    match svc.delete_category(category_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete category {}: {}", category_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/tasks/",
    tag = "Categories",
    params(("category_id" = i32, Path, description = "Category id"), PageQuery),
    responses(
        (status = 200, description = "Tasks in the category", body = [TaskDto]),
        (status = 404, description = "Category not found", body = Problem),
    )
)]
pub async fn list_category_tasks(
    Extension(svc): Extension<Arc<Service>>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Result<Json<Vec<TaskDto>>, ProblemResponse> {
    info!("Listing tasks of category {}", category_id);

    match svc.list_category_tasks(category_id, query).await {
        Ok(tasks) => Ok(Json(tasks.into_iter().map(TaskDto::from).collect())),
        Err(e) => {
            error!("Failed to list tasks of category {}: {}", category_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
