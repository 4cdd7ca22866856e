use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::users::list_user_projects,
        handlers::users::list_user_tasks,
        handlers::categories::create_category,
        handlers::categories::list_categories,
        handlers::categories::get_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,
        handlers::categories::list_category_tasks,
        handlers::projects::create_project,
        handlers::projects::list_projects,
        handlers::projects::get_project,
        handlers::projects::update_project,
        handlers::projects::delete_project,
        handlers::projects::list_project_tasks,
        handlers::tasks::create_task,
        handlers::tasks::list_tasks,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,
    ),
    components(schemas(
        dto::UserDto,
        dto::CreateUserReq,
        dto::UpdateUserReq,
        dto::CategoryDto,
        dto::CreateCategoryReq,
        dto::UpdateCategoryReq,
        dto::ProjectDto,
        dto::CreateProjectReq,
        dto::UpdateProjectReq,
        dto::TaskDto,
        dto::CreateTaskReq,
        dto::UpdateTaskReq,
        dto::ProjectStatusDto,
        dto::TaskPriorityDto,
        dto::TaskStatusDto,
        modkit::Problem,
        modkit::ValidationError,
    )),
    tags(
        (name = "Users", description = "User accounts"),
        (name = "Categories", description = "Task categories"),
        (name = "Projects", description = "Projects owned by users"),
        (name = "Tasks", description = "Tasks with optional project and category"),
    )
)]
pub struct ApiDoc;
