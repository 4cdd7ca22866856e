use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::{openapi::ApiDoc, routes};
use crate::config::TaskManagerConfig;
use crate::contract::client::TaskManagerApi;
use crate::domain::service::{Repositories, Service, ServiceConfig};
use crate::gateways::local::TaskManagerLocalClient;
use crate::infra::security::Argon2Hasher;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::{
    SeaOrmCategoriesRepository, SeaOrmProjectsRepository, SeaOrmTasksRepository,
    SeaOrmUsersRepository,
};

/// The task manager module: owns the domain service and exposes it over
/// REST and as an in-process [`TaskManagerApi`] client.
#[derive(Clone)]
pub struct TaskManager {
    service: Arc<Service>,
}

impl TaskManager {
    /// Bring the schema up to date.
    pub async fn migrate(db: &db::DbHandle) -> anyhow::Result<()> {
        info!("Running task_manager database migrations");

        let conn = db.sea();
        Migrator::up(&conn, None).await?;

        info!("Task manager database migrations completed successfully");
        Ok(())
    }

    /// Wire repositories, the password hasher and the service on `conn`.
    pub fn init(conn: DatabaseConnection, cfg: TaskManagerConfig) -> Self {
        info!("Initializing task_manager module");
        debug!(
            "Loaded task_manager config: default_page_limit={}, max_page_limit={}",
            cfg.default_page_limit, cfg.max_page_limit
        );

        let repos = Repositories {
            users: Arc::new(SeaOrmUsersRepository::new(conn.clone())),
            categories: Arc::new(SeaOrmCategoriesRepository::new(conn.clone())),
            projects: Arc::new(SeaOrmProjectsRepository::new(conn.clone())),
            tasks: Arc::new(SeaOrmTasksRepository::new(conn)),
        };
        let service_config = ServiceConfig {
            default_page_limit: cfg.default_page_limit,
            max_page_limit: cfg.max_page_limit,
            min_password_length: cfg.min_password_length,
        };

        let service = Service::new(repos, Arc::new(Argon2Hasher::new()), service_config);
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client backed by this module's service.
    pub fn client(&self) -> Arc<dyn TaskManagerApi> {
        Arc::new(TaskManagerLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering task_manager REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        ApiDoc::openapi()
    }
}
