use anyhow::{anyhow, Context, Result};
use axum::{response::Json, routing::get, Extension, Router};
use clap::{Parser, Subcommand};
use db::{ConnectOpts, DbHandle};
use mimalloc::MiMalloc;
use modkit::http::web;
use modkit::{with_standard_layers, HttpStackConfig};
use runtime::{ApiConfig, AppConfig, CliArgs, DatabaseConfig};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use task_manager::config::TaskManagerConfig;
use task_manager::TaskManager;
use url::Url;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
    {
        return Ok("sqlite::memory:".to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Ok(out)
}

/// Task Manager Server - users, projects, categories and tasks over HTTP/JSON
#[derive(Parser)]
#[command(name = "task-manager-server")]
#[command(about = "Task Manager Server - users, projects, categories and tasks over HTTP/JSON")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config
        .logging
        .clone()
        .unwrap_or_else(runtime::default_logging_config);
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Task Manager Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config).await,
    }
}

/// Detect DB backend from URL scheme (sqlite/postgres/mysql).
fn detect_from_dsn(cfg: &DatabaseConfig) -> Result<&'static str> {
    let raw = cfg.url.trim().to_owned();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }

    let url = Url::parse(&raw).map_err(|e| anyhow!("Invalid database DSN '{}': {}", raw, e))?;

    match url.scheme() {
        "sqlite" => Ok("sqlite"),
        "postgres" | "postgresql" => Ok("postgres"),
        "mysql" => Ok("mysql"),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

async fn connect_database(config: &AppConfig) -> Result<DbHandle> {
    let db_config = config
        .database
        .as_ref()
        .ok_or_else(|| anyhow!("Database configuration is required"))?;
    let backend = detect_from_dsn(db_config)?;

    let mut dsn = db_config.url.trim().to_owned();
    // Absolutize sqlite DSNs to avoid cwd issues
    if backend == "sqlite" {
        dsn = absolutize_sqlite_dsn(&dsn, Path::new(&config.server.home_dir), true)?;
    }

    let connect_opts = ConnectOpts {
        max_conns: db_config.max_conns,
        acquire_timeout: Some(Duration::from_secs(5)),
        busy_timeout_ms: db_config.busy_timeout_ms,
        create_sqlite_dirs: true,
    };

    tracing::info!("Connecting to database: {}", db::redact_credentials(&dsn));
    let db = DbHandle::connect(&dsn, connect_opts)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected DB backend: {:?}", db.engine());
    Ok(db)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Task Manager API" }))
}

/// Assemble the full HTTP application around `module`.
fn build_router(module: &TaskManager, api: &ApiConfig, timeout_sec: u64) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(web::health_check));

    if api.enable_docs {
        let mut doc = TaskManager::openapi();
        doc.info.title = api.title.clone();
        doc.info.version = api.version.clone();
        router = router
            .route("/openapi.json", get(web::openapi_json))
            .route("/docs", get(web::serve_docs))
            .layer(Extension(Arc::new(doc)));
    }

    let router = module.register_rest(router);

    let stack = HttpStackConfig {
        timeout: (timeout_sec > 0).then(|| Duration::from_secs(timeout_sec)),
        cors_enabled: api.cors_enabled,
        ..HttpStackConfig::default()
    };
    with_standard_layers(router, &stack)
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");

    let db = connect_database(&config).await?;
    TaskManager::migrate(&db).await?;

    let module_cfg: TaskManagerConfig = config.module_config("task_manager")?;
    let module = TaskManager::init(db.sea(), module_cfg);
    let app = build_router(&module, &config.api, config.server.timeout_sec);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = modkit::runtime::wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handler failed; shutting down");
            }
        })
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped; closing database");
    db.close().await;
    Ok(())
}

async fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    if let Some(db_config) = &config.database {
        let backend = detect_from_dsn(db_config)?;
        tracing::info!("Database backend: {}", backend);
    }
    let module_cfg: TaskManagerConfig = config.module_config("task_manager")?;
    if module_cfg.default_page_limit > module_cfg.max_page_limit {
        return Err(anyhow!(
            "modules.task_manager.default_page_limit ({}) exceeds max_page_limit ({})",
            module_cfg.default_page_limit,
            module_cfg.max_page_limit
        ));
    }

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn memory_dsn_is_kept() {
        let base = Path::new("/tmp");
        assert_eq!(
            absolutize_sqlite_dsn("sqlite://:memory:", base, false).unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn relative_sqlite_path_lands_under_home() {
        let home = tempfile::tempdir().unwrap();
        let dsn =
            absolutize_sqlite_dsn("sqlite://database/tm.db?mode=rwc", home.path(), true).unwrap();
        let expected = home.path().join("database").join("tm.db");
        assert_eq!(
            dsn,
            format!("sqlite://{}?mode=rwc", expected.to_string_lossy().replace('\\', "/"))
        );
        assert!(home.path().join("database").is_dir());
    }

    #[test]
    fn non_sqlite_scheme_is_rejected_by_absolutize() {
        assert!(absolutize_sqlite_dsn("postgres://localhost/db", Path::new("."), false).is_err());
    }

    #[test]
    fn dsn_detection() {
        let cfg = |url: &str| DatabaseConfig {
            url: url.to_string(),
            max_conns: None,
            busy_timeout_ms: None,
        };
        assert_eq!(detect_from_dsn(&cfg("sqlite::memory:")).unwrap(), "sqlite");
        assert_eq!(detect_from_dsn(&cfg("postgresql://u@h/db")).unwrap(), "postgres");
        assert!(detect_from_dsn(&cfg("")).is_err());
        assert!(detect_from_dsn(&cfg("redis://localhost")).is_err());
    }

    async fn test_app(api: ApiConfig) -> Router {
        let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
            .await
            .unwrap();
        TaskManager::migrate(&db).await.unwrap();
        let module = TaskManager::init(db.sea(), TaskManagerConfig::default());
        build_router(&module, &api, 30)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn root_says_welcome() {
        let (status, body) = get_json(test_app(ApiConfig::default()).await, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to the Task Manager API");
    }

    #[tokio::test]
    async fn openapi_document_carries_configured_title() {
        let (status, body) = get_json(test_app(ApiConfig::default()).await, "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Task Manager API");
        assert!(body["paths"]["/tasks/"].is_object());
    }

    #[tokio::test]
    async fn docs_can_be_disabled() {
        let api = ApiConfig {
            enable_docs: false,
            ..ApiConfig::default()
        };
        let (status, _) = get_json(test_app(api).await, "/openapi.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = test_app(ApiConfig::default()).await;
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
