use crate::config::{LoggingConfig, Section};
use crate::paths::resolve_under;
use std::{
    collections::HashMap,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    filter::{FilterFn, Targets},
    fmt,
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

const DEFAULT_MAX_SIZE_MB: u64 = 100;

// -------- level helpers --------

/// `None` means the sink is switched off; unknown strings fall back to INFO.
fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" | "" => None,
        _ => Some(Level::INFO),
    }
}

// -------- filtering functions --------

type CrateFilter = FilterFn<Box<dyn Fn(&tracing::Metadata<'_>) -> bool + Send + Sync + 'static>>;

/// Catch-all filter: passes records that belong to none of `explicit` subsystems.
fn create_default_filter_for_crates(explicit: &[String], max_level: Level) -> CrateFilter {
    let crates = explicit.to_vec();
    FilterFn::new(Box::new(move |meta: &tracing::Metadata<'_>| {
        let t = meta.target();
        if crates.iter().any(|c| matches_crate_prefix(t, c)) {
            return false;
        }
        meta.level() <= &max_level
    }))
}

/// True if `target == crate_name` or `target` starts with `crate_name::`.
fn matches_crate_prefix(target: &str, crate_name: &str) -> bool {
    target == crate_name
        || target
            .strip_prefix(crate_name)
            .is_some_and(|rest| rest.starts_with("::"))
}

// -------- rotating writer for files --------

type SharedRotate = Arc<Mutex<FileRotate<AppendTimestamp>>>;

#[derive(Clone)]
struct RotWriter(SharedRotate);

impl Write for RotWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file writer poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file writer poisoned"))?
            .flush()
    }
}

/// A writer that may have no destination; writes are then dropped.
struct RoutedWriter(Option<RotWriter>);

impl Write for RoutedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.0 {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.0 {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Routes log records to files by target prefix; unmatched targets go to the default file.
#[derive(Clone, Default)]
struct MultiFileRouter {
    default: Option<RotWriter>,
    by_prefix: HashMap<String, RotWriter>,
}

impl MultiFileRouter {
    fn resolve_for(&self, target: &str) -> Option<RotWriter> {
        self.by_prefix
            .iter()
            .find(|(prefix, _)| matches_crate_prefix(target, prefix))
            .map(|(_, w)| w.clone())
            .or_else(|| self.default.clone())
    }

    fn is_empty(&self) -> bool {
        self.default.is_none() && self.by_prefix.is_empty()
    }
}

impl<'a> fmt::MakeWriter<'a> for MultiFileRouter {
    type Writer = RoutedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RoutedWriter(self.default.clone())
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        RoutedWriter(self.resolve_for(meta.target()))
    }
}

// -------- config extraction --------

struct ConfigData<'a> {
    default_section: Option<&'a Section>,
    crate_sections: Vec<(String, &'a Section)>,
    crate_names: Vec<String>,
}

fn extract_config_data(cfg: &LoggingConfig) -> ConfigData<'_> {
    let crate_sections = cfg
        .iter()
        .filter(|(k, _)| k.as_str() != "default")
        .map(|(k, v)| (k.clone(), v))
        .collect::<Vec<_>>();

    let crate_names = crate_sections.iter().map(|(n, _)| n.clone()).collect();

    ConfigData {
        default_section: cfg.get("default"),
        crate_sections,
        crate_names,
    }
}

/// Create a rotating writer, making sure the parent directory exists.
fn create_rotating_writer_at_path(
    log_path: &Path,
    max_bytes: usize,
    max_backups: Option<usize>,
) -> io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let limit = match max_backups {
        Some(n) => FileLimit::MaxFiles(n),
        None => FileLimit::Age(chrono::Duration::days(1)),
    };

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(limit),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

fn open_section_file(name: &str, section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }

    let max_bytes = section.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB) * 1024 * 1024;
    let log_path = resolve_under(&section.file, base_dir);

    match create_rotating_writer_at_path(&log_path, max_bytes as usize, section.max_backups) {
        Ok(writer) => Some(writer),
        Err(e) => {
            // the subscriber is not installed yet, stderr is the only sink
            eprintln!(
                "Failed to init log file for '{}': {} ({})",
                name,
                log_path.display(),
                e
            );
            None
        }
    }
}

fn build_file_router(config: &ConfigData, base_dir: &Path) -> MultiFileRouter {
    let mut router = MultiFileRouter {
        default: config
            .default_section
            .and_then(|s| open_section_file("default", s, base_dir)),
        by_prefix: HashMap::new(),
    };

    for (crate_name, section) in &config.crate_sections {
        if let Some(writer) = open_section_file(crate_name, section, base_dir) {
            router.by_prefix.insert(crate_name.clone(), writer);
        }
    }

    router
}

fn build_console_targets(config: &ConfigData) -> Targets {
    config
        .crate_sections
        .iter()
        .filter_map(|(name, s)| {
            parse_tracing_level(&s.console_level).map(|l| (name.clone(), LevelFilter::from_level(l)))
        })
        .fold(Targets::new().with_default(LevelFilter::OFF), |t, (name, lvl)| {
            t.with_target(name, lvl)
        })
}

fn build_file_targets(config: &ConfigData) -> Targets {
    config
        .crate_sections
        .iter()
        .filter(|(_, s)| !s.file.trim().is_empty())
        .filter_map(|(name, s)| {
            parse_tracing_level(&s.file_level).map(|l| (name.clone(), LevelFilter::from_level(l)))
        })
        .fold(Targets::new().with_default(LevelFilter::OFF), |t, (name, lvl)| {
            t.with_target(name, lvl)
        })
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: logging sections keyed by subsystem (target prefix); "default" is the catch-all
/// - `base_dir`: resolves relative log file paths (usually server.home_dir)
///
/// Console output is human-readable; files receive JSON lines.
/// Calling this more than once is harmless: later calls are ignored.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

    // Bridge `log` → `tracing` before installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        init_default_logging();
        return;
    }

    let config = extract_config_data(cfg);
    let console_targets = build_console_targets(&config);
    let file_targets = build_file_targets(&config);
    let router = build_file_router(&config, base_dir);
    let ansi = io::stdout().is_terminal();

    let console_explicit = fmt::layer()
        .with_ansi(ansi)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(console_targets);

    let file_explicit = (!router.by_prefix.is_empty()).then(|| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(router.clone())
            .with_filter(file_targets)
    });

    let console_default = config
        .default_section
        .and_then(|s| parse_tracing_level(&s.console_level))
        .map(|level| {
            fmt::layer()
                .with_ansi(ansi)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_filter(create_default_filter_for_crates(&config.crate_names, level))
        });

    let file_default = config
        .default_section
        .filter(|_| router.default.is_some())
        .and_then(|s| parse_tracing_level(&s.file_level))
        .map(|level| {
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_writer(router.clone())
                .with_filter(create_default_filter_for_crates(&config.crate_names, level))
        });

    let _ = Registry::default()
        .with(console_explicit)
        .with(file_explicit)
        .with(console_default)
        .with(file_default)
        .try_init();
}

fn init_default_logging() {
    let _ = fmt()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

// =================== tests ===================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_logging_config, AppConfig};
    use std::fs;
    use tempfile::tempdir;

    fn section(file: &str) -> Section {
        Section {
            console_level: "info".into(),
            file: file.into(),
            file_level: "debug".into(),
            max_backups: Some(2),
            max_size_mb: Some(1),
        }
    }

    #[test]
    fn test_logging_level_parsing() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("Info"), Some(Level::INFO));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        assert_eq!(parse_tracing_level(""), None);
        assert_eq!(parse_tracing_level("loud"), Some(Level::INFO));
    }

    #[test]
    fn test_crate_prefix_matching() {
        assert!(matches_crate_prefix("task_manager", "task_manager"));
        assert!(matches_crate_prefix("task_manager::api::rest", "task_manager"));
        assert!(!matches_crate_prefix("task_manager_ext", "task_manager"));
        assert!(!matches_crate_prefix("sqlx::query", "task_manager"));
    }

    #[test]
    fn test_extract_config_data() {
        let mut cfg = default_logging_config();
        cfg.insert("sqlx".into(), section("logs/sql.log"));

        let data = extract_config_data(&cfg);
        assert!(data.default_section.is_some());
        assert_eq!(data.crate_sections.len(), 1);
        assert_eq!(data.crate_names, vec!["sqlx".to_string()]);
    }

    #[test]
    fn test_router_prefers_explicit_prefix() {
        let tmp = tempdir().unwrap();
        let mut cfg = default_logging_config();
        cfg.insert("sqlx".into(), section("logs/sql.log"));

        let data = extract_config_data(&cfg);
        let router = build_file_router(&data, tmp.path());
        assert!(!router.is_empty());

        let sql = router.resolve_for("sqlx::query").unwrap();
        let explicit = &router.by_prefix["sqlx"];
        assert!(Arc::ptr_eq(&sql.0, &explicit.0));

        let other = router.resolve_for("task_manager::domain").unwrap();
        assert!(Arc::ptr_eq(&other.0, &router.default.as_ref().unwrap().0));
    }

    #[test]
    fn test_empty_file_disables_writer() {
        let tmp = tempdir().unwrap();
        assert!(open_section_file("default", &section("  "), tmp.path()).is_none());
    }

    #[test]
    fn test_create_rotating_writer_at_path_creates_parent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nested/dir/app.log");

        let mut writer = create_rotating_writer_at_path(&p, 128 * 1024, Some(2)).unwrap();
        writer.write_all(b"{\"msg\":\"hello\"}\n").unwrap();
        writer.flush().unwrap();
        assert!(p.parent().unwrap().exists(), "parent dir must be created");
        assert!(fs::read_to_string(&p).unwrap().contains("hello"));
    }

    #[test]
    fn test_config_logging_integration_with_base_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.yaml");
        let home = temp_dir.path().join("home");

        let yaml_content = format!(
            r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 8088

logging:
  default:
    console_level: info
    file: ""
    file_level: debug
  task_manager:
    console_level: debug
    file: "logs/tasks.log"
    file_level: warn
    max_size_mb: 5
    max_backups: 2
"#,
            home.to_string_lossy().replace('\\', "/")
        );
        fs::write(&config_path, yaml_content).unwrap();

        let config = AppConfig::load_layered(&config_path).unwrap();
        let abs = resolve_under("logs/tasks.log", Path::new(&config.server.home_dir));
        assert!(abs.starts_with(&config.server.home_dir));
        assert!(abs.ends_with("logs/tasks.log"));
    }
}
