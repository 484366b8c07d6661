use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where and how a binary writes its logs.
///
/// stdout is reserved for report output, so console logs go to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub app_name: &'static str,
    /// Used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Daily rotated `<dir>/<app>.log` instead of stderr.
    pub log_dir: Option<PathBuf>,
    pub include_backtrace: bool,
}

impl LogConfig {
    /// Reads `PM_LOG_LEVEL`, `PM_LOG_DIR` and `PM_LOG_INCLUDE_BACKTRACE`.
    pub fn from_env(app_name: &'static str) -> Self {
        Self {
            app_name,
            default_filter: std::env::var("PM_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var_os("PM_LOG_DIR").map(PathBuf::from),
            include_backtrace: std::env::var("PM_LOG_INCLUDE_BACKTRACE")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

/// Install a global panic hook that logs panics through `tracing` with file/line
/// context. Safe to call multiple times; the hook is installed once per process.
pub fn install_tracing_panic_hook(config: &LogConfig) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    let app_name = config.app_name;
    let include_backtrace = config.include_backtrace;

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn rotating_file_writer(config: &LogConfig) -> Option<(BoxMakeWriter, WorkerGuard)> {
    let dir = config.log_dir.as_ref()?;
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!(
            "{}: failed to create log dir {}: {err}; logging to stderr",
            config.app_name,
            dir.display()
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{}.log", config.app_name));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    Some((BoxMakeWriter::new(non_blocking), guard))
}

/// Initialize the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns the file writer's guard when logs go to a rotating file; hold it
/// until exit so buffered lines are flushed. A second call is a no-op.
#[must_use]
pub fn init_tracing_subscriber(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match rotating_file_writer(config) {
        Some((writer, guard)) => {
            let _ = builder.with_ansi(false).with_writer(writer).try_init();
            Some(guard)
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            None
        }
    }
}
