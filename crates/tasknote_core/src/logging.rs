//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger once per process on host request.
//! - Capture panics as sanitized log records before the default hook runs.
//!
//! # Invariants
//! - A second init with identical settings succeeds without side effects.
//! - A second init with a different level or directory is rejected.
//! - Init never panics; failures come back as readable messages.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "tasknote";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_SUMMARY_LIMIT: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Verbosity accepted by [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a case-insensitive level name; `warning` is accepted for `warn`.
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown log level `{other}`; expected trace|debug|info|warn|error"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: LogLevel,
    dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: LogLevel::parse(level)?,
            dir: absolute_dir(log_dir)?,
        })
    }

    fn ensure_matches(&self, requested: &LogSettings) -> Result<(), String> {
        if self.dir != requested.dir {
            return Err(format!(
                "logger already writing to `{}`; cannot move to `{}`",
                self.dir.display(),
                requested.dir.display()
            ));
        }
        if self.level != requested.level {
            return Err(format!(
                "logger already running at `{}`; cannot change to `{}`",
                self.level.as_str(),
                requested.level.as_str()
            ));
        }
        Ok(())
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging is already active with different settings.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;

    if let Some(active) = ACTIVE.get() {
        return active.settings.ensure_matches(&requested);
    }

    let active = ACTIVE.get_or_try_init(|| start_logger(requested.clone()))?;
    active.settings.ensure_matches(&requested)
}

/// Active `(level, log_dir)`, or `None` before a successful init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level.as_str(), active.settings.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        LogLevel::Debug.as_str()
    } else {
        LogLevel::Info.as_str()
    }
}

fn start_logger(settings: LogSettings) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            settings.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level.as_str())
        .map_err(|err| format!("logger rejected level `{}`: {err}", settings.level.as_str()))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger failed to start: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_start module=core status=ok os={} profile={} version={} level={} dir={}",
        std::env::consts::OS,
        if cfg!(debug_assertions) { "debug" } else { "release" },
        env!("CARGO_PKG_VERSION"),
        settings.level.as_str(),
        settings.dir.display()
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

fn absolute_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log directory must not be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let chained = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Payload may echo item text typed by the user.
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            one_line_summary(&payload, PANIC_SUMMARY_LIMIT)
        );
        chained(info);
    }));
}

fn one_line_summary(value: &str, limit: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut summary: String = flattened.chars().take(limit).collect();
    if flattened.chars().count() > limit {
        summary.push_str("...");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::{absolute_dir, init_logging, logging_status, one_line_summary, LogLevel};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be past the unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "tasknote-logging-{label}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn level_parse_is_case_insensitive_and_accepts_warning() {
        assert_eq!(LogLevel::parse(" DEBUG ").expect("DEBUG parses"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("warning").expect("warning parses"), LogLevel::Warn);
        assert!(LogLevel::parse("verbose").is_err());
    }

    #[test]
    fn relative_and_blank_dirs_are_rejected() {
        assert!(absolute_dir("logs/dev")
            .expect_err("relative dir must fail")
            .contains("absolute"));
        assert!(absolute_dir("   ")
            .expect_err("blank dir must fail")
            .contains("empty"));
    }

    #[test]
    fn summary_flattens_lines_and_truncates() {
        let summary = one_line_summary("first\nsecond\rthird", 8);
        assert!(!summary.contains('\n'));
        assert!(!summary.contains('\r'));
        assert_eq!(summary, "first se...");
    }

    #[test]
    fn repeated_init_is_idempotent_and_conflicts_are_rejected() {
        let dir = scratch_dir("primary");
        let dir_str = dir.to_str().expect("temp dir is UTF-8").to_string();
        let other = scratch_dir("other");
        let other_str = other.to_str().expect("temp dir is UTF-8").to_string();

        init_logging("info", &dir_str).expect("first init succeeds");
        init_logging("INFO", &dir_str).expect("same settings are idempotent");

        let level_err = init_logging("trace", &dir_str).expect_err("level change fails");
        assert!(level_err.contains("cannot change"));
        let dir_err = init_logging("info", &other_str).expect_err("dir change fails");
        assert!(dir_err.contains("cannot move"));

        let (level, active_dir) = logging_status().expect("logging is active");
        assert_eq!(level, "info");
        assert_eq!(active_dir, dir);
    }
}
