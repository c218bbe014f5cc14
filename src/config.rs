use std::path::PathBuf;

/// Logging configuration for the binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory that receives the log file
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`
    pub log_file: String,
    /// Filter directive used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: "mazepath.log".to_string(),
            default_filter: "mazepath=info".to_string(),
        }
    }
}

impl Config {
    pub const LOG_DIR_VAR: &'static str = "MAZEPATH_LOG_DIR";

    /// Defaults, with the log directory taken from `MAZEPATH_LOG_DIR` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(Self::LOG_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }

    /// Install a file-backed `tracing` subscriber.
    ///
    /// The terminal is in raw mode while the app runs, so logs go to a file instead of stderr.
    /// The returned guard flushes the writer on drop and must be held until exit.
    pub fn init_logging(&self) -> tracing_appender::non_blocking::WorkerGuard {
        let appender = tracing_appender::rolling::never(&self.log_dir, &self.log_file);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.default_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_log_dir_override() {
        let config = Config::from_lookup(|key| {
            (key == Config::LOG_DIR_VAR).then(|| "/tmp/mazepath".to_string())
        });
        assert_eq!(config.log_dir, PathBuf::from("/tmp/mazepath"));
        assert_eq!(config.log_file, "mazepath.log");

        let blank = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(blank.log_dir, PathBuf::from("logs"));
    }
}
