use std::path::PathBuf;

const LOG_FILE_VAR: &str = "FOOBAR_LOG_FILE";
const LOG_FILTER_VAR: &str = "RUST_LOG";
const VIEWPORT_VAR: &str = "FOOBAR_VIEWPORT";

const DEFAULT_LOG_FILE_NAME: &str = "foobar.log";
const DEFAULT_LOG_FILTER: &str = "info";

/// Off-screen viewport dimensions used by the headless entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub cols: u16,
    pub rows: u16,
}

impl ViewportSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Parse `"<cols>x<rows>"`. Zero-sized viewports are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let (cols, rows) = value.trim().split_once(['x', 'X'])?;
        let cols: u16 = cols.trim().parse().ok()?;
        let rows: u16 = rows.trim().parse().ok()?;
        if cols == 0 || rows == 0 {
            return None;
        }
        Some(Self::new(cols, rows))
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(48, 12)
    }
}

/// An environment value that was set but unusable and replaced by its
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedValue {
    pub var: &'static str,
    pub value: String,
}

/// Process-level settings. Only ambient concerns live here; navigation
/// itself takes no configuration.
///
/// Config is read before the log subscriber exists, so rejected values are
/// collected in `rejected` and reported by `report_rejected` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_file: PathBuf,
    pub log_filter: String,
    pub viewport: ViewportSize,
    pub rejected: Vec<RejectedValue>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_file = get(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));
        let log_filter = get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let mut rejected = Vec::new();
        let viewport = match get(VIEWPORT_VAR) {
            Some(raw) => ViewportSize::parse(&raw).unwrap_or_else(|| {
                rejected.push(RejectedValue {
                    var: VIEWPORT_VAR,
                    value: raw,
                });
                ViewportSize::default()
            }),
            None => ViewportSize::default(),
        };

        Self {
            log_file,
            log_filter,
            viewport,
            rejected,
        }
    }

    /// Warn about every value that fell back to its default. Call once the
    /// log subscriber is installed.
    pub fn report_rejected(&self) {
        for RejectedValue { var, value } in &self.rejected {
            tracing::warn!(%value, "ignoring malformed {var}, using default");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    /// In-memory log sink for a scoped subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        log.contents()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.log_file, std::env::temp_dir().join("foobar.log"));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.viewport, ViewportSize::new(48, 12));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FOOBAR_LOG_FILE", "/var/tmp/nav.log"),
            ("RUST_LOG", "debug"),
            ("FOOBAR_VIEWPORT", "80x24"),
        ]));

        assert_eq!(config.log_file, PathBuf::from("/var/tmp/nav.log"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.viewport, ViewportSize::new(80, 24));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("RUST_LOG", "  ")]));

        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn malformed_viewport_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("FOOBAR_VIEWPORT", "wide")]));

        assert_eq!(config.viewport, ViewportSize::default());
        assert_eq!(
            config.rejected,
            vec![RejectedValue {
                var: "FOOBAR_VIEWPORT",
                value: "wide".to_string(),
            }]
        );
    }

    #[test]
    fn reading_config_logs_nothing_by_itself() {
        let logs = capture_logs(|| {
            AppConfig::from_lookup(lookup_from(&[("FOOBAR_VIEWPORT", "wide")]));
        });

        assert!(logs.is_empty());
    }

    #[test]
    fn report_rejected_warns_once_subscriber_is_installed() {
        let config = AppConfig::from_lookup(lookup_from(&[("FOOBAR_VIEWPORT", "wide")]));

        let logs = capture_logs(|| config.report_rejected());

        assert!(logs.contains("WARN"));
        assert!(logs.contains("ignoring malformed FOOBAR_VIEWPORT"));
        assert!(logs.contains("value=wide"));
    }

    #[test]
    fn valid_config_reports_nothing() {
        let config = AppConfig::from_lookup(lookup_from(&[("FOOBAR_VIEWPORT", "80x24")]));

        assert!(config.rejected.is_empty());
        assert!(capture_logs(|| config.report_rejected()).is_empty());
    }

    #[test]
    fn viewport_parse_accepts_upper_case_separator_and_spaces() {
        assert_eq!(ViewportSize::parse(" 60 X 20 "), Some(ViewportSize::new(60, 20)));
    }

    #[test]
    fn viewport_parse_rejects_zero() {
        assert_eq!(ViewportSize::parse("0x10"), None);
        assert_eq!(ViewportSize::parse("10x0"), None);
    }
}
