use std::path::PathBuf;

use tix_adf::DEFAULT_RULE_WIDTH;

/// tix runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracker base URL (`JIRA_URL`), used for browse links
    pub base_url: Option<String>,
    /// Project key prepended to numeric ticket ids (`DEFAULT_ISSUE_PREFIX`)
    pub default_issue_prefix: Option<String>,
    /// Tool home (`TOOLS2_PATH`); holds `debug/` dumps and `logs/`
    pub tools_path: PathBuf,
    /// Whether `TOOLS2_PATH` was set explicitly; enables file logging
    pub tools_path_explicit: bool,
    /// Width of horizontal rules (`COLUMNS`)
    pub terminal_width: usize,
    /// Whether `COLUMNS` held a usable width
    pub terminal_width_explicit: bool,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            default_issue_prefix: None,
            tools_path: default_tools_path(),
            tools_path_explicit: false,
            terminal_width: DEFAULT_RULE_WIDTH,
            terminal_width_explicit: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());
        let tools_path = non_empty("TOOLS2_PATH").map(PathBuf::from);
        let columns = non_empty("COLUMNS")
            .and_then(|c| c.trim().parse::<usize>().ok())
            .filter(|w| *w > 0);

        Self {
            base_url: non_empty("JIRA_URL").map(|u| u.trim_end_matches('/').to_string()),
            default_issue_prefix: non_empty("DEFAULT_ISSUE_PREFIX"),
            tools_path_explicit: tools_path.is_some(),
            tools_path: tools_path.unwrap_or_else(default_tools_path),
            terminal_width_explicit: columns.is_some(),
            terminal_width: columns.unwrap_or(DEFAULT_RULE_WIDTH),
            log_level: non_empty("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        }
    }

    /// Where rejected documents are dumped.
    pub fn debug_dir(&self) -> PathBuf {
        self.tools_path.join("debug")
    }

    /// Rolling log directory; only used when the tool home was set explicitly.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.tools_path_explicit.then(|| self.tools_path.join("logs"))
    }
}

fn default_tools_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".tix"))
        .unwrap_or_else(|| PathBuf::from(".tix"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn reads_tracker_settings() {
        let cfg = config(&[
            ("JIRA_URL", "https://t.example/"),
            ("DEFAULT_ISSUE_PREFIX", "ABC"),
            ("TOOLS2_PATH", "/opt/tools"),
            ("COLUMNS", "120"),
        ]);
        assert_eq!(cfg.base_url.as_deref(), Some("https://t.example"));
        assert_eq!(cfg.default_issue_prefix.as_deref(), Some("ABC"));
        assert_eq!(cfg.debug_dir(), PathBuf::from("/opt/tools/debug"));
        assert_eq!(cfg.log_dir(), Some(PathBuf::from("/opt/tools/logs")));
        assert_eq!(cfg.terminal_width, 120);
        assert!(cfg.terminal_width_explicit);
    }

    #[test]
    fn falls_back_to_defaults() {
        let cfg = config(&[("COLUMNS", "wide"), ("JIRA_URL", " ")]);
        assert!(cfg.base_url.is_none());
        assert_eq!(cfg.terminal_width, DEFAULT_RULE_WIDTH);
        assert!(!cfg.terminal_width_explicit);
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.log_dir().is_none());
        assert!(cfg.debug_dir().ends_with("debug"));
    }
}
