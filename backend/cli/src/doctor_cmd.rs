//! CLI Doctor Command
//!
//! Reports which settings tix resolved from the environment.

use anyhow::Result;

use crate::config::Config;
use crate::terminal_output::{note_success, note_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Ok,
    Optional,
    Required,
}

/// One line of the environment report.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Check {
    var: &'static str,
    level: Level,
    detail: String,
}

impl Check {
    fn new(var: &'static str, level: Level, detail: impl Into<String>) -> Self {
        Self {
            var,
            level,
            detail: detail.into(),
        }
    }

    fn line(&self) -> String {
        let tag = match self.level {
            Level::Ok => "[ok]",
            Level::Optional => "[--]",
            Level::Required => "[!!]",
        };
        format!("  {tag:<6} {} {}", self.var, self.detail)
    }
}

/// Executes the full doctor diagnosis.
pub async fn run(config: &Config) -> Result<()> {
    println!("\nRunning tix doctor...\n");

    println!("Checking Environment Variables:");
    let checks = env_checks(config);
    for check in &checks {
        println!("{}", check.line());
    }
    let is_ok = checks.iter().all(|c| c.level != Level::Required);

    println!("\nResolved settings:");
    println!("  debug dumps:   {}", config.debug_dir().display());
    match config.log_dir() {
        Some(dir) => println!("  log files:     {}", dir.display()),
        None => println!("  log files:     disabled"),
    }

    println!();
    if is_ok {
        note_success("All checks passed.");
    } else {
        note_warn("Some checks failed; see above.");
    }

    Ok(())
}

fn env_checks(config: &Config) -> Vec<Check> {
    let tracker = match &config.base_url {
        Some(url) => Check::new("JIRA_URL", Level::Ok, format!("is {url}")),
        None => Check::new("JIRA_URL", Level::Required, "is missing (REQUIRED)"),
    };
    let prefix = match &config.default_issue_prefix {
        Some(prefix) => Check::new("DEFAULT_ISSUE_PREFIX", Level::Ok, format!("is {prefix}")),
        None => Check::new("DEFAULT_ISSUE_PREFIX", Level::Optional, "is missing (optional)"),
    };
    let home = if config.tools_path_explicit {
        Check::new("TOOLS2_PATH", Level::Ok, format!("is {}", config.tools_path.display()))
    } else {
        let detail = format!("is missing (optional), using {}", config.tools_path.display());
        Check::new("TOOLS2_PATH", Level::Optional, detail)
    };
    let width = if config.terminal_width_explicit {
        Check::new("COLUMNS", Level::Ok, format!("is {}", config.terminal_width))
    } else {
        let detail = format!("is unset or invalid, using {}", config.terminal_width);
        Check::new("COLUMNS", Level::Optional, detail)
    };

    vec![tracker, prefix, home, width]
}
