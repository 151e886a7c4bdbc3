mod board_cmd;
mod config;
mod doctor_cmd;
mod input;
mod issue_cmd;
mod render_cmd;
mod terminal_output;
mod ticket_cmd;
mod transition_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use tix_adf::style::supports_color;
use tix_adf::{DebugDir, RenderOptions, Renderer};

use config::Config;
use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "tix")]
#[command(about = "tix: issue tracker CLI for tickets, boards and rich-text descriptions")]
#[command(version)]
struct Cli {
    /// Disable ANSI colours
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rich-text document, or the description of an issue payload
    Render {
        /// JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Show an issue payload
    #[command(alias = "i")]
    Issue {
        /// Issue JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// List comments, newest first
        #[arg(short, long)]
        comments: bool,
    },
    /// Summarise sprint issues grouped by status
    #[command(alias = "b")]
    Board {
        /// Sprint issues JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Sprint (or sprint page) JSON file for the header
        #[arg(long)]
        sprint: Option<PathBuf>,
    },
    /// Print the ticket id from the argument or the current git branch
    #[command(alias = "ticket-number")]
    Ticket {
        /// Ticket id; numeric ids get DEFAULT_ISSUE_PREFIX
        id: Option<String>,
    },
    /// Print the web link of a ticket
    #[command(alias = "l")]
    Link {
        /// Ticket id; defaults to the current git branch
        id: Option<String>,
    },
    /// Pick the workflow transition matching QUERY (id or name prefix)
    Transition {
        query: String,
        /// Transitions JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Check environment configuration
    Doctor,
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    tix_logging::init_logger(&config.log_level, config.log_dir().as_deref());

    let cli = Cli::parse();

    if let Err(e) = run(cli, config).await {
        note_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let color = !cli.no_color && supports_color();
    let renderer = build_renderer(&config, color);
    debug!(color, width = config.terminal_width, "Starting tix");

    match cli.command {
        Commands::Render { file } => render_cmd::run(&renderer, file.as_deref()).await,
        Commands::Issue { file, comments } => {
            issue_cmd::run(&renderer, &config, file.as_deref(), comments).await
        }
        Commands::Board { file, sprint } => {
            board_cmd::run(file.as_deref(), sprint.as_deref(), color).await
        }
        Commands::Ticket { id } => ticket_cmd::run_ticket(id.as_deref(), &config).await,
        Commands::Link { id } => ticket_cmd::run_link(id.as_deref(), &config).await,
        Commands::Transition { query, file } => transition_cmd::run(&query, file.as_deref()).await,
        Commands::Doctor => doctor_cmd::run(&config).await,
    }
}

fn build_renderer(config: &Config, color: bool) -> Renderer {
    let options = RenderOptions::default()
        .with_rule_width(config.terminal_width)
        .with_color(color);
    Renderer::new(options).with_sink(DebugDir::new(config.debug_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        let cli = Cli::try_parse_from(["tix", "i", "issue.json", "--comments"]).unwrap();
        assert!(matches!(cli.command, Commands::Issue { comments: true, .. }));

        let cli = Cli::try_parse_from(["tix", "ticket-number", "42"]).unwrap();
        assert!(matches!(cli.command, Commands::Ticket { id: Some(ref id) } if id == "42"));
    }

    #[test]
    fn no_color_is_global() {
        let cli = Cli::try_parse_from(["tix", "render", "--no-color", "-"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn renderer_follows_config() {
        let config = Config {
            terminal_width: 33,
            ..Config::default()
        };
        let options = build_renderer(&config, false).options();
        assert_eq!(options.rule_width, 33);
        assert!(!options.color);
    }
}
