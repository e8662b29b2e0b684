use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "planner-tui")]
#[command(about = "Terminal UI for the daily planner")]
pub struct Cli {
    /// Base URL of planner-api, overrides config file and PLANNER_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// Start with an empty task list (default)
    Run,
    /// Start with a few demonstration tasks for today and tomorrow
    Demo,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_the_default() {
        let cli = Cli::try_parse_from(["planner-tui"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn api_url_flag_works_after_subcommand() {
        let cli =
            Cli::try_parse_from(["planner-tui", "demo", "--api-url", "http://host:3001"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Demo));
        assert_eq!(cli.api_url.as_deref(), Some("http://host:3001"));
    }
}
