//! cdas-docs - terminal browser for the CDAS bill platform documentation

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod format;
mod logging;
mod tui;

use commands::{
  cmd_config_init, cmd_config_reset, cmd_config_show, cmd_export, cmd_search, cmd_sections, cmd_show, cmd_tui,
};
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "cdas-docs")]
#[command(about = "Terminal browser for the CDAS bill processing documentation")]
#[command(version)]
#[command(after_help = "\
QUICK START:
  cdas-docs                        # Browse the docs in the terminal UI
  cdas-docs sections               # List documentation sections
  cdas-docs show api-reference     # Print one section to stdout
  cdas-docs search \"password\"      # Find sections matching text
  cdas-docs export -f markdown     # Dump the whole catalog

CONFIG:
  User config: ~/.config/cdas-docs/config.toml (see 'cdas-docs config')")]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List documentation sections
  Sections {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Print one section to stdout
  Show {
    /// Section id (e.g. overview, api-reference)
    id: String,
  },
  /// Search section titles and topic text
  Search {
    /// Text to search for (case-insensitive)
    query: String,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Export the whole catalog
  Export {
    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
    /// Output format: json or markdown
    #[arg(short, long, default_value = "json")]
    format: String,
  },
  /// Manage configuration
  #[command(after_help = "\
CONFIG FILE LOCATIONS (first match wins):
  $CDAS_DOCS_CONFIG_DIR/config.toml
  $XDG_CONFIG_HOME/cdas-docs/config.toml
  ~/.config/cdas-docs/config.toml")]
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
  /// Generate shell completions
  Completions {
    /// Shell to generate completions for
    shell: Shell,
  },
  /// Launch the interactive browser (default when no command is given)
  Tui,
}

#[derive(Subcommand)]
enum ConfigCommand {
  /// Show current configuration and which file it came from
  Show,
  /// Create a config file with the default settings
  Init,
  /// Overwrite the config file with the default settings
  Reset,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let command = cli.command.unwrap_or(Commands::Tui);

  // The TUI owns the terminal, so its logs go to a file instead of stderr
  let _guard = match &command {
    Commands::Tui => {
      let config = cdas_core::Config::load();
      logging::init_tui_logging(&config)
    }
    _ => {
      init_cli_logging();
      None
    }
  };

  match command {
    Commands::Sections { json } => cmd_sections(json),
    Commands::Show { id } => cmd_show(&id),
    Commands::Search { query, json } => cmd_search(&query, json),
    Commands::Export { output, format } => cmd_export(output.as_deref(), &format),
    Commands::Config { command } => match command {
      ConfigCommand::Show => cmd_config_show(),
      ConfigCommand::Init => cmd_config_init(),
      ConfigCommand::Reset => cmd_config_reset(),
    },
    Commands::Completions { shell } => {
      let mut cmd = Cli::command();
      clap_complete::generate(shell, &mut cmd, "cdas-docs", &mut std::io::stdout());
      Ok(())
    }
    Commands::Tui => cmd_tui(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_subcommand_defaults_to_tui() {
    let cli = Cli::parse_from(["cdas-docs"]);
    assert!(cli.command.is_none());
  }

  #[test]
  fn test_search_parses_json_flag() {
    let cli = Cli::parse_from(["cdas-docs", "search", "password", "--json"]);
    match cli.command {
      Some(Commands::Search { query, json }) => {
        assert_eq!(query, "password");
        assert!(json);
      }
      _ => panic!("expected search command"),
    }
  }
}
