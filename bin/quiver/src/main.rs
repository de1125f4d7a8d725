//! Quiver CLI
//!
//! Developer tooling for the Quiver site runtime.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use quiver::cmd;

/// Command-line interface for Quiver.
#[derive(Parser)]
#[command(
    name = "quiver",
    version,
    about = "Dev server and search tooling for the Quiver site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "quiver.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the site with live reload
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Print the page a search query routes to
    Route {
        /// Search query
        #[arg(num_args = 0.., trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Print autocomplete suggestions for a partial query
    Suggest {
        /// Partial query
        #[arg(num_args = 1.., required = true)]
        query: Vec<String>,
        /// Past search to include as recent history (repeatable, oldest first)
        #[arg(long = "recent", value_name = "QUERY")]
        recent: Vec<String>,
        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and site files
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    quiver::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port, open } => {
            cmd::serve::run(&cli.config, port, open).await?;
        }
        Commands::Route { query } => {
            cmd::route::run(&cmd::join_query(&query))?;
        }
        Commands::Suggest {
            query,
            recent,
            json,
        } => {
            cmd::suggest::run(&cli.config, &cmd::join_query(&query), &recent, json)?;
        }
        Commands::Check { strict } => {
            cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["quiver", "serve", "--port", "8080", "--open"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("quiver.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { port, open } => {
                assert_eq!(port, Some(8080));
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_defaults_to_config_port() {
        let cli = Cli::parse_from(["quiver", "serve"]);

        match cli.command {
            Commands::Serve { port, open } => {
                assert!(port.is_none());
                assert!(!open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_route_joins_words() {
        let cli = Cli::parse_from(["quiver", "route", "defense", "contractors"]);

        match cli.command {
            Commands::Route { query } => {
                assert_eq!(cmd::join_query(&query), "defense contractors");
            }
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_cli_route_accepts_empty_query() {
        let cli = Cli::parse_from(["quiver", "route"]);

        match cli.command {
            Commands::Route { query } => assert!(query.is_empty()),
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_cli_suggest_with_history() {
        let args = [
            "quiver", "suggest", "--recent", "meta insider", "--recent", "nvda", "--json", "me",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Suggest {
                query,
                recent,
                json,
            } => {
                assert_eq!(query, vec!["me"]);
                assert_eq!(recent, vec!["meta insider", "nvda"]);
                assert!(json);
            }
            _ => panic!("Expected Suggest command"),
        }
    }

    #[test]
    fn test_cli_suggest_requires_query() {
        assert!(Cli::try_parse_from(["quiver", "suggest"]).is_err());
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["quiver", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["quiver", "-vvv", "check"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["quiver", "--config", "site.toml", "check"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
