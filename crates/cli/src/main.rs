mod commands;
mod logging;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use folio_core::articles::DEFAULT_RELATED_COUNT;
use folio_generator::SitemapFormat;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Sitemap builder and article API for the folio site", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to folio.toml (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build the sitemap from static routes and the article API
    Sitemap {
        /// Output format
        #[arg(short, long, value_enum, default_value = "xml")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Public site URL (overrides config and FOLIO_SITE_URL)
        #[arg(long)]
        site_url: Option<String>,

        /// Article API base URL (overrides config and FOLIO_API_BASE_URL)
        #[arg(long)]
        api_base_url: Option<String>,
    },

    /// Query the bundled articles
    Articles {
        #[command(subcommand)]
        command: ArticlesCommand,
    },

    /// Serve the article API
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Write a default folio.toml
    Init {
        /// Directory to create folio.toml in
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
enum ArticlesCommand {
    /// List all articles
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one article
    Show {
        /// Article id
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List articles related to the given one
    Related {
        /// Article id to exclude
        id: String,

        /// Maximum number of articles
        #[arg(short, long, default_value_t = DEFAULT_RELATED_COUNT)]
        count: usize,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Xml,
    Json,
}

impl From<OutputFormat> for SitemapFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => SitemapFormat::Xml,
            OutputFormat::Json => SitemapFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Command::Sitemap {
            format,
            output,
            site_url,
            api_base_url,
        } => {
            commands::sitemap::run(
                cli.config,
                format.into(),
                output,
                site_url,
                api_base_url,
            )
            .await
        }
        Command::Articles { command } => match command {
            ArticlesCommand::List { json } => commands::articles::list(json),
            ArticlesCommand::Show { id, json } => commands::articles::show(&id, json),
            ArticlesCommand::Related { id, count, json } => {
                commands::articles::related(&id, count, json)
            }
        },
        Command::Serve { port } => commands::serve::run(port).await,
        Command::Init { path } => commands::init::run(path).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
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
    fn test_parse_sitemap_args() {
        let cli = Cli::try_parse_from([
            "folio",
            "-vv",
            "sitemap",
            "--format",
            "json",
            "--api-base-url",
            "http://127.0.0.1:9000/api",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Sitemap {
                format,
                output,
                api_base_url,
                ..
            } => {
                assert!(matches!(format, OutputFormat::Json));
                assert!(output.is_none());
                assert_eq!(api_base_url.as_deref(), Some("http://127.0.0.1:9000/api"));
            }
            _ => panic!("expected sitemap command"),
        }
    }

    #[test]
    fn test_parse_related_default_count() {
        let cli = Cli::try_parse_from(["folio", "articles", "related", "1"]).unwrap();
        match cli.command {
            Command::Articles {
                command: ArticlesCommand::Related { id, count, json },
            } => {
                assert_eq!(id, "1");
                assert_eq!(count, 2);
                assert!(!json);
            }
            _ => panic!("expected articles related"),
        }
    }
}
