//! repometrics CLI - fetch GitHub repository metrics from the command line.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repometrics")]
#[command(version)]
#[command(about = "Fetch GitHub repository metrics")]
#[command(
    long_about = "Repometrics fetches metrics (stars, language, open/closed issue and \
pull-request counts) for GitHub repositories and lists the repositories owned \
by a user or organization. Results are printed as JSON on stdout."
)]
#[command(after_long_help = r#"EXAMPLES
    Fetch metrics for a repository:
        $ repometrics metrics rust-lang rust

    Include detailed open/closed issue and PR counts:
        $ repometrics metrics rust-lang rust --detailed

    List the 10 most recently updated repositories of an owner:
        $ repometrics repos octocat --limit 10

    Roll an owner's repositories up by language:
        $ repometrics repos rust-lang --aggregate

    Count open issues (pull requests excluded):
        $ repometrics issues rust-lang rust

CONFIGURATION
    Repometrics reads configuration from:
      1. ~/.config/repometrics/config.toml (or $XDG_CONFIG_HOME/repometrics/config.toml)
      2. ./repometrics.toml
      3. Environment variables (REPOMETRICS_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    REPOMETRICS_GITHUB_TOKEN  GitHub personal access token (raises the rate limit)
    GITHUB_TOKEN              Fallback token variable
    REPOMETRICS_GITHUB_HOST   GitHub API base URL (default: https://api.github.com)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a metrics snapshot for a single repository
    Metrics {
        /// Repository owner (e.g., "rust-lang")
        owner: String,
        /// Repository name (e.g., "rust")
        repo: String,
        /// Also fetch open/closed issue and pull-request counts
        #[arg(short, long)]
        detailed: bool,
    },
    /// List repositories owned by a user or organization
    Repos {
        /// GitHub username or organization name
        owner: String,
        /// Stop after this many repositories
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print a rollup (star/issue totals, count per language) instead of the list
        #[arg(short, long)]
        aggregate: bool,
    },
    /// Count open issues for a repository (pull requests excluded)
    Issues {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean JSON.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("repometrics=info,repometrics_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Metrics {
            owner,
            repo,
            detailed,
        } => commands::handle_metrics(&config, &owner, &repo, detailed).await,
        Commands::Repos {
            owner,
            limit,
            aggregate,
        } => commands::handle_repos(&config, &owner, limit, aggregate).await,
        Commands::Issues { owner, repo } => commands::handle_issues(&config, &owner, &repo).await,
        Commands::Completions { shell } => {
            commands::handle_completions(shell);
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("error ({}): {}", e.kind(), e);
        std::process::exit(1);
    }
}
