//! Command handlers: build a client, run one operation, print JSON.

use clap::CommandFactory;
use serde::Serialize;

use repometrics::{aggregate_repos, GitHubClient, OwnerRepoSummary, Result};

use crate::config::Config;
use crate::Cli;

fn build_client(config: &Config) -> Result<GitHubClient> {
    GitHubClient::new(&config.github_api_url(), config.github_token().as_deref())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Fetch and print a metrics snapshot for one repository.
pub async fn handle_metrics(
    config: &Config,
    owner: &str,
    repo: &str,
    detailed: bool,
) -> Result<()> {
    let client = build_client(config)?;
    let metrics = client.fetch_metrics(owner, repo, detailed).await?;
    print_json(&metrics)
}

#[derive(Serialize)]
struct ReposOutput<'a> {
    owner: &'a str,
    total: usize,
    repos: &'a [OwnerRepoSummary],
}

/// List an owner's repositories, optionally rolled up into an aggregate.
pub async fn handle_repos(
    config: &Config,
    owner: &str,
    limit: Option<usize>,
    aggregate: bool,
) -> Result<()> {
    let client = build_client(config)?;
    let repos = client.list_owner_repos(owner, limit).await?;

    if aggregate {
        print_json(&aggregate_repos(owner, &repos))
    } else {
        print_json(&ReposOutput {
            owner,
            total: repos.len(),
            repos: &repos,
        })
    }
}

/// Count open issues (excluding pull requests) for one repository.
pub async fn handle_issues(config: &Config, owner: &str, repo: &str) -> Result<()> {
    let client = build_client(config)?;
    let count = client.get_open_issue_count(owner, repo).await?;
    print_json(&serde_json::json!({
        "owner": owner,
        "repo": repo,
        "open_issues": count,
    }))
}

/// Generate shell completion scripts on stdout.
pub fn handle_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
