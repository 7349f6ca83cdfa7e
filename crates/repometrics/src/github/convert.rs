//! Conversion from GitHub wire types to the public output model.

use crate::metrics::OwnerRepoSummary;

use super::types::OwnerRepo;

/// Convert an owner-listing entry to a repository summary.
pub fn to_repo_summary(repo: &OwnerRepo) -> OwnerRepoSummary {
    let owner = repo
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_default();

    OwnerRepoSummary {
        name: repo.name.clone(),
        full_name: repo.full_name.clone(),
        owner,
        description: repo.description.clone(),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        open_issues: repo.open_issues_count,
        language: repo.language.clone(),
        is_private: repo.private,
        is_fork: repo.fork,
        created_at: repo.created_at,
        updated_at: repo.updated_at,
        pushed_at: repo.pushed_at,
        html_url: repo.html_url.clone(),
        api_url: repo.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::OwnerAccount;

    fn wire_repo() -> OwnerRepo {
        OwnerRepo {
            name: "hello".to_string(),
            full_name: "octocat/hello".to_string(),
            owner: Some(OwnerAccount {
                login: "octocat".to_string(),
            }),
            description: Some("demo".to_string()),
            stargazers_count: 12,
            forks_count: 3,
            open_issues_count: 4,
            language: Some("Rust".to_string()),
            private: true,
            fork: true,
            created_at: None,
            updated_at: None,
            pushed_at: None,
            html_url: Some("https://github.com/octocat/hello".to_string()),
            url: Some("https://api.github.com/repos/octocat/hello".to_string()),
        }
    }

    #[test]
    fn test_to_repo_summary_maps_all_fields() {
        let summary = to_repo_summary(&wire_repo());
        assert_eq!(summary.name, "hello");
        assert_eq!(summary.full_name, "octocat/hello");
        assert_eq!(summary.owner, "octocat");
        assert_eq!(summary.description.as_deref(), Some("demo"));
        assert_eq!(summary.stars, 12);
        assert_eq!(summary.forks, 3);
        assert_eq!(summary.open_issues, 4);
        assert!(summary.is_private);
        assert!(summary.is_fork);
        assert_eq!(
            summary.api_url.as_deref(),
            Some("https://api.github.com/repos/octocat/hello")
        );
    }

    #[test]
    fn test_to_repo_summary_missing_owner_defaults_to_empty() {
        let mut repo = wire_repo();
        repo.owner = None;
        let summary = to_repo_summary(&repo);
        assert_eq!(summary.owner, "");
    }
}
