//! Repository identifier parsing

use crate::{Error, Result};

/// A reference to a remote repository, identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner/organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Parse a repository identifier or URL
    ///
    /// Supports:
    /// - `owner/repo`
    /// - `https://github.com/owner/repo`
    /// - `https://github.com/owner/repo.git`
    /// - `git@github.com:owner/repo.git`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        // Handle owner/repo shorthand
        if !input.contains("://") && !input.contains('@') && input.contains('/') {
            let parts: Vec<&str> = input.split('/').filter(|p| !p.is_empty()).collect();
            if parts.len() == 2 {
                return Ok(Self {
                    owner: parts[0].to_string(),
                    name: parts[1].trim_end_matches(".git").to_string(),
                });
            }
        }

        // Handle git@ URLs (e.g., git@github.com:owner/repo.git)
        if let Some(rest) = input.strip_prefix("git@") {
            if let Some((_host, path)) = rest.split_once(':') {
                let parts: Vec<&str> = path.trim_end_matches(".git").split('/').collect();
                if parts.len() >= 2 {
                    return Ok(Self {
                        owner: parts[0].to_string(),
                        name: parts[1].to_string(),
                    });
                }
            }
        }

        // Handle https:// URLs
        if input.starts_with("https://") || input.starts_with("http://") {
            if let Ok(url) = url::Url::parse(input) {
                let path = url.path().trim_start_matches('/').trim_end_matches(".git");
                let parts: Vec<&str> = path.split('/').collect();
                if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
                    return Ok(Self {
                        owner: parts[0].to_string(),
                        name: parts[1].to_string(),
                    });
                }
            }
        }

        Err(Error::Config(format!(
            "Invalid repository identifier: {}. Expected format: owner/repo, https://github.com/owner/repo, or git@github.com:owner/repo.git",
            input
        )))
    }

    /// Full `owner/repo` form
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Clone URL under the given remote base (e.g. `https://github.com`)
    pub fn clone_url(&self, remote_base: &str) -> String {
        format!(
            "{}/{}/{}.git",
            remote_base.trim_end_matches('/'),
            self.owner,
            self.name
        )
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let repo = RepoRef::parse("owner/repo").unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_https() {
        let repo = RepoRef::parse("https://github.com/owner/repo").unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_https_with_git() {
        let repo = RepoRef::parse("https://github.com/owner/repo.git").unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_git_ssh() {
        let repo = RepoRef::parse("git@github.com:owner/repo.git").unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(RepoRef::parse("invalid").is_err());
        assert!(RepoRef::parse("").is_err());
        assert!(RepoRef::parse("/").is_err());
    }

    #[test]
    fn test_clone_url() {
        let repo = RepoRef::parse("owner/repo").unwrap();
        assert_eq!(
            repo.clone_url("https://github.com"),
            "https://github.com/owner/repo.git"
        );
        assert_eq!(
            repo.clone_url("https://github.com/"),
            "https://github.com/owner/repo.git"
        );
    }

    #[test]
    fn test_full_name() {
        let repo = RepoRef::parse("owner/repo").unwrap();
        assert_eq!(repo.full_name(), "owner/repo");
    }
}
