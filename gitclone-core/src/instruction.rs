//! Instruction extraction from free-form message text
//!
//! Inbound mentions are natural language ("please check out PR #12 of
//! coral/agents"). The worker only needs the repository identifier and
//! the PR number; anything that does not yield both is dropped without
//! a response.

use crate::git::RepoRef;

/// A parsed checkout instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Repository to operate on
    pub repo: RepoRef,
    /// Pull request number
    pub pr_number: u64,
}

impl Instruction {
    /// Extract a repository and PR number from free-form message text
    ///
    /// Scans whitespace-separated tokens for the first repository
    /// identifier (`owner/repo`, an https URL, or a `git@` URL) and the
    /// first positive integer (`12` or `#12`). PR URLs of the form
    /// `https://github.com/owner/repo/pull/12` carry both at once.
    ///
    /// Returns `None` when either part is missing.
    pub fn parse(text: &str) -> Option<Self> {
        let mut repo = None;
        let mut pr_number = None;

        for raw in text.split_whitespace() {
            let token = raw.trim_matches(|c: char| ",.;:!?()<>\"'".contains(c));
            if token.is_empty() {
                continue;
            }

            if repo.is_none() && (token.contains('/') || token.starts_with("git@")) {
                if let Ok(parsed) = RepoRef::parse(token) {
                    repo = Some(parsed);
                    if pr_number.is_none() {
                        pr_number = pull_url_number(token);
                    }
                    continue;
                }
            }

            if pr_number.is_none() {
                pr_number = positive_number(token);
            }
        }

        Some(Self {
            repo: repo?,
            pr_number: pr_number?,
        })
    }
}

/// Parse a standalone positive integer, with an optional `#` prefix
fn positive_number(token: &str) -> Option<u64> {
    let token = token.strip_prefix('#').unwrap_or(token);
    let n = token.parse::<u64>().ok()?;
    (n > 0).then_some(n)
}

/// Extract the PR number from a `.../pull/<n>` URL segment
fn pull_url_number(token: &str) -> Option<u64> {
    let (_, rest) = token.split_once("/pull/")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    positive_number(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let instruction = Instruction::parse("checkout owner/repo 5").unwrap();
        assert_eq!(instruction.repo, RepoRef::parse("owner/repo").unwrap());
        assert_eq!(instruction.pr_number, 5);
    }

    #[test]
    fn test_parse_hash_number() {
        let instruction =
            Instruction::parse("Please check out PR #12 of coral/agents.").unwrap();
        assert_eq!(instruction.repo.full_name(), "coral/agents");
        assert_eq!(instruction.pr_number, 12);
    }

    #[test]
    fn test_parse_pull_url() {
        let instruction =
            Instruction::parse("review https://github.com/owner/repo/pull/17 please").unwrap();
        assert_eq!(instruction.repo.full_name(), "owner/repo");
        assert_eq!(instruction.pr_number, 17);
    }

    #[test]
    fn test_parse_number_before_repo() {
        let instruction = Instruction::parse("PR 3 on owner/repo").unwrap();
        assert_eq!(instruction.pr_number, 3);
        assert_eq!(instruction.repo.full_name(), "owner/repo");
    }

    #[test]
    fn test_missing_number_is_dropped() {
        assert!(Instruction::parse("checkout owner/repo").is_none());
    }

    #[test]
    fn test_missing_repo_is_dropped() {
        assert!(Instruction::parse("checkout PR #12").is_none());
    }

    #[test]
    fn test_unrelated_text_is_dropped() {
        assert!(Instruction::parse("hello there").is_none());
        assert!(Instruction::parse("").is_none());
    }

    #[test]
    fn test_zero_is_not_a_pr_number() {
        assert!(Instruction::parse("checkout owner/repo 0").is_none());
    }
}
