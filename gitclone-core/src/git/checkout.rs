//! PR checkout engine
//!
//! Turns an `owner/repo` identifier and a pull request number into a
//! local working tree with the PR head checked out on a `pr-<n>`
//! branch. One clone is kept per repository and reused across
//! invocations; the PR branch is deleted and recreated on every call
//! so it always reflects the current head of the pull request.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::remote::RepoRef;
use crate::{Error, Result};

/// Default base URL for clone and fetch remotes
const DEFAULT_REMOTE_BASE: &str = "https://github.com";

/// Engine that maintains local clones and checks out PR branches
///
/// The working-directory root and the remote base URL are injected so
/// tests can run against throwaway directories and local `file://`
/// remotes.
#[derive(Debug, Clone)]
pub struct CheckoutEngine {
    /// Root directory holding one clone per repository
    workdir: PathBuf,
    /// Base URL the clone URL is derived from
    remote_base: String,
}

impl CheckoutEngine {
    /// Create an engine rooted at the given directory
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            remote_base: DEFAULT_REMOTE_BASE.to_string(),
        }
    }

    /// Override the remote base URL
    ///
    /// Useful for GitHub Enterprise hosts or local `file://` remotes in
    /// tests.
    pub fn with_remote_base(mut self, remote_base: impl Into<String>) -> Self {
        self.remote_base = remote_base.into();
        self
    }

    /// Local clone path for a repository
    ///
    /// Keyed by the full `owner/repo` pair so two owners with the same
    /// repository name never collide on one directory.
    pub fn repo_path(&self, repo: &RepoRef) -> PathBuf {
        self.workdir.join(&repo.owner).join(&repo.name)
    }

    /// Clone (or reuse) the repository and check out the head of the
    /// given pull request on a fresh `pr-<n>` branch
    ///
    /// Returns the absolute path of the working tree. Not reentrant
    /// for a single repository; callers must serialize invocations per
    /// `owner/repo`, e.g. via [`super::RepoLocks`].
    pub fn checkout_pr(&self, repo: &RepoRef, pr_number: u64) -> Result<PathBuf> {
        let repo_path = self.repo_path(repo);
        let pr_branch = format!("pr-{}", pr_number);

        tracing::info!(
            repo = %repo,
            pr = pr_number,
            path = %repo_path.display(),
            "Checking out pull request"
        );

        if repo_path.exists() {
            tracing::debug!(path = %repo_path.display(), "Reusing existing clone");
        } else {
            self.clone_repo(repo, &repo_path)?;
        }

        self.checkout_default_branch(&repo_path);

        // Recreate the PR branch from scratch rather than trying to
        // fast-forward stale state.
        if local_branch_exists(&repo_path, &pr_branch)? {
            tracing::debug!(branch = %pr_branch, "Deleting stale PR branch");
            run_git(&repo_path, &["branch", "-D", &pr_branch])?;
        }

        let refspec = format!("pull/{}/head:{}", pr_number, pr_branch);
        run_git(&repo_path, &["fetch", "origin", &refspec])?;
        run_git(&repo_path, &["checkout", &pr_branch])?;

        let path = std::fs::canonicalize(&repo_path)?;
        tracing::info!(path = %path.display(), branch = %pr_branch, "PR checkout complete");
        Ok(path)
    }

    /// Clone the repository into the target directory
    fn clone_repo(&self, repo: &RepoRef, repo_path: &Path) -> Result<()> {
        if let Some(parent) = repo_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let url = repo.clone_url(&self.remote_base);
        tracing::info!(url = %url, "Cloning repository");

        let output = Command::new("git")
            .arg("clone")
            .arg(&url)
            .arg(repo_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

            if stderr.contains("Authentication failed") || stderr.contains("Permission denied") {
                return Err(Error::Config(format!(
                    "Authentication failed for {}. Check your credentials or repository access.",
                    url
                )));
            }

            if stderr.contains("not found") || stderr.contains("does not exist") {
                return Err(Error::Config(format!(
                    "Repository not found: {}. Check the identifier is correct.",
                    url
                )));
            }

            return Err(Error::Git {
                command: format!("clone {}", url),
                stderr,
            });
        }

        Ok(())
    }

    /// Move the tree back to its default branch before recreating the
    /// PR branch
    ///
    /// Tries `main`, then `master`. Neither existing is tolerated; the
    /// tree stays on whatever branch is current.
    fn checkout_default_branch(&self, repo_path: &Path) {
        for branch in ["main", "master"] {
            match run_git(repo_path, &["checkout", branch]) {
                Ok(()) => {
                    tracing::debug!(branch, "Checked out default branch");
                    return;
                }
                Err(e) => {
                    tracing::debug!(branch, error = %e, "Default branch candidate not available");
                }
            }
        }
        tracing::debug!("Neither main nor master found, continuing on current branch");
    }
}

/// Check whether a local branch with the given name exists
fn local_branch_exists(repo_path: &Path, branch: &str) -> Result<bool> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_path)
        .args(["branch", "--list", branch])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Git {
            command: format!("branch --list {}", branch),
            stderr,
        });
    }

    Ok(!output.stdout.iter().all(u8::is_ascii_whitespace))
}

/// Run a git subcommand in the given working tree, failing on non-zero
/// exit with the captured stderr
fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_path)
        .args(args)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Git {
            command: args.join(" "),
            stderr,
        });
    }

    Ok(())
}
