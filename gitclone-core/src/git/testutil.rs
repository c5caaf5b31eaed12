//! Shared git fixtures for tests
//!
//! Builds a bare "origin" repository under a temp directory together
//! with a seed working repo used to push commits and `refs/pull/<n>/head`
//! refs into it, so the engine can be exercised against local `file://`
//! remotes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run git in a directory, panicking on failure; returns trimmed stdout
pub(crate) fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a bare origin at `<temp>/remote/owner/repo.git` plus a seed
/// working repo with one commit on `default_branch`
///
/// Returns the remote base URL for the engine and the seed repo path.
pub(crate) fn setup_upstream(temp: &Path, default_branch: &str) -> (String, PathBuf) {
    let bare = temp.join("remote").join("owner").join("repo.git");
    fs::create_dir_all(&bare).unwrap();
    git(&bare, &["init", "--bare", "-b", default_branch]);

    let seed = temp.join("seed");
    fs::create_dir_all(&seed).unwrap();
    git(&seed, &["init", "-b", default_branch]);
    git(&seed, &["config", "user.name", "tester"]);
    git(&seed, &["config", "user.email", "tester@example.com"]);

    fs::write(seed.join("README.md"), "hello\n").unwrap();
    git(&seed, &["add", "."]);
    git(&seed, &["commit", "-m", "initial commit"]);

    let origin = format!("file://{}", bare.display());
    git(&seed, &["remote", "add", "origin", &origin]);
    git(&seed, &["push", "origin", default_branch]);

    let remote_base = format!("file://{}", temp.join("remote").display());
    (remote_base, seed)
}

/// Push a commit to `refs/pull/<n>/head` on the origin, returning its
/// SHA
pub(crate) fn push_pr(seed: &Path, default_branch: &str, pr_number: u64, content: &str) -> String {
    git(seed, &["checkout", "-B", "feature", default_branch]);
    fs::write(seed.join("feature.txt"), content).unwrap();
    git(seed, &["add", "."]);
    git(seed, &["commit", "-m", "feature change"]);
    let sha = git(seed, &["rev-parse", "HEAD"]);
    let refspec = format!("HEAD:refs/pull/{}/head", pr_number);
    git(seed, &["push", "-f", "origin", &refspec]);
    git(seed, &["checkout", default_branch]);
    sha
}

/// Name of the branch currently checked out
pub(crate) fn current_branch(repo_path: &Path) -> String {
    git(repo_path, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Resolve a reference to a commit SHA
pub(crate) fn rev_parse(repo_path: &Path, reference: &str) -> String {
    git(repo_path, &["rev-parse", reference])
}
