//! One-shot PR checkout subcommand

use clap::Args;
use gitclone_core::{CheckoutEngine, Config, RepoRef};

/// Check out a pull request and print the working tree path
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Repository identifier (owner/repo or URL)
    pub repo: String,

    /// Pull request number
    pub pr: u64,
}

impl CheckoutArgs {
    /// Execute the checkout command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let workdir = config.resolve_workdir()?;
        std::fs::create_dir_all(&workdir)?;

        let repo = RepoRef::parse(&self.repo)?;
        let engine =
            CheckoutEngine::new(workdir).with_remote_base(config.agent.remote_base.clone());

        let path = engine.checkout_pr(&repo, self.pr)?;
        println!("{}", path.display());

        Ok(())
    }
}
