//! Worker loop subcommand

use gitclone_core::{CheckoutEngine, Config, Worker};

use crate::listener::StdioListener;

/// Start the worker loop over the stdio transport
///
/// Runs until the process is killed; transport faults are logged and
/// retried by the worker's supervisor loop.
pub async fn execute(config: &Config) -> anyhow::Result<()> {
    let workdir = config.resolve_workdir()?;
    std::fs::create_dir_all(&workdir)?;

    tracing::info!(
        agent_id = %config.agent.agent_id,
        workdir = %workdir.display(),
        "Starting gitclone agent"
    );

    let engine =
        CheckoutEngine::new(workdir).with_remote_base(config.agent.remote_base.clone());
    let listener = StdioListener::new();

    Worker::new(engine, listener)
        .with_policy(config.worker.policy())
        .run()
        .await;

    Ok(())
}
