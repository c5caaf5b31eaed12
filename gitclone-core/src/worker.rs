//! Worker loop for the gitclone agent
//!
//! A single worker processes one instruction at a time: wait for a
//! mention, run the checkout engine, send the resulting string back to
//! the sender. Engine failures become `"Error: "`-prefixed replies;
//! only transport faults reach the supervisor loop, which logs them
//! and restarts after a delay. The loop never exits on its own.

use std::time::Duration;

use crate::git::{CheckoutEngine, RepoLocks};
use crate::instruction::Instruction;
use crate::listener::Listener;
use crate::Result;

/// Timing policy for the worker loop
#[derive(Debug, Clone)]
pub struct WorkerPolicy {
    /// How long a single wait for a mention may block
    pub poll_timeout: Duration,
    /// Pause between successive iterations
    pub idle_delay: Duration,
    /// Pause before retrying after a transport failure
    pub restart_delay: Duration,
}

impl Default for WorkerPolicy {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_secs(60),
            idle_delay: Duration::from_secs(2),
            restart_delay: Duration::from_secs(5),
        }
    }
}

/// Worker tying a listener to the checkout engine
pub struct Worker<L> {
    engine: CheckoutEngine,
    listener: L,
    locks: RepoLocks,
    policy: WorkerPolicy,
}

impl<L: Listener> Worker<L> {
    /// Create a worker with the default policy
    pub fn new(engine: CheckoutEngine, listener: L) -> Self {
        Self {
            engine,
            listener,
            locks: RepoLocks::new(),
            policy: WorkerPolicy::default(),
        }
    }

    /// Override the timing policy
    pub fn with_policy(mut self, policy: WorkerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run forever, restarting on transport failures
    pub async fn run(mut self) {
        loop {
            match self.handle_one().await {
                Ok(()) => tokio::time::sleep(self.policy.idle_delay).await,
                Err(e) => {
                    tracing::error!(error = %e, "Worker iteration failed, restarting");
                    tokio::time::sleep(self.policy.restart_delay).await;
                }
            }
        }
    }

    /// Receive and handle at most one mention
    ///
    /// A quiet poll and an unparseable mention are both handled
    /// silently; engine failures are folded into the reply string.
    /// Only transport errors surface to the caller.
    pub async fn handle_one(&mut self) -> Result<()> {
        let Some(mention) = self
            .listener
            .wait_for_mention(self.policy.poll_timeout)
            .await?
        else {
            tracing::debug!("No mention before timeout");
            return Ok(());
        };

        tracing::info!(
            thread = %mention.thread_id,
            sender = %mention.sender_id,
            "Received mention"
        );

        let Some(instruction) = Instruction::parse(&mention.text) else {
            // Malformed instructions get no response at all
            tracing::debug!(sender = %mention.sender_id, "Dropping unparseable mention");
            return Ok(());
        };

        let reply = self.execute(&instruction).await;
        self.listener
            .send_result(&mention.thread_id, &mention.sender_id, &reply)
            .await
    }

    /// Run the engine under the per-repository lock and shape the
    /// outcome into the reply contract: an absolute path on success,
    /// an `"Error: "`-prefixed message on failure
    async fn execute(&self, instruction: &Instruction) -> String {
        let _guard = self.locks.acquire(&instruction.repo.full_name()).await;

        match self
            .engine
            .checkout_pr(&instruction.repo, instruction.pr_number)
        {
            Ok(path) => path.display().to_string(),
            Err(e) => {
                tracing::warn!(
                    repo = %instruction.repo,
                    pr = instruction.pr_number,
                    error = %e,
                    "Checkout failed"
                );
                format!("Error: {}", e)
            }
        }
    }
}
