//! Instruction transport interface
//!
//! The agent receives work as "mentions" on a shared message bus and
//! replies on the thread the mention arrived on. The bus itself is
//! pluggable; the worker only needs these two operations.

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;

/// An inbound message addressed to this agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Conversation thread the mention belongs to
    pub thread_id: String,
    /// Identity of the agent that sent the mention
    pub sender_id: String,
    /// Free-form message text
    pub text: String,
}

/// Transport for receiving instructions and sending results
#[async_trait]
pub trait Listener: Send {
    /// Wait up to `timeout` for the next mention
    ///
    /// Returns `Ok(None)` when the timeout elapses with no mention;
    /// errors indicate a transport fault, not an empty poll.
    async fn wait_for_mention(&mut self, timeout: Duration) -> Result<Option<Mention>>;

    /// Send a result string back on the given thread
    async fn send_result(&mut self, thread_id: &str, recipient_id: &str, text: &str)
        -> Result<()>;
}
