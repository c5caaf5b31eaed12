//! Stdio transport for local runs
//!
//! Reads one instruction per line from stdin and writes replies to
//! stdout. Useful for driving the agent by hand or from a pipe; a
//! message-bus adapter plugs in through the same [`Listener`] trait.

use std::time::Duration;

use async_trait::async_trait;
use gitclone_core::{Error, Listener, Mention, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Listener backed by the process's stdin and stdout
pub struct StdioListener {
    lines: Lines<BufReader<Stdin>>,
}

impl StdioListener {
    /// Create a listener over the process's stdin
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdioListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for StdioListener {
    async fn wait_for_mention(&mut self, timeout: Duration) -> Result<Option<Mention>> {
        match tokio::time::timeout(timeout, self.lines.next_line()).await {
            // Quiet poll
            Err(_) => Ok(None),
            Ok(Ok(Some(line))) => {
                let text = line.trim().to_string();
                if text.is_empty() {
                    return Ok(None);
                }
                Ok(Some(Mention {
                    thread_id: "stdio".to_string(),
                    sender_id: "local".to_string(),
                    text,
                }))
            }
            // EOF surfaces as a transport fault so the supervisor backs
            // off instead of spinning
            Ok(Ok(None)) => Err(Error::Listener("stdin closed".to_string())),
            Ok(Err(e)) => Err(Error::Io(e)),
        }
    }

    async fn send_result(
        &mut self,
        _thread_id: &str,
        _recipient_id: &str,
        text: &str,
    ) -> Result<()> {
        // Single local conversation; routing identifiers are not needed
        println!("{}", text);
        Ok(())
    }
}
