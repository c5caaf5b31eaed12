//! Listener implementations for the agent binary

mod stdio;

pub use stdio::StdioListener;
