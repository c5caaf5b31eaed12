//! Gitclone Core - PR checkout engine for the gitclone agent
//!
//! This crate provides the core of an agent that clones GitHub
//! repositories and checks out the branch belonging to a specific pull
//! request on request. The transport delivering those requests is
//! pluggable via the [`Listener`] trait; the worker loop ties the two
//! together.

pub mod config;
pub mod error;
pub mod git;
pub mod instruction;
pub mod listener;
pub mod worker;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{CheckoutEngine, RepoLocks, RepoRef};
pub use instruction::Instruction;
pub use listener::{Listener, Mention};
pub use worker::{Worker, WorkerPolicy};
