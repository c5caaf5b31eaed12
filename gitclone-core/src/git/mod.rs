//! Git operations for cloning repositories and checking out PR branches

mod checkout;
mod lock;
mod remote;

#[cfg(test)]
pub(crate) mod testutil;

pub use checkout::CheckoutEngine;
pub use lock::RepoLocks;
pub use remote::RepoRef;
