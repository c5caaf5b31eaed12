//! CLI subcommands

mod checkout;
pub mod run;

pub use checkout::CheckoutArgs;
