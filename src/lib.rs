//! In-memory bank account ledger: accounts, deposits, withdrawals,
//! compensated transfers and one-way deactivation.

pub mod demo;
pub mod domain;
pub mod report;
pub mod shared;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use domain::{Account, AccountSnapshot, Error, ErrorReporter, Money, Operation};
pub use shared::SharedAccount;
