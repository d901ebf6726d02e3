use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("{operation} amount must be greater than 0, got {amount}")]
    InvalidAmount { operation: Operation, amount: Money },

    #[error("Cannot transact on inactive account {0}")]
    InactiveAccount(String),

    #[error("Insufficient balance: requested {requested}, current balance {balance}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Balance {balance} cannot absorb {amount}")]
    BalanceOverflow { balance: Money, amount: Money },

    #[error("Invalid money amount: {0}")]
    InvalidMoney(String),

    #[error("Transfer failed: {0}")]
    TransferFailed(#[source] Box<Error>),
}

/// Balance-changing step an amount was offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit => f.write_str("Deposit"),
            Operation::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

impl Error {
    /// The failed step behind a `TransferFailed`, if this is one.
    pub fn transfer_reason(&self) -> Option<&Error> {
        match self {
            Error::TransferFailed(reason) => Some(&**reason),
            _ => None,
        }
    }
}
