use serde::Serialize;

use crate::domain::{Error, Money, Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: String, // unique, fixed at construction
    holder: String,
    kind: String,   // free-form, e.g. "Savings"
    balance: Money, // never negative
    active: bool,   // false is terminal
}

/// Read-only view of an account at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSnapshot {
    pub number: String,
    pub holder: String,
    pub kind: String,
    pub balance: Money,
    pub active: bool,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            kind: kind.into(),
            balance: Money::ZERO,
            active: true,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn info(&self) -> String {
        format!(
            "Account: {}, Holder: {}, Balance: {}",
            self.number, self.holder, self.balance
        )
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            number: self.number.clone(),
            holder: self.holder.clone(),
            kind: self.kind.clone(),
            balance: self.balance,
            active: self.active,
        }
    }

    fn ensure_transactable(&self, operation: Operation, amount: Money) -> Result<(), Error> {
        if !amount.is_positive() {
            return Err(Error::InvalidAmount { operation, amount });
        }
        if !self.active {
            return Err(Error::InactiveAccount(self.number.clone()));
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), Error> {
        self.ensure_transactable(Operation::Deposit, amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;

        tracing::info!(account = %self.number, %amount, balance = %self.balance, "deposited");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), Error> {
        self.ensure_transactable(Operation::Withdrawal, amount)?;

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        // amount <= balance, cannot underflow
        self.balance = Money::from_minor(self.balance.as_minor() - amount.as_minor());

        tracing::info!(account = %self.number, %amount, balance = %self.balance, "withdrawn");
        Ok(())
    }

    /// Moves `amount` to `destination`. If the deposit leg fails the withdrawn
    /// funds are credited straight back, bypassing the deposit rules.
    pub fn transfer(&mut self, destination: &mut Account, amount: Money) -> Result<(), Error> {
        self.withdraw(amount)
            .map_err(|e| Error::TransferFailed(Box::new(e)))?;

        if let Err(e) = destination.deposit(amount) {
            self.refund(amount);
            return Err(Error::TransferFailed(Box::new(e)));
        }

        tracing::info!(
            from = %self.number,
            to = %destination.number,
            %amount,
            holder = %destination.holder,
            "transferred"
        );
        Ok(())
    }

    /// Transfer where source and destination are the same account: the
    /// withdrawal and deposit both land here, leaving the balance as it was.
    pub(crate) fn transfer_to_self(&mut self, amount: Money) -> Result<(), Error> {
        self.withdraw(amount)
            .map_err(|e| Error::TransferFailed(Box::new(e)))?;

        if let Err(e) = self.deposit(amount) {
            self.refund(amount);
            return Err(Error::TransferFailed(Box::new(e)));
        }

        tracing::info!(from = %self.number, to = %self.number, %amount, "transferred");
        Ok(())
    }

    // Only ever returns funds this account just gave up, so the sum fits.
    fn refund(&mut self, amount: Money) {
        self.balance = Money::from_minor(self.balance.as_minor() + amount.as_minor());
        tracing::debug!(
            account = %self.number,
            %amount,
            balance = %self.balance,
            "transfer refunded"
        );
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        tracing::info!(account = %self.number, "deactivated");
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.info())
    }
}
