use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Account, AccountSnapshot, Error, Money};

/// Cloneable handle to an account guarded by its own lock.
///
/// Transfers take both locks for the whole withdraw/deposit/refund sequence,
/// always in the same order, so two transfers running in opposite directions
/// cannot deadlock.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    number: Arc<str>,
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            number: Arc::from(account.number()),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub async fn deposit(&self, amount: Money) -> Result<(), Error> {
        self.inner.lock().await.deposit(amount)
    }

    pub async fn withdraw(&self, amount: Money) -> Result<(), Error> {
        self.inner.lock().await.withdraw(amount)
    }

    pub async fn deactivate(&self) {
        self.inner.lock().await.deactivate();
    }

    pub async fn balance(&self) -> Money {
        self.inner.lock().await.balance()
    }

    pub async fn is_active(&self) -> bool {
        self.inner.lock().await.is_active()
    }

    pub async fn info(&self) -> String {
        self.inner.lock().await.info()
    }

    pub async fn snapshot(&self) -> AccountSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn transfer(&self, to: &SharedAccount, amount: Money) -> Result<(), Error> {
        if Arc::ptr_eq(&self.inner, &to.inner) {
            return self.inner.lock().await.transfer_to_self(amount);
        }

        let (mut source, mut destination) = if self.lock_order() <= to.lock_order() {
            let source = self.inner.lock().await;
            let destination = to.inner.lock().await;
            (source, destination)
        } else {
            let destination = to.inner.lock().await;
            let source = self.inner.lock().await;
            (source, destination)
        };

        source.transfer(&mut destination, amount)
    }

    // Address breaks ties between distinct handles sharing an account number.
    fn lock_order(&self) -> (&str, usize) {
        (&self.number, Arc::as_ptr(&self.inner) as usize)
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EventLog;
    use futures::future::join_all;

    async fn funded(number: &str, units: i32) -> SharedAccount {
        let account = SharedAccount::new(Account::new(number, "Holder", "Savings"));
        account.deposit(Money::from_major(units)).await.unwrap();
        account
    }

    #[tokio::test]
    async fn operations_reach_the_same_account() {
        let a = funded("A", 100).await;
        let alias = a.clone();
        alias.withdraw(Money::from_major(30)).await.unwrap();
        assert_eq!(a.balance().await, Money::from_major(70));
        assert_eq!(a.number(), "A");
        assert_eq!(a.snapshot().await.balance, Money::from_major(70));

        alias.deactivate().await;
        assert!(!a.is_active().await);
        assert!(matches!(
            a.deposit(Money::from_major(1)).await,
            Err(Error::InactiveAccount(_))
        ));
        assert_eq!(a.info().await, "Account: A, Holder: Holder, Balance: 70.00");
    }

    #[tokio::test]
    async fn transfer_between_handles() {
        let a = funded("A", 3500).await;
        let b = funded("B", 3000).await;
        a.transfer(&b, Money::from_major(1000)).await.unwrap();
        assert_eq!(a.balance().await, Money::from_major(2500));
        assert_eq!(b.balance().await, Money::from_major(4000));

        // Reverse direction takes the locks in the same order.
        b.transfer(&a, Money::from_major(500)).await.unwrap();
        assert_eq!(a.balance().await, Money::from_major(3000));
        assert_eq!(b.balance().await, Money::from_major(3500));
    }

    #[tokio::test]
    async fn transfer_to_inactive_handle_refunds_source() {
        let a = funded("A", 100).await;
        let b = funded("B", 1).await;
        b.deactivate().await;

        let err = a.transfer(&b, Money::from_major(60)).await.unwrap_err();
        assert!(matches!(err.transfer_reason(), Some(Error::InactiveAccount(_))));
        assert_eq!(a.balance().await, Money::from_major(100));
        assert_eq!(b.balance().await, Money::from_major(1));
    }

    #[tokio::test]
    async fn self_transfer_is_balance_neutral() {
        let a = funded("A", 100).await;
        let same = a.clone();
        let events = EventLog::default();
        {
            let _guard = tracing::subscriber::set_default(events.subscriber());
            a.transfer(&same, Money::from_major(40)).await.unwrap();
        }
        assert_eq!(a.balance().await, Money::from_major(100));
        assert_eq!(events.count("withdrawn"), 1);
        assert_eq!(events.count("deposited"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn opposite_transfers_do_not_deadlock() {
        let a = funded("A", 1000).await;
        let b = funded("B", 1000).await;

        let tasks = (0..200).map(|i| {
            let (from, to) = if i % 2 == 0 {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            tokio::spawn(async move { from.transfer(&to, Money::from_major(3)).await })
        });

        for result in join_all(tasks).await {
            // Individual transfers may bounce on funds; none may panic.
            let _ = result.unwrap();
        }

        let total = a.balance().await.as_minor() + b.balance().await.as_minor();
        assert_eq!(total, Money::from_major(2000).as_minor());
    }
}
