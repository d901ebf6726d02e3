use std::io::Write;

use crate::domain::{Account, Error, ErrorReporter, Money};
use crate::shared::SharedAccount;

/// Scripted walk through the ledger operations on two accounts.
///
/// Failed steps are printed and handed to the reporter; they never abort the run.
#[derive(Debug)]
pub struct Demo<W, R>
where
    W: Write,
    R: ErrorReporter,
{
    out: W,
    reporter: R,
}

impl<W, R> Demo<W, R>
where
    W: Write,
    R: ErrorReporter,
{
    pub fn new(out: W, reporter: R) -> Self {
        Self { out, reporter }
    }

    pub async fn run(&mut self) -> Result<(), Error> {
        let first: SharedAccount = Account::new("123456", "Mohammad Shahriar", "Savings").into();
        let second: SharedAccount = Account::new("789012", "Tuli", "Current").into();

        writeln!(self.out, "=== Account Information ===")?;
        writeln!(self.out, "{}", first.info().await)?;
        writeln!(self.out, "{}", second.info().await)?;

        writeln!(self.out, "\n=== Transactions ===")?;
        let step = format!("deposit 5000.00 into {}", first.number());
        let res = first.deposit(Money::from_major(5000)).await;
        self.record(&step, res)?;

        let step = format!("deposit 3000.00 into {}", second.number());
        let res = second.deposit(Money::from_major(3000)).await;
        self.record(&step, res)?;

        let step = format!("withdraw 1500.00 from {}", first.number());
        let res = first.withdraw(Money::from_major(1500)).await;
        self.record(&step, res)?;

        let step = format!("transfer 1000.00 from {} to {}", first.number(), second.number());
        let res = first.transfer(&second, Money::from_major(1000)).await;
        self.record(&step, res)?;

        first.deactivate().await;
        writeln!(self.out, "deactivate {}: ok", first.number())?;

        let step = format!("deposit 100.00 into {}", first.number());
        let res = first.deposit(Money::from_major(100)).await;
        self.record(&step, res)?;

        let step = format!("withdraw 100000.00 from {}", second.number());
        let res = second.withdraw(Money::from_major(100_000)).await;
        self.record(&step, res)?;

        writeln!(self.out, "\n=== Final Balances ===")?;
        writeln!(self.out, "Account1 Balance: {}", first.balance().await)?;
        writeln!(self.out, "Account2 Balance: {}", second.balance().await)?;
        self.out.flush()?;

        Ok(())
    }

    fn record(&mut self, step: &str, result: Result<(), Error>) -> Result<(), Error> {
        match result {
            Ok(()) => writeln!(self.out, "{}: ok", step)?,
            Err(e) => {
                writeln!(self.out, "{}: failed: {}", step, e)?;
                self.reporter.report(step, &e);
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> (W, R) {
        (self.out, self.reporter)
    }
}
