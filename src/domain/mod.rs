pub mod account;
pub mod error;
pub mod money;
pub mod traits;

pub use account::{Account, AccountSnapshot};
pub use error::{Error, Operation};
pub use money::Money;
pub use traits::ErrorReporter;
