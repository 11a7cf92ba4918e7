pub mod auth_store;
pub mod ledger_store;

pub use auth_store::AuthStore;
pub use ledger_store::{FetchSeq, LedgerCollection, PendingEdit};
