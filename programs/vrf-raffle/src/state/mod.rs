pub use config::*;
pub use entry_ledger::*;
pub use raffle::*;
pub use treasury::*;

pub mod config;
pub mod entry_ledger;
pub mod raffle;
pub mod treasury;
