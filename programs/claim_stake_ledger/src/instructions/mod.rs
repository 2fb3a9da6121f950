pub mod create_ledger;
pub mod set_eligible;
pub mod claim;
pub mod stake;
pub mod unstake;
pub mod withdraw;

pub use create_ledger::*;
pub use set_eligible::*;
pub use claim::*;
pub use stake::*;
pub use unstake::*;
pub use withdraw::*;
