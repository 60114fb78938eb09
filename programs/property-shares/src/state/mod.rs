pub mod holding;
pub mod ledger;
pub mod registry;
pub mod vesting;

pub use holding::*;
pub use ledger::*;
pub use registry::*;
pub use vesting::*;
