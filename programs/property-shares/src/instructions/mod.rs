pub mod initialize_registry;
pub mod set_company;
pub mod transfer_admin;
pub mod create_instance;
pub mod queries;
pub mod open_holding;
pub mod transfer;
pub mod approve;
pub mod transfer_from;
pub mod set_exempt;
pub mod set_max_hold_percent;
pub mod pause;
pub mod unpause;
pub mod set_schedule;
pub mod emit_vesting_quote;
pub mod claim;
pub mod emergency_withdraw;
pub mod deposit_asset;
pub mod withdraw_asset;

pub use initialize_registry::*;
pub use set_company::*;
pub use transfer_admin::*;
pub use create_instance::*;
pub use queries::*;
pub use open_holding::*;
pub use transfer::*;
pub use approve::*;
pub use transfer_from::*;
pub use set_exempt::*;
pub use set_max_hold_percent::*;
pub use pause::*;
pub use unpause::*;
pub use set_schedule::*;
pub use emit_vesting_quote::*;
pub use claim::*;
pub use emergency_withdraw::*;
pub use deposit_asset::*;
pub use withdraw_asset::*;
