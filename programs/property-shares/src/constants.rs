//! Program-wide constants: PDA seeds and configuration defaults.

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const ENTRY_SEED: &[u8] = b"entry";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const VESTING_SEED: &[u8] = b"vesting";
pub const ASSET_VAULT_SEED: &[u8] = b"asset_vault";

/// Denominator for the company split (basis points).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Company share of a new issuance when the registry is created without one (25%).
pub const DEFAULT_COMPANY_BPS: u16 = 2_500;

/// Per-wallet concentration cap, percent of total supply.
pub const DEFAULT_MAX_HOLD_PERCENT: u8 = 9;

/// Upper bound for `max_hold_percent`.
pub const MAX_PERCENT: u8 = 100;

/// Max byte length of an instance name.
pub const MAX_NAME_LEN: usize = 32;

/// Max byte length of an instance symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;
