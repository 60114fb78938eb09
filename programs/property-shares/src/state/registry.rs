use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, LEDGER_SEED, MAX_NAME_LEN, MAX_PERCENT, MAX_SYMBOL_LEN};
use crate::error::PropertyShareError;
use crate::state::Ledger;

/// Factory configuration and instance counter (singleton PDA `["registry"]`).
#[account]
#[derive(Default)]
pub struct Registry {
    /// Admin authority of the factory.
    pub admin: Pubkey,
    /// Platform principal credited with the company share of every new instance.
    pub company: Pubkey,
    /// Company share in basis points.
    pub company_bps: u16,
    /// Cap percent applied when a creation call does not override it.
    pub default_max_hold_percent: u8,
    /// Number of instances created; also the index of the next one.
    pub count: u64,
    pub bump: u8,
}

impl Registry {
    pub const SIZE: usize =
        32 + // admin
        32 + // company
        2 +  // company_bps
        1 +  // default_max_hold_percent
        8 +  // count
        1;   // bump

    pub fn configure(
        &mut self,
        admin: Pubkey,
        company: Pubkey,
        company_bps: u16,
        default_max_hold_percent: u8,
        bump: u8,
    ) -> std::result::Result<(), PropertyShareError> {
        if admin == Pubkey::default() || company == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        if company_bps as u64 > BPS_DENOMINATOR {
            return Err(PropertyShareError::InvalidCompanyShare);
        }
        if default_max_hold_percent > MAX_PERCENT {
            return Err(PropertyShareError::InvalidPercent);
        }
        self.admin = admin;
        self.company = company;
        self.company_bps = company_bps;
        self.default_max_hold_percent = default_max_hold_percent;
        self.count = 0;
        self.bump = bump;
        Ok(())
    }

    /// Returns the previous company.
    pub fn set_company(&mut self, new_company: Pubkey) -> std::result::Result<Pubkey, PropertyShareError> {
        if new_company == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.company, new_company))
    }

    /// Returns the previous admin.
    pub fn set_admin(&mut self, new_admin: Pubkey) -> std::result::Result<Pubkey, PropertyShareError> {
        if new_admin == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }

    /// Append one instance; returns its index.
    pub fn record_instance(&mut self) -> std::result::Result<u64, PropertyShareError> {
        let index = self.count;
        self.count = self
            .count
            .checked_add(1)
            .ok_or(PropertyShareError::MathOverflow)?;
        Ok(index)
    }

    /// Append an initialized ledger: assign its index, registry back-reference
    /// and admin, and fill its list entry. Returns the index.
    pub fn admit(
        &mut self,
        registry_key: Pubkey,
        ledger_key: Pubkey,
        ledger: &mut Ledger,
        entry: &mut RegistryEntry,
        entry_bump: u8,
    ) -> std::result::Result<u64, PropertyShareError> {
        if !ledger.initialized {
            return Err(PropertyShareError::NotInitialized);
        }
        let index = self.record_instance()?;
        ledger.registry = registry_key;
        ledger.index = index;
        ledger.admin = self.admin;

        entry.registry = registry_key;
        entry.index = index;
        entry.metadata = InstanceMetadata::of(ledger_key, ledger);
        entry.bump = entry_bump;
        Ok(index)
    }

    /// O(1) membership: `candidate` is a ledger this registry created.
    pub fn recognizes(&self, registry: &Pubkey, candidate: &Pubkey, ledger: &Ledger) -> bool {
        if !ledger.initialized || ledger.registry != *registry || ledger.index >= self.count {
            return false;
        }
        Pubkey::create_program_address(
            &[
                LEDGER_SEED,
                registry.as_ref(),
                &ledger.index.to_le_bytes(),
                &[ledger.bump],
            ],
            &crate::ID,
        )
        .map(|expected| expected == *candidate)
        .unwrap_or(false)
    }
}

/// Immutable description of one created instance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceMetadata {
    pub ledger: Pubkey,
    pub issuer: Pubkey,
    pub company: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub created_at: i64,
}

impl InstanceMetadata {
    pub const SIZE: usize =
        32 + // ledger
        32 + // issuer
        32 + // company
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        8 +  // total_supply
        8;   // created_at

    pub fn of(ledger_key: Pubkey, ledger: &Ledger) -> Self {
        Self {
            ledger: ledger_key,
            issuer: ledger.issuer,
            company: ledger.company,
            name: ledger.name.clone(),
            symbol: ledger.symbol.clone(),
            total_supply: ledger.total_supply,
            created_at: ledger.created_at,
        }
    }
}

/// Slot `index` of the registry's append-only list (PDA `["entry", registry, index_le]`).
#[account]
#[derive(Default)]
pub struct RegistryEntry {
    pub registry: Pubkey,
    pub index: u64,
    pub metadata: InstanceMetadata,
    pub bump: u8,
}

impl RegistryEntry {
    pub const SIZE: usize = 32 + 8 + InstanceMetadata::SIZE + 1;
}
