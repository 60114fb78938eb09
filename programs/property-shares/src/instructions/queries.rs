//! Read-only instructions; results are returned as program return data.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{ASSET_VAULT_SEED, ENTRY_SEED, REGISTRY_SEED};
use crate::error::PropertyShareError;
use crate::state::{InstanceMetadata, Ledger, Registry, RegistryEntry};

pub fn handle_registry_count(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.count)
}

pub fn handle_get_instance(ctx: Context<GetInstance>, _index: u64) -> Result<InstanceMetadata> {
    Ok(ctx.accounts.entry.metadata.clone())
}

/// True only for a ledger account this registry created.
pub fn handle_is_registered(ctx: Context<IsRegistered>) -> Result<bool> {
    let candidate = &ctx.accounts.candidate;
    if candidate.owner != &crate::ID {
        return Ok(false);
    }
    let data = candidate.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    let ledger = match Ledger::try_deserialize(&mut bytes) {
        Ok(ledger) => ledger,
        Err(_) => return Ok(false),
    };
    let registry = &ctx.accounts.registry;
    Ok(registry.recognizes(&registry.key(), &candidate.key(), &ledger))
}

/// Underlying asset held by the ledger vault.
pub fn handle_asset_balance(ctx: Context<AssetBalance>) -> Result<u64> {
    Ok(ctx.accounts.asset_vault.amount)
}

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct GetInstance<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = index < registry.count @ PropertyShareError::IndexOutOfRange,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        seeds = [ENTRY_SEED, registry.key().as_ref(), &index.to_le_bytes()],
        bump = entry.bump
    )]
    pub entry: Box<Account<'info, RegistryEntry>>,
}

#[derive(Accounts)]
pub struct IsRegistered<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: Any account may be asked about; ownership and layout are checked in-handler.
    pub candidate: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct AssetBalance<'info> {
    #[account(constraint = ledger.asset.is_some() @ PropertyShareError::AssetNotConfigured)]
    pub ledger: Account<'info, Ledger>,

    #[account(seeds = [ASSET_VAULT_SEED, ledger.key().as_ref()], bump)]
    pub asset_vault: Account<'info, TokenAccount>,
}
