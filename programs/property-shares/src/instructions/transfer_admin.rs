use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::error::PropertyShareError;
use crate::state::{Ledger, Registry};

pub fn handle_transfer_registry_admin(ctx: Context<TransferRegistryAdmin>, new_admin: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let old_admin = registry.set_admin(new_admin)?;

    emit!(AdminTransferred {
        scope: registry.key(),
        old_admin,
        new_admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn handle_transfer_instance_admin(ctx: Context<TransferInstanceAdmin>, new_admin: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let old_admin = ledger.set_admin(new_admin)?;

    emit!(AdminTransferred {
        scope: ledger.key(),
        old_admin,
        new_admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferRegistryAdmin<'info> {
    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct TransferInstanceAdmin<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    pub admin: Signer<'info>,
}

/// `scope` is the registry or ledger whose admin changed.
#[event]
pub struct AdminTransferred {
    pub scope: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
