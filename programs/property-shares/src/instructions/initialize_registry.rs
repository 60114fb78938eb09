use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_COMPANY_BPS, DEFAULT_MAX_HOLD_PERCENT, REGISTRY_SEED};
use crate::state::Registry;

pub fn handle_initialize_registry(
    ctx: Context<InitializeRegistry>,
    company: Pubkey,
    company_bps: Option<u16>,
    default_max_hold_percent: Option<u8>,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.configure(
        ctx.accounts.admin.key(),
        company,
        company_bps.unwrap_or(DEFAULT_COMPANY_BPS),
        default_max_hold_percent.unwrap_or(DEFAULT_MAX_HOLD_PERCENT),
        ctx.bumps.registry,
    )?;

    emit!(RegistryInitialized {
        registry: registry.key(),
        admin: registry.admin,
        company: registry.company,
        company_bps: registry.company_bps,
        default_max_hold_percent: registry.default_max_hold_percent,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub company: Pubkey,
    pub company_bps: u16,
    pub default_max_hold_percent: u8,
    pub timestamp: i64,
}
