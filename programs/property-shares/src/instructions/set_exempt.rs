use anchor_lang::prelude::*;

use crate::constants::HOLDING_SEED;
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger};

/// Add or remove a principal from the cap-exempt set, opening its row if needed.
pub fn handle_set_exempt(ctx: Context<SetExempt>, principal: Pubkey, exempt: bool) -> Result<()> {
    require!(principal != Pubkey::default(), PropertyShareError::InvalidPubkey);

    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );
    require!(ledger.initialized, PropertyShareError::NotInitialized);

    let holding = &mut ctx.accounts.holding;
    if !holding.is_open() {
        holding.open(ledger.key(), principal, ctx.bumps.holding);
    }
    holding.exempt = exempt;

    emit!(ExemptionChanged {
        ledger: ledger.key(),
        admin: ledger.admin,
        principal,
        exempt,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(principal: Pubkey)]
pub struct SetExempt<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), principal.as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ExemptionChanged {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub principal: Pubkey,
    pub exempt: bool,
    pub timestamp: i64,
}
