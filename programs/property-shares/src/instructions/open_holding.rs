use anchor_lang::prelude::*;

use crate::constants::HOLDING_SEED;
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger};

/// Rows must exist before they can receive shares; anyone may pay for one.
pub fn handle_open_holding(ctx: Context<OpenHolding>, owner: Pubkey) -> Result<()> {
    require!(owner != Pubkey::default(), PropertyShareError::InvalidPubkey);
    require!(ctx.accounts.ledger.initialized, PropertyShareError::NotInitialized);

    let ledger_key = ctx.accounts.ledger.key();
    let holding = &mut ctx.accounts.holding;
    holding.open(ledger_key, owner, ctx.bumps.holding);

    emit!(HoldingOpened {
        ledger: ledger_key,
        owner,
        holding: holding.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenHolding<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = payer,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), owner.as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HoldingOpened {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub holding: Pubkey,
    pub timestamp: i64,
}
