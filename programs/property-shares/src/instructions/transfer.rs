use anchor_lang::prelude::*;

use crate::constants::HOLDING_SEED;
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger};

pub fn handle_transfer(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &ctx.accounts.ledger;
    let from = &mut ctx.accounts.from_holding;
    let to = &mut ctx.accounts.to_holding;

    ledger.check_transfer(&from.owner, to, amount, now)?;
    Holding::move_between(from, to, amount)?;

    emit!(Transferred {
        ledger: ledger.key(),
        from: from.owner,
        to: to.owner,
        authority: ctx.accounts.owner.key(),
        amount,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump = from_holding.bump,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
    )]
    pub from_holding: Account<'info, Holding>,

    #[account(
        mut,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
        constraint = to_holding.key() != from_holding.key() @ PropertyShareError::SelfTransfer,
    )]
    pub to_holding: Account<'info, Holding>,

    pub owner: Signer<'info>,
}

/// Emitted for every share movement between holdings; `authority` is the signer
/// (owner or delegate).
#[event]
pub struct Transferred {
    pub ledger: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
