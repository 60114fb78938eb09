use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::instructions::transfer::Transferred;
use crate::state::{Holding, Ledger};

/// Delegate-driven transfer (swap adapters). Same ledger gate as `transfer`;
/// the allowance is spent only after the balances moved.
pub fn handle_transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let delegate = ctx.accounts.delegate.key();
    let ledger = &ctx.accounts.ledger;
    let from = &mut ctx.accounts.from_holding;
    let to = &mut ctx.accounts.to_holding;

    from.check_allowance(&delegate, amount)?;
    ledger.check_transfer(&from.owner, to, amount, now)?;
    Holding::move_between(from, to, amount)?;
    from.spend_allowance(&delegate, amount)?;

    emit!(Transferred {
        ledger: ledger.key(),
        from: from.owner,
        to: to.owner,
        authority: delegate,
        amount,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
    )]
    pub from_holding: Account<'info, Holding>,

    #[account(
        mut,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
        constraint = to_holding.key() != from_holding.key() @ PropertyShareError::SelfTransfer,
    )]
    pub to_holding: Account<'info, Holding>,

    pub delegate: Signer<'info>,
}
