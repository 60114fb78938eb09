use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger};

/// Admin escape hatch: move escrowed shares to any open row of the ledger.
///
/// Not subject to pause, cap or any vesting schedule, and does not touch
/// `claimed_amount`; schedules drawing on the escrow may fail to claim afterwards.
pub fn handle_emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, PropertyShareError::InvalidAmount);

    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let escrow = &mut ctx.accounts.escrow_holding;
    let to = &mut ctx.accounts.to_holding;
    Holding::move_between(escrow, to, amount)?;

    emit!(EmergencyWithdrawn {
        ledger: ledger.key(),
        admin: ledger.admin,
        to: to.owner,
        amount,
        escrow_remaining: escrow.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, ledger.key().as_ref()],
        bump = escrow_holding.bump
    )]
    pub escrow_holding: Account<'info, Holding>,

    #[account(
        mut,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
        constraint = to_holding.key() != escrow_holding.key() @ PropertyShareError::SelfTransfer,
    )]
    pub to_holding: Account<'info, Holding>,

    pub admin: Signer<'info>,
}

#[event]
pub struct EmergencyWithdrawn {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub escrow_remaining: u64,
    pub timestamp: i64,
}
