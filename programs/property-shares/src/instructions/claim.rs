use anchor_lang::prelude::*;

use crate::constants::{ESCROW_SEED, HOLDING_SEED};
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger, VestingSchedule};

/// Release everything vested so far from the ledger escrow to the beneficiary.
///
/// `claimed_amount` is advanced before any balance moves; the transfer then runs
/// through the regular ledger gate (pause, cap). Any failure reverts both.
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.ledger;
    let schedule = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        schedule.beneficiary,
        PropertyShareError::UnauthorizedBeneficiary
    );

    let amount = schedule.claim(now)?;
    ledger.release_escrow(amount)?;

    let escrow = &mut ctx.accounts.escrow_holding;
    let to = &mut ctx.accounts.beneficiary_holding;
    ledger.check_transfer(&escrow.owner, to, amount, now)?;
    Holding::move_between(escrow, to, amount)?;

    msg!(
        "claimed {} for {} ({} of {})",
        amount,
        schedule.beneficiary,
        schedule.claimed_amount,
        schedule.total_amount
    );

    emit!(Claimed {
        ledger: ledger.key(),
        beneficiary: schedule.beneficiary,
        amount,
        claimed_total: schedule.claimed_amount,
        total_amount: schedule.total_amount,
        escrow_remaining: escrow.amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    #[account(mut, has_one = ledger @ PropertyShareError::ScheduleMismatch)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, ledger.key().as_ref()],
        bump = escrow_holding.bump
    )]
    pub escrow_holding: Account<'info, Holding>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), schedule.beneficiary.as_ref()],
        bump = beneficiary_holding.bump
    )]
    pub beneficiary_holding: Account<'info, Holding>,

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct Claimed {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_amount: u64,
    pub escrow_remaining: u64,
    pub timestamp: i64,
}
