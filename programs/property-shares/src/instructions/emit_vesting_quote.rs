use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::state::{Ledger, VestingSchedule};

/// Read-only: claimable amount of a schedule right now.
pub fn handle_vested_amount(ctx: Context<EmitVestingQuote>) -> Result<u64> {
    let schedule = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;
    let releasable = schedule.vested_amount(now)?;

    emit!(VestingQuote {
        ledger: schedule.ledger,
        beneficiary: schedule.beneficiary,
        total_amount: schedule.total_amount,
        claimed_amount: schedule.claimed_amount,
        releasable,
        timestamp: now,
    });

    Ok(releasable)
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(has_one = ledger @ PropertyShareError::ScheduleMismatch)]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub releasable: u64,
    pub timestamp: i64,
}
