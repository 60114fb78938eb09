use anchor_lang::prelude::*;

use crate::constants::{ESCROW_SEED, VESTING_SEED};
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger, VestingSchedule};

/// Provision (or overwrite) the release schedule of `beneficiary`.
///
/// The schedule may not promise more than the escrow holds beyond what other
/// schedules already have outstanding. Overwriting restarts the schedule at the
/// current time with nothing claimed and frees its previous outstanding amount;
/// the replaced terms are published in `VestingSet`.
pub fn handle_set_schedule(
    ctx: Context<SetSchedule>,
    beneficiary: Pubkey,
    total_amount: u64,
    duration: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let schedule = &mut ctx.accounts.schedule;
    let replaced = ledger.commit_schedule(
        &ctx.accounts.escrow_holding,
        schedule,
        beneficiary,
        total_amount,
        duration,
        now,
        ctx.bumps.schedule,
    )?;

    if let Some(prev) = replaced {
        msg!(
            "schedule for {} replaced: total={} claimed={} reset",
            beneficiary,
            prev.total_amount,
            prev.claimed_amount
        );
    }

    emit!(VestingSet {
        ledger: ledger.key(),
        admin: ledger.admin,
        beneficiary,
        total_amount,
        duration,
        start_ts: now,
        replaced: replaced.is_some(),
        previous_total_amount: replaced.map_or(0, |r| r.total_amount),
        previous_claimed_amount: replaced.map_or(0, |r| r.claimed_amount),
        escrow_committed: ledger.escrow_committed,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct SetSchedule<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        seeds = [ESCROW_SEED, ledger.key().as_ref()],
        bump = escrow_holding.bump
    )]
    pub escrow_holding: Account<'info, Holding>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [VESTING_SEED, ledger.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingSet {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub duration: i64,
    pub start_ts: i64,
    pub replaced: bool,
    pub previous_total_amount: u64,
    pub previous_claimed_amount: u64,
    pub escrow_committed: u64,
}
