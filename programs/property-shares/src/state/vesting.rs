use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::utils::{math, time};

/// Linear release terms for one beneficiary of a ledger
/// (PDA `["vesting", ledger, beneficiary]`). Funds are drawn from the ledger escrow.
#[account]
#[derive(Default)]
pub struct VestingSchedule {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    /// Amount released over the full duration.
    pub total_amount: u64,
    /// Amount already claimed; only grows, except on re-provisioning.
    pub claimed_amount: u64,
    /// Unix seconds at provisioning.
    pub start_ts: i64,
    /// Release window in seconds.
    pub duration: i64,
    pub bump: u8,
}

/// Terms replaced by a re-provisioning call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplacedSchedule {
    pub total_amount: u64,
    pub claimed_amount: u64,
    pub start_ts: i64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // ledger
        32 + // beneficiary
        8 +  // total_amount
        8 +  // claimed_amount
        8 +  // start_ts
        8 +  // duration
        1;   // bump

    pub fn is_provisioned(&self) -> bool {
        self.ledger != Pubkey::default()
    }

    /// (Re)write the schedule starting at `now_ts` with nothing claimed.
    /// Overwriting an existing schedule resets `claimed_amount`; the replaced
    /// terms are returned so the caller can publish them.
    pub fn provision(
        &mut self,
        ledger: Pubkey,
        beneficiary: Pubkey,
        total_amount: u64,
        duration: i64,
        now_ts: i64,
        bump: u8,
    ) -> std::result::Result<Option<ReplacedSchedule>, PropertyShareError> {
        if beneficiary == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        if total_amount == 0 {
            return Err(PropertyShareError::InvalidAmount);
        }
        if duration <= 0 {
            return Err(PropertyShareError::InvalidDuration);
        }
        let replaced = self.is_provisioned().then_some(ReplacedSchedule {
            total_amount: self.total_amount,
            claimed_amount: self.claimed_amount,
            start_ts: self.start_ts,
        });

        self.ledger = ledger;
        self.beneficiary = beneficiary;
        self.total_amount = total_amount;
        self.claimed_amount = 0;
        self.start_ts = now_ts;
        self.duration = duration;
        self.bump = bump;
        Ok(replaced)
    }

    /// Promised but not yet claimed.
    pub fn outstanding(&self) -> u64 {
        self.total_amount.saturating_sub(self.claimed_amount)
    }

    /// Vested but unclaimed amount at `now_ts`.
    pub fn vested_amount(&self, now_ts: i64) -> std::result::Result<u64, PropertyShareError> {
        if !self.is_provisioned() || self.duration <= 0 {
            return Ok(0);
        }
        let elapsed = time::elapsed_since(now_ts, self.start_ts);
        let duration = self.duration as u64;
        let vested = if elapsed >= duration {
            self.total_amount
        } else {
            math::mul_div_floor(self.total_amount, elapsed, duration)?
        };
        Ok(vested.saturating_sub(self.claimed_amount))
    }

    /// Record a claim of everything vested at `now_ts`; returns the amount the
    /// caller must then move out of escrow.
    pub fn claim(&mut self, now_ts: i64) -> std::result::Result<u64, PropertyShareError> {
        let amount = self.vested_amount(now_ts)?;
        if amount == 0 {
            return Err(PropertyShareError::NothingToClaim);
        }
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(PropertyShareError::MathOverflow)?;
        Ok(amount)
    }
}
