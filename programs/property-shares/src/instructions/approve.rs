use anchor_lang::prelude::*;

use crate::constants::HOLDING_SEED;
use crate::error::PropertyShareError;
use crate::state::{Holding, Ledger};

/// Set (or with `amount == 0`, clear) the single delegate of the caller's row.
pub fn handle_approve(ctx: Context<Approve>, delegate: Pubkey, amount: u64) -> Result<()> {
    require!(ctx.accounts.ledger.initialized, PropertyShareError::NotInitialized);
    if amount > 0 {
        require!(delegate != Pubkey::default(), PropertyShareError::InvalidPubkey);
        require!(
            delegate != ctx.accounts.owner.key(),
            PropertyShareError::InvalidPubkey
        );
    }

    let holding = &mut ctx.accounts.holding;
    holding.approve(delegate, amount);

    emit!(Approval {
        ledger: ctx.accounts.ledger.key(),
        owner: holding.owner,
        delegate: holding.delegate,
        amount: holding.delegated_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Approve<'info> {
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump = holding.bump,
        has_one = ledger @ PropertyShareError::HoldingMismatch,
    )]
    pub holding: Account<'info, Holding>,

    pub owner: Signer<'info>,
}

#[event]
pub struct Approval {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
