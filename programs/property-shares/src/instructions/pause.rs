use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::state::Ledger;

/// Halt every transfer of the ledger. Pausing a paused ledger is a no-op.
pub fn handle_pause(ctx: Context<Pause>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(ctx.accounts.admin.key(), ledger.admin, PropertyShareError::UnauthorizedAdmin);
    if !ledger.pause()? {
        msg!("ledger {} already paused", ledger.key());
    }
    emit!(LedgerPaused {
        ledger: ledger.key(),
        admin: ledger.admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct LedgerPaused {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}
