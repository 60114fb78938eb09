use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::state::Ledger;

pub fn handle_unpause(ctx: Context<Unpause>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(ctx.accounts.admin.key(), ledger.admin, PropertyShareError::UnauthorizedAdmin);
    if !ledger.unpause()? {
        msg!("ledger {} was not paused", ledger.key());
    }
    emit!(LedgerUnpaused {
        ledger: ledger.key(),
        admin: ledger.admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct LedgerUnpaused {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}
