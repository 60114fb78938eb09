use anchor_lang::prelude::*;

use crate::error::PropertyShareError;
use crate::state::Ledger;

/// Existing balances above the new cap are kept; only future inbound transfers
/// are checked against it.
pub fn handle_set_max_hold_percent(ctx: Context<SetMaxHoldPercent>, percent: u8) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );
    require!(ledger.initialized, PropertyShareError::NotInitialized);

    let old_percent = ledger.set_max_hold_percent(percent)?;

    emit!(CapChanged {
        ledger: ledger.key(),
        admin: ledger.admin,
        old_percent,
        new_percent: percent,
        max_hold_amount: ledger.max_hold_amount()?,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMaxHoldPercent<'info> {
    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    pub admin: Signer<'info>,
}

#[event]
pub struct CapChanged {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub old_percent: u8,
    pub new_percent: u8,
    pub max_hold_amount: u64,
    pub timestamp: i64,
}
