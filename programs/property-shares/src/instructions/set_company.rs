use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::error::PropertyShareError;
use crate::state::Registry;

/// Instances created afterwards credit the new company; existing ones keep theirs.
pub fn handle_set_company(ctx: Context<SetCompany>, new_company: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let old_company = registry.set_company(new_company)?;

    emit!(CompanySet {
        registry: registry.key(),
        admin: registry.admin,
        old_company,
        new_company,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetCompany<'info> {
    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    pub admin: Signer<'info>,
}

#[event]
pub struct CompanySet {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub old_company: Pubkey,
    pub new_company: Pubkey,
    pub timestamp: i64,
}
