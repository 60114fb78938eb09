use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ASSET_VAULT_SEED, LEDGER_SEED};
use crate::error::PropertyShareError;
use crate::state::Ledger;

/// Admin transfer out of the ledger's asset vault, signed by the ledger PDA.
pub fn handle_withdraw_asset(ctx: Context<WithdrawAsset>, amount: u64) -> Result<()> {
    require!(amount > 0, PropertyShareError::InvalidAmount);

    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ledger.admin,
        PropertyShareError::UnauthorizedAdmin
    );
    require!(
        ctx.accounts.asset_vault.amount >= amount,
        PropertyShareError::InsufficientVaultBalance
    );

    let index_bytes = ledger.index.to_le_bytes();
    let bump = [ledger.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, ledger.registry.as_ref(), &index_bytes, &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.asset_vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| error!(PropertyShareError::ExternalCallFailed))?;

    ctx.accounts.asset_vault.reload()?;

    emit!(AssetWithdrawn {
        ledger: ctx.accounts.ledger.key(),
        admin: ctx.accounts.admin.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        vault_balance: ctx.accounts.asset_vault.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawAsset<'info> {
    #[account(constraint = ledger.asset.is_some() @ PropertyShareError::AssetNotConfigured)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [ASSET_VAULT_SEED, ledger.key().as_ref()],
        bump,
        constraint = Some(asset_vault.mint) == ledger.asset @ PropertyShareError::InvalidAssetMint,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == asset_vault.mint @ PropertyShareError::InvalidAssetMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AssetWithdrawn {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}
