use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::ASSET_VAULT_SEED;
use crate::error::PropertyShareError;
use crate::state::Ledger;

/// Pull `amount` of the underlying asset from the depositor into the ledger vault.
pub fn handle_deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<()> {
    require!(amount > 0, PropertyShareError::InvalidAmount);
    ctx.accounts.ledger.ensure_active()?;

    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        PropertyShareError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.asset_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|_| error!(PropertyShareError::ExternalCallFailed))?;

    ctx.accounts.asset_vault.reload()?;

    emit!(AssetDeposited {
        ledger: ctx.accounts.ledger.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.asset_vault.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositAsset<'info> {
    #[account(constraint = ledger.asset.is_some() @ PropertyShareError::AssetNotConfigured)]
    pub ledger: Account<'info, Ledger>,

    #[account(constraint = ledger.asset == Some(asset_mint.key()) @ PropertyShareError::InvalidAssetMint)]
    pub asset_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = depositor,
        token::mint = asset_mint,
        token::authority = ledger,
        seeds = [ASSET_VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_token_account.mint == asset_mint.key() @ PropertyShareError::InvalidAssetMint,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AssetDeposited {
    pub ledger: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}
