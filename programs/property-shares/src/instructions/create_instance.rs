use anchor_lang::prelude::*;

use crate::constants::{
    ENTRY_SEED, ESCROW_SEED, HOLDING_SEED, LEDGER_SEED, REGISTRY_SEED, VESTING_SEED,
};
use crate::error::PropertyShareError;
use crate::state::{
    Holding, Ledger, LedgerInit, Registry, RegistryEntry, ReleasePolicy, VestingSchedule,
};

/// Creation parameters; the company and split come from the registry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateInstanceParams {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub issuer: Pubkey,
    /// Underlying SPL mint for the asset vault variant.
    pub asset: Option<Pubkey>,
    pub release_policy: ReleasePolicy,
    /// Overrides the registry default cap.
    pub max_hold_percent: Option<u8>,
}

/// Allocate and initialize one ledger, mint the genesis split, register the
/// company schedule of a vesting ledger and append it to the registry. Every
/// account is created by this instruction, so a failure anywhere leaves no trace.
pub fn handle_create_instance(
    ctx: Context<CreateInstance>,
    params: CreateInstanceParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Capture keys before taking mutable borrows.
    let registry_key = ctx.accounts.registry.key();
    let ledger_key = ctx.accounts.ledger.key();
    let escrow_key = ctx.accounts.escrow_holding.key();

    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        PropertyShareError::UnauthorizedAdmin
    );

    let ledger = &mut ctx.accounts.ledger;
    let split = ledger.initialize(
        LedgerInit {
            name: params.name,
            symbol: params.symbol,
            total_supply: params.total_supply,
            company: registry.company,
            issuer: params.issuer,
            max_hold_percent: params.max_hold_percent,
            release_policy: params.release_policy,
            asset: params.asset,
            created_at: now,
        },
        registry.company_bps,
        registry.default_max_hold_percent,
    )?;
    let entry = &mut ctx.accounts.entry;
    let index = registry.admit(registry_key, ledger_key, ledger, entry, ctx.bumps.entry)?;
    ledger.bump = ctx.bumps.ledger;

    let company_holding = &mut ctx.accounts.company_holding;
    company_holding.open(ledger_key, ledger.company, ctx.bumps.company_holding);
    let issuer_holding = &mut ctx.accounts.issuer_holding;
    issuer_holding.open(ledger_key, ledger.issuer, ctx.bumps.issuer_holding);
    let escrow_holding = &mut ctx.accounts.escrow_holding;
    escrow_holding.open(ledger_key, escrow_key, ctx.bumps.escrow_holding);
    ledger.mint_genesis(&split, company_holding, issuer_holding, escrow_holding)?;

    match (ledger.release_policy.escrows_company_share(), ctx.accounts.company_schedule.as_mut()) {
        (true, Some(schedule)) => {
            if split.company > 0 {
                let (_, bump) = Pubkey::find_program_address(
                    &[VESTING_SEED, ledger_key.as_ref(), ledger.company.as_ref()],
                    &crate::ID,
                );
                ledger.vest_company_share(escrow_holding, schedule, now, bump)?;
            }
        }
        (true, None) => return err!(PropertyShareError::ScheduleRequired),
        (false, Some(_)) => return err!(PropertyShareError::NotVestingInstance),
        (false, None) => {}
    }

    msg!(
        "instance {} created: {} ({}) supply={} company={} issuer={}",
        index,
        ledger.name,
        ledger.symbol,
        ledger.total_supply,
        split.company,
        split.issuer
    );

    emit!(InstanceCreated {
        registry: registry_key,
        ledger: ledger_key,
        index,
        issuer: ledger.issuer,
        company: ledger.company,
        name: ledger.name.clone(),
        symbol: ledger.symbol.clone(),
        total_supply: ledger.total_supply,
        company_share: split.company,
        issuer_share: split.issuer,
        release_policy: ledger.release_policy,
        max_hold_percent: ledger.max_hold_percent,
        asset: ledger.asset,
        escrow_committed: ledger.escrow_committed,
        created_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(params: CreateInstanceParams)]
pub struct CreateInstance<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        // Company and issuer rows share a seed scheme; reject before either is allocated.
        constraint = params.issuer != registry.company @ PropertyShareError::IssuerIsCompany,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = admin,
        space = 8 + RegistryEntry::SIZE,
        seeds = [ENTRY_SEED, registry.key().as_ref(), &registry.count.to_le_bytes()],
        bump
    )]
    pub entry: Box<Account<'info, RegistryEntry>>,

    #[account(
        init,
        payer = admin,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED, registry.key().as_ref(), &registry.count.to_le_bytes()],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        payer = admin,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), registry.company.as_ref()],
        bump
    )]
    pub company_holding: Account<'info, Holding>,

    #[account(
        init,
        payer = admin,
        space = 8 + Holding::SIZE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), params.issuer.as_ref()],
        bump
    )]
    pub issuer_holding: Account<'info, Holding>,

    #[account(
        init,
        payer = admin,
        space = 8 + Holding::SIZE,
        seeds = [ESCROW_SEED, ledger.key().as_ref()],
        bump
    )]
    pub escrow_holding: Account<'info, Holding>,

    /// Company schedule; required exactly when the release policy is linear vesting.
    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [VESTING_SEED, ledger.key().as_ref(), registry.company.as_ref()],
        bump
    )]
    pub company_schedule: Option<Account<'info, VestingSchedule>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct InstanceCreated {
    pub registry: Pubkey,
    pub ledger: Pubkey,
    pub index: u64,
    pub issuer: Pubkey,
    pub company: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub company_share: u64,
    pub issuer_share: u64,
    pub release_policy: ReleasePolicy,
    pub max_hold_percent: u8,
    pub asset: Option<Pubkey>,
    pub escrow_committed: u64,
    pub created_at: i64,
}
