use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

use state::InstanceMetadata;

declare_id!("XU3a2o2NqMaeD7ysUuePAy81Sgt6PywQzjrn9CvyDG5");

#[program]
pub mod property_shares {
    use super::*;

    // Registry / factory

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        company: Pubkey,
        company_bps: Option<u16>,
        default_max_hold_percent: Option<u8>,
    ) -> Result<()> {
        instructions::initialize_registry::handle_initialize_registry(
            ctx,
            company,
            company_bps,
            default_max_hold_percent,
        )
    }

    pub fn set_company(ctx: Context<SetCompany>, new_company: Pubkey) -> Result<()> {
        instructions::set_company::handle_set_company(ctx, new_company)
    }

    pub fn transfer_registry_admin(
        ctx: Context<TransferRegistryAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_admin::handle_transfer_registry_admin(ctx, new_admin)
    }

    pub fn create_instance(
        ctx: Context<CreateInstance>,
        params: CreateInstanceParams,
    ) -> Result<()> {
        instructions::create_instance::handle_create_instance(ctx, params)
    }

    pub fn registry_count(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::queries::handle_registry_count(ctx)
    }

    pub fn get_instance(ctx: Context<GetInstance>, index: u64) -> Result<InstanceMetadata> {
        instructions::queries::handle_get_instance(ctx, index)
    }

    pub fn is_registered(ctx: Context<IsRegistered>) -> Result<bool> {
        instructions::queries::handle_is_registered(ctx)
    }

    // Ledger

    pub fn open_holding(ctx: Context<OpenHolding>, owner: Pubkey) -> Result<()> {
        instructions::open_holding::handle_open_holding(ctx, owner)
    }

    pub fn transfer(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
        instructions::transfer::handle_transfer(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, delegate: Pubkey, amount: u64) -> Result<()> {
        instructions::approve::handle_approve(ctx, delegate, amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from::handle_transfer_from(ctx, amount)
    }

    pub fn set_exempt(ctx: Context<SetExempt>, principal: Pubkey, exempt: bool) -> Result<()> {
        instructions::set_exempt::handle_set_exempt(ctx, principal, exempt)
    }

    pub fn set_max_hold_percent(ctx: Context<SetMaxHoldPercent>, percent: u8) -> Result<()> {
        instructions::set_max_hold_percent::handle_set_max_hold_percent(ctx, percent)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::handle_pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::handle_unpause(ctx)
    }

    pub fn transfer_instance_admin(
        ctx: Context<TransferInstanceAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_admin::handle_transfer_instance_admin(ctx, new_admin)
    }

    // Vesting

    pub fn set_schedule(
        ctx: Context<SetSchedule>,
        beneficiary: Pubkey,
        total_amount: u64,
        duration: i64,
    ) -> Result<()> {
        instructions::set_schedule::handle_set_schedule(ctx, beneficiary, total_amount, duration)
    }

    pub fn vested_amount(ctx: Context<EmitVestingQuote>) -> Result<u64> {
        instructions::emit_vesting_quote::handle_vested_amount(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handle_claim(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::handle_emergency_withdraw(ctx, amount)
    }

    // Underlying asset

    pub fn deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<()> {
        instructions::deposit_asset::handle_deposit_asset(ctx, amount)
    }

    pub fn withdraw_asset(ctx: Context<WithdrawAsset>, amount: u64) -> Result<()> {
        instructions::withdraw_asset::handle_withdraw_asset(ctx, amount)
    }

    pub fn asset_balance(ctx: Context<AssetBalance>) -> Result<u64> {
        instructions::queries::handle_asset_balance(ctx)
    }
}
