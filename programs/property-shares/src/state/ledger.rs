use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_PERCENT, MAX_SYMBOL_LEN};
use crate::error::PropertyShareError;
use crate::state::{Holding, ReplacedSchedule, VestingSchedule};
use crate::utils::math::{self, GenesisSplit};
use crate::utils::time;

/// Release policy applied to the company principal of a ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Company share is freely transferable.
    NoLock,
    /// Outbound transfers from the company fail until `unlock_ts` (inclusive).
    HardLockUntil { unlock_ts: i64 },
    /// Company share sits in the ledger escrow and is released to the company
    /// over `duration` seconds through `VestingSchedule` claims.
    LinearVesting { duration: i64 },
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        Self::NoLock
    }
}

impl ReleasePolicy {
    /// Borsh tag + largest payload.
    pub const SIZE: usize = 1 + 8;

    pub fn validate(&self) -> std::result::Result<(), PropertyShareError> {
        match self {
            Self::HardLockUntil { unlock_ts } if *unlock_ts <= 0 => {
                Err(PropertyShareError::InvalidTimestamp)
            }
            Self::LinearVesting { duration } if *duration <= 0 => {
                Err(PropertyShareError::InvalidDuration)
            }
            _ => Ok(()),
        }
    }

    pub fn locks_at(&self, now_ts: i64) -> bool {
        match self {
            Self::HardLockUntil { unlock_ts } => !time::has_passed(now_ts, *unlock_ts),
            _ => false,
        }
    }

    pub fn escrows_company_share(&self) -> bool {
        matches!(self, Self::LinearVesting { .. })
    }

    pub fn vesting_duration(&self) -> Option<i64> {
        match self {
            Self::LinearVesting { duration } => Some(*duration),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerState {
    Uninitialized,
    Active,
    Paused,
}

/// Inputs of the one-time ledger initialization.
#[derive(Clone, Debug)]
pub struct LedgerInit {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub company: Pubkey,
    pub issuer: Pubkey,
    pub max_hold_percent: Option<u8>,
    pub release_policy: ReleasePolicy,
    pub asset: Option<Pubkey>,
    pub created_at: i64,
}

/// One fixed-supply issuance (PDA `["ledger", registry, index_le]`).
#[account]
#[derive(Default)]
pub struct Ledger {
    /// Registry that created this ledger.
    pub registry: Pubkey,
    /// Position in the registry's append-only list.
    pub index: u64,
    /// Admin capability for this instance.
    pub admin: Pubkey,
    /// Property owner (majority share).
    pub issuer: Pubkey,
    /// Platform principal (minority share, subject to `release_policy`).
    pub company: Pubkey,
    pub name: String,
    pub symbol: String,
    /// Fixed supply minted at genesis; never changes.
    pub total_supply: u64,
    /// Per-wallet cap, percent of `total_supply`.
    pub max_hold_percent: u8,
    pub paused: bool,
    /// Set exactly once by `initialize`.
    pub initialized: bool,
    pub release_policy: ReleasePolicy,
    /// Escrow promised to schedules and not yet claimed.
    pub escrow_committed: u64,
    /// Underlying SPL mint for the asset vault, if any.
    pub asset: Option<Pubkey>,
    pub created_at: i64,
    pub bump: u8,
}

impl Ledger {
    pub const SIZE: usize =
        32 + // registry
        8 +  // index
        32 + // admin
        32 + // issuer
        32 + // company
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        8 +  // total_supply
        1 +  // max_hold_percent
        1 +  // paused
        1 +  // initialized
        ReleasePolicy::SIZE + // release_policy
        8 +  // escrow_committed
        1 + 32 + // asset
        8 +  // created_at
        1;   // bump

    /// Validate and apply the genesis configuration, returning the split to mint.
    /// Refuses to run on an already initialized ledger.
    pub fn initialize(
        &mut self,
        init: LedgerInit,
        company_bps: u16,
        default_max_hold_percent: u8,
    ) -> std::result::Result<GenesisSplit, PropertyShareError> {
        if self.initialized {
            return Err(PropertyShareError::AlreadyInitialized);
        }
        if init.company == Pubkey::default() || init.issuer == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        if init.company == init.issuer {
            return Err(PropertyShareError::IssuerIsCompany);
        }
        if init.total_supply == 0 {
            return Err(PropertyShareError::InvalidSupply);
        }
        if init.name.is_empty() || init.name.len() > MAX_NAME_LEN {
            return Err(PropertyShareError::InvalidName);
        }
        if init.symbol.is_empty() || init.symbol.len() > MAX_SYMBOL_LEN {
            return Err(PropertyShareError::InvalidSymbol);
        }
        if init.asset == Some(Pubkey::default()) {
            return Err(PropertyShareError::InvalidAssetMint);
        }
        init.release_policy.validate()?;

        let max_hold_percent = init.max_hold_percent.unwrap_or(default_max_hold_percent);
        if max_hold_percent > MAX_PERCENT {
            return Err(PropertyShareError::InvalidPercent);
        }
        let split = math::genesis_split(init.total_supply, company_bps)?;

        self.issuer = init.issuer;
        self.company = init.company;
        self.name = init.name;
        self.symbol = init.symbol;
        self.total_supply = init.total_supply;
        self.max_hold_percent = max_hold_percent;
        self.paused = false;
        self.release_policy = init.release_policy;
        self.escrow_committed = 0;
        self.asset = init.asset;
        self.created_at = init.created_at;
        self.initialized = true;

        Ok(split)
    }

    /// Credit the genesis split to freshly opened rows. The issuer row always
    /// receives its share; the company share lands in the escrow under linear
    /// vesting and in the company row otherwise. All three rows are cap-exempt.
    pub fn mint_genesis(
        &self,
        split: &GenesisSplit,
        company: &mut Holding,
        issuer: &mut Holding,
        escrow: &mut Holding,
    ) -> std::result::Result<(), PropertyShareError> {
        if !self.initialized {
            return Err(PropertyShareError::NotInitialized);
        }
        if !company.is_open()
            || company.ledger != issuer.ledger
            || company.ledger != escrow.ledger
            || company.owner != self.company
            || issuer.owner != self.issuer
        {
            return Err(PropertyShareError::HoldingMismatch);
        }
        if company.amount != 0 || issuer.amount != 0 || escrow.amount != 0 {
            return Err(PropertyShareError::AlreadyInitialized);
        }

        company.exempt = true;
        issuer.exempt = true;
        escrow.exempt = true;
        issuer.amount = split.issuer;
        if self.release_policy.escrows_company_share() {
            escrow.amount = split.company;
        } else {
            company.amount = split.company;
        }
        Ok(())
    }

    /// Commitment after swapping a schedule's outstanding `released` for
    /// `reserved`; fails when it would exceed `escrow_balance`.
    pub fn escrow_commitment_after(
        &self,
        escrow_balance: u64,
        released: u64,
        reserved: u64,
    ) -> std::result::Result<u64, PropertyShareError> {
        let committed = self
            .escrow_committed
            .checked_sub(released)
            .ok_or(PropertyShareError::MathOverflow)?
            .checked_add(reserved)
            .ok_or(PropertyShareError::MathOverflow)?;
        if committed > escrow_balance {
            return Err(PropertyShareError::ExceedsEscrow);
        }
        Ok(committed)
    }

    /// Provision `schedule` against the escrow row, replacing whatever it
    /// promised before.
    #[allow(clippy::too_many_arguments)]
    pub fn commit_schedule(
        &mut self,
        escrow: &Holding,
        schedule: &mut VestingSchedule,
        beneficiary: Pubkey,
        total_amount: u64,
        duration: i64,
        now_ts: i64,
        bump: u8,
    ) -> std::result::Result<Option<ReplacedSchedule>, PropertyShareError> {
        if !self.initialized {
            return Err(PropertyShareError::NotInitialized);
        }
        if !self.release_policy.escrows_company_share() {
            return Err(PropertyShareError::NotVestingInstance);
        }
        let committed =
            self.escrow_commitment_after(escrow.amount, schedule.outstanding(), total_amount)?;
        let replaced =
            schedule.provision(escrow.ledger, beneficiary, total_amount, duration, now_ts, bump)?;
        self.escrow_committed = committed;
        Ok(replaced)
    }

    /// Schedule the whole genesis escrow for the company over the policy duration.
    pub fn vest_company_share(
        &mut self,
        escrow: &Holding,
        schedule: &mut VestingSchedule,
        now_ts: i64,
        bump: u8,
    ) -> std::result::Result<(), PropertyShareError> {
        let duration = self
            .release_policy
            .vesting_duration()
            .ok_or(PropertyShareError::NotVestingInstance)?;
        let company = self.company;
        self.commit_schedule(
            escrow,
            schedule,
            company,
            escrow.amount,
            duration,
            now_ts,
            bump,
        )?;
        Ok(())
    }

    /// Drop `amount` from the commitment once it has been claimed.
    pub fn release_escrow(&mut self, amount: u64) -> std::result::Result<(), PropertyShareError> {
        self.escrow_committed = self
            .escrow_committed
            .checked_sub(amount)
            .ok_or(PropertyShareError::MathOverflow)?;
        Ok(())
    }

    /// Returns false when the ledger was already paused.
    pub fn pause(&mut self) -> std::result::Result<bool, PropertyShareError> {
        if !self.initialized {
            return Err(PropertyShareError::NotInitialized);
        }
        Ok(!std::mem::replace(&mut self.paused, true))
    }

    /// Returns false when the ledger was not paused.
    pub fn unpause(&mut self) -> std::result::Result<bool, PropertyShareError> {
        if !self.initialized {
            return Err(PropertyShareError::NotInitialized);
        }
        Ok(std::mem::replace(&mut self.paused, false))
    }

    pub fn state(&self) -> LedgerState {
        match (self.initialized, self.paused) {
            (false, _) => LedgerState::Uninitialized,
            (true, false) => LedgerState::Active,
            (true, true) => LedgerState::Paused,
        }
    }

    pub fn ensure_active(&self) -> std::result::Result<(), PropertyShareError> {
        match self.state() {
            LedgerState::Uninitialized => Err(PropertyShareError::NotInitialized),
            LedgerState::Paused => Err(PropertyShareError::Paused),
            LedgerState::Active => Ok(()),
        }
    }

    pub fn max_hold_amount(&self) -> std::result::Result<u64, PropertyShareError> {
        math::max_hold_amount(self.total_supply, self.max_hold_percent)
    }

    pub fn is_locked(&self, principal: &Pubkey, now_ts: i64) -> bool {
        *principal == self.company && self.release_policy.locks_at(now_ts)
    }

    /// Transfer gate, evaluated in order: pause, lock, cap.
    /// Balance sufficiency is checked by `Holding::move_between`.
    pub fn check_transfer(
        &self,
        from_owner: &Pubkey,
        to: &Holding,
        amount: u64,
        now_ts: i64,
    ) -> std::result::Result<(), PropertyShareError> {
        self.ensure_active()?;
        if self.is_locked(from_owner, now_ts) {
            return Err(PropertyShareError::Locked);
        }
        if !to.exempt {
            let post = to
                .amount
                .checked_add(amount)
                .ok_or(PropertyShareError::MathOverflow)?;
            if post > self.max_hold_amount()? {
                return Err(PropertyShareError::CapExceeded);
            }
        }
        Ok(())
    }

    /// Returns the previous percent.
    pub fn set_max_hold_percent(&mut self, percent: u8) -> std::result::Result<u8, PropertyShareError> {
        if percent > MAX_PERCENT {
            return Err(PropertyShareError::InvalidPercent);
        }
        let old = self.max_hold_percent;
        self.max_hold_percent = percent;
        Ok(old)
    }

    /// Returns the previous admin.
    pub fn set_admin(&mut self, new_admin: Pubkey) -> std::result::Result<Pubkey, PropertyShareError> {
        if new_admin == Pubkey::default() {
            return Err(PropertyShareError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_COMPANY_BPS, DEFAULT_MAX_HOLD_PERCENT, SECONDS_PER_DAY};

    const NOW: i64 = 1_760_000_000;
    const VESTING_DURATION: i64 = 5 * SECONDS_PER_DAY;
    const VESTING: ReleasePolicy = ReleasePolicy::LinearVesting { duration: VESTING_DURATION };

    fn init(release_policy: ReleasePolicy) -> LedgerInit {
        LedgerInit {
            name: "Harbor View 12".to_string(),
            symbol: "HV12".to_string(),
            total_supply: 1_000_000,
            company: Pubkey::new_unique(),
            issuer: Pubkey::new_unique(),
            max_hold_percent: None,
            release_policy,
            asset: None,
            created_at: NOW,
        }
    }

    fn active(release_policy: ReleasePolicy) -> (Ledger, GenesisSplit) {
        let mut ledger = Ledger::default();
        let split = ledger
            .initialize(init(release_policy), DEFAULT_COMPANY_BPS, DEFAULT_MAX_HOLD_PERCENT)
            .unwrap();
        (ledger, split)
    }

    fn wallet(amount: u64) -> Holding {
        let mut h = Holding::default();
        h.open(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        h.amount = amount;
        h
    }

    #[test]
    fn initialize_splits_and_activates() {
        let (ledger, split) = active(ReleasePolicy::NoLock);
        assert_eq!(split.company, 250_000);
        assert_eq!(split.issuer, 750_000);
        assert_eq!(split.company + split.issuer, ledger.total_supply);
        assert_eq!(ledger.max_hold_percent, DEFAULT_MAX_HOLD_PERCENT);
        assert_eq!(ledger.state(), LedgerState::Active);
    }

    #[test]
    fn initialize_runs_once() {
        let (mut ledger, _) = active(ReleasePolicy::NoLock);
        let issuer = ledger.issuer;
        let mut hijack = init(ReleasePolicy::NoLock);
        hijack.issuer = Pubkey::new_unique();
        assert!(matches!(
            ledger.initialize(hijack, 0, DEFAULT_MAX_HOLD_PERCENT),
            Err(PropertyShareError::AlreadyInitialized)
        ));
        assert_eq!(ledger.issuer, issuer);
    }

    fn expect_init_err(mutate: impl Fn(&mut LedgerInit), expected: PropertyShareError) {
        let mut i = init(ReleasePolicy::NoLock);
        mutate(&mut i);
        let mut ledger = Ledger::default();
        let err = ledger
            .initialize(i, DEFAULT_COMPANY_BPS, DEFAULT_MAX_HOLD_PERCENT)
            .unwrap_err();
        assert_eq!(err as u32, expected as u32);
        assert_eq!(ledger.state(), LedgerState::Uninitialized);
    }

    #[test]
    fn initialize_validates_inputs() {
        expect_init_err(|i| i.issuer = Pubkey::default(), PropertyShareError::InvalidPubkey);
        expect_init_err(|i| i.company = Pubkey::default(), PropertyShareError::InvalidPubkey);
        expect_init_err(|i| i.issuer = i.company, PropertyShareError::IssuerIsCompany);
        expect_init_err(|i| i.total_supply = 0, PropertyShareError::InvalidSupply);
        expect_init_err(|i| i.name = String::new(), PropertyShareError::InvalidName);
        expect_init_err(
            |i| i.symbol = "X".repeat(MAX_SYMBOL_LEN + 1),
            PropertyShareError::InvalidSymbol,
        );
        expect_init_err(
            |i| i.asset = Some(Pubkey::default()),
            PropertyShareError::InvalidAssetMint,
        );
        expect_init_err(
            |i| i.max_hold_percent = Some(101),
            PropertyShareError::InvalidPercent,
        );
        expect_init_err(
            |i| i.release_policy = ReleasePolicy::HardLockUntil { unlock_ts: 0 },
            PropertyShareError::InvalidTimestamp,
        );
        expect_init_err(
            |i| i.release_policy = ReleasePolicy::LinearVesting { duration: 0 },
            PropertyShareError::InvalidDuration,
        );
    }

    #[test]
    fn uninitialized_ledger_rejects_transfers() {
        let ledger = Ledger::default();
        assert!(matches!(
            ledger.check_transfer(&Pubkey::new_unique(), &wallet(0), 1, NOW),
            Err(PropertyShareError::NotInitialized)
        ));
    }

    #[test]
    fn cap_boundary() {
        let (ledger, _) = active(ReleasePolicy::NoLock);
        assert_eq!(ledger.max_hold_amount().unwrap(), 90_000);
        let to = wallet(40_000);
        let from = Pubkey::new_unique();
        ledger.check_transfer(&from, &to, 50_000, NOW).unwrap();
        assert!(matches!(
            ledger.check_transfer(&from, &to, 50_001, NOW),
            Err(PropertyShareError::CapExceeded)
        ));

        let mut exempt = wallet(40_000);
        exempt.exempt = true;
        ledger.check_transfer(&from, &exempt, 500_000, NOW).unwrap();
    }

    #[test]
    fn pause_blocks_everything_and_unpause_restores() {
        let (mut ledger, _) = active(ReleasePolicy::NoLock);
        let from = Pubkey::new_unique();
        let to = wallet(0);

        assert!(ledger.pause().unwrap());
        assert!(!ledger.pause().unwrap());
        assert_eq!(ledger.state(), LedgerState::Paused);
        assert!(matches!(
            ledger.check_transfer(&from, &to, 1, NOW),
            Err(PropertyShareError::Paused)
        ));
        // Pause wins over the cap.
        assert!(matches!(
            ledger.check_transfer(&from, &to, 1_000_000, NOW),
            Err(PropertyShareError::Paused)
        ));

        assert!(ledger.unpause().unwrap());
        assert!(!ledger.unpause().unwrap());
        assert_eq!(ledger.state(), LedgerState::Active);
        ledger.check_transfer(&from, &to, 1, NOW).unwrap();
        assert!(matches!(
            ledger.check_transfer(&from, &to, 90_001, NOW),
            Err(PropertyShareError::CapExceeded)
        ));
    }

    #[test]
    fn hard_lock_applies_to_company_only_until_deadline() {
        let unlock_ts = NOW + 30 * SECONDS_PER_DAY;
        let (ledger, _) = active(ReleasePolicy::HardLockUntil { unlock_ts });
        let company = ledger.company;
        let issuer = ledger.issuer;
        let to = wallet(0);

        assert!(matches!(
            ledger.check_transfer(&company, &to, 1, NOW),
            Err(PropertyShareError::Locked)
        ));
        assert!(matches!(
            ledger.check_transfer(&company, &to, 1, unlock_ts - 1),
            Err(PropertyShareError::Locked)
        ));
        ledger.check_transfer(&company, &to, 1, unlock_ts).unwrap();
        ledger.check_transfer(&issuer, &to, 1, NOW).unwrap();
    }

    #[test]
    fn lock_is_checked_before_cap() {
        let (ledger, _) = active(ReleasePolicy::HardLockUntil { unlock_ts: NOW + 1 });
        let company = ledger.company;
        assert!(matches!(
            ledger.check_transfer(&company, &wallet(0), 1_000_000, NOW),
            Err(PropertyShareError::Locked)
        ));
    }

    #[test]
    fn linear_vesting_does_not_lock_company_wallet() {
        let (ledger, _) = active(VESTING);
        assert!(ledger.release_policy.escrows_company_share());
        assert!(!ledger.is_locked(&ledger.company, NOW));
    }

    #[test]
    fn pause_requires_initialization() {
        let mut ledger = Ledger::default();
        assert!(matches!(ledger.pause(), Err(PropertyShareError::NotInitialized)));
        assert!(matches!(ledger.unpause(), Err(PropertyShareError::NotInitialized)));
        assert!(!ledger.paused);
    }

    fn genesis_rows(ledger: &Ledger) -> (Holding, Holding, Holding) {
        let key = Pubkey::new_unique();
        let mut company = Holding::default();
        company.open(key, ledger.company, 255);
        let mut issuer = Holding::default();
        issuer.open(key, ledger.issuer, 255);
        let mut escrow = Holding::default();
        escrow.open(key, Pubkey::new_unique(), 255);
        (company, issuer, escrow)
    }

    #[test]
    fn genesis_credits_company_row_without_vesting() {
        let (ledger, split) = active(ReleasePolicy::HardLockUntil { unlock_ts: NOW + 1 });
        let (mut company, mut issuer, mut escrow) = genesis_rows(&ledger);
        ledger
            .mint_genesis(&split, &mut company, &mut issuer, &mut escrow)
            .unwrap();
        assert_eq!((company.amount, issuer.amount, escrow.amount), (250_000, 750_000, 0));
        assert!(company.exempt && issuer.exempt && escrow.exempt);
    }

    #[test]
    fn genesis_credits_escrow_under_vesting() {
        let (ledger, split) = active(VESTING);
        let (mut company, mut issuer, mut escrow) = genesis_rows(&ledger);
        ledger
            .mint_genesis(&split, &mut company, &mut issuer, &mut escrow)
            .unwrap();
        assert_eq!((company.amount, issuer.amount, escrow.amount), (0, 750_000, 250_000));
        assert_eq!(company.amount + issuer.amount + escrow.amount, ledger.total_supply);
    }

    #[test]
    fn genesis_mints_once_into_matching_rows() {
        let (ledger, split) = active(ReleasePolicy::NoLock);
        let (mut company, mut issuer, mut escrow) = genesis_rows(&ledger);
        ledger
            .mint_genesis(&split, &mut company, &mut issuer, &mut escrow)
            .unwrap();
        assert!(matches!(
            ledger.mint_genesis(&split, &mut company, &mut issuer, &mut escrow),
            Err(PropertyShareError::AlreadyInitialized)
        ));
        assert_eq!(company.amount + issuer.amount, ledger.total_supply);

        let (mut company, mut issuer, mut escrow) = genesis_rows(&ledger);
        issuer.owner = Pubkey::new_unique();
        assert!(matches!(
            ledger.mint_genesis(&split, &mut company, &mut issuer, &mut escrow),
            Err(PropertyShareError::HoldingMismatch)
        ));
        assert_eq!(company.amount, 0);
    }

    fn vesting_ledger() -> (Ledger, Holding) {
        let (ledger, split) = active(VESTING);
        let (mut company, mut issuer, mut escrow) = genesis_rows(&ledger);
        ledger
            .mint_genesis(&split, &mut company, &mut issuer, &mut escrow)
            .unwrap();
        (ledger, escrow)
    }

    #[test]
    fn schedules_cannot_promise_more_than_escrow() {
        let (mut ledger, escrow) = vesting_ledger();
        let mut s = VestingSchedule::default();
        assert!(matches!(
            ledger.commit_schedule(&escrow, &mut s, Pubkey::new_unique(), 1_000_000, 100, NOW, 255),
            Err(PropertyShareError::ExceedsEscrow)
        ));
        assert!(!s.is_provisioned());
        assert_eq!(ledger.escrow_committed, 0);

        ledger
            .commit_schedule(&escrow, &mut s, Pubkey::new_unique(), 200_000, 100, NOW, 255)
            .unwrap();
        let mut other = VestingSchedule::default();
        assert!(matches!(
            ledger.commit_schedule(&escrow, &mut other, Pubkey::new_unique(), 50_001, 100, NOW, 255),
            Err(PropertyShareError::ExceedsEscrow)
        ));
        ledger
            .commit_schedule(&escrow, &mut other, Pubkey::new_unique(), 50_000, 100, NOW, 255)
            .unwrap();
        assert_eq!(ledger.escrow_committed, escrow.amount);
    }

    #[test]
    fn overwriting_a_schedule_frees_its_outstanding_commitment() {
        let (mut ledger, mut escrow) = vesting_ledger();
        let beneficiary = Pubkey::new_unique();
        let mut s = VestingSchedule::default();
        ledger
            .commit_schedule(&escrow, &mut s, beneficiary, 250_000, 100, NOW, 255)
            .unwrap();

        let amount = s.claim(NOW + 40).unwrap();
        ledger.release_escrow(amount).unwrap();
        escrow.amount -= amount;
        assert_eq!(ledger.escrow_committed, 150_000);
        assert_eq!(escrow.amount, 150_000);

        let replaced = ledger
            .commit_schedule(&escrow, &mut s, beneficiary, 150_000, 50, NOW + 40, 255)
            .unwrap();
        assert_eq!(replaced.map(|r| r.claimed_amount), Some(100_000));
        assert_eq!(ledger.escrow_committed, 150_000);
        assert_eq!(s.vested_amount(NOW + 90).unwrap(), escrow.amount);
    }

    #[test]
    fn company_share_vests_from_genesis_escrow() {
        let (mut ledger, escrow) = vesting_ledger();
        let mut s = VestingSchedule::default();
        ledger.vest_company_share(&escrow, &mut s, NOW, 255).unwrap();
        assert_eq!(s.beneficiary, ledger.company);
        assert_eq!(s.ledger, escrow.ledger);
        assert_eq!(s.total_amount, 250_000);
        assert_eq!(s.duration, VESTING_DURATION);
        assert_eq!(ledger.escrow_committed, 250_000);

        let (mut plain, _) = active(ReleasePolicy::NoLock);
        let mut t = VestingSchedule::default();
        assert!(matches!(
            plain.vest_company_share(&escrow, &mut t, NOW, 255),
            Err(PropertyShareError::NotVestingInstance)
        ));
    }

    #[test]
    fn admin_mutations() {
        let (mut ledger, _) = active(ReleasePolicy::NoLock);
        assert_eq!(ledger.set_max_hold_percent(10).unwrap(), DEFAULT_MAX_HOLD_PERCENT);
        assert_eq!(ledger.set_max_hold_percent(10).unwrap(), 10);
        assert_eq!(ledger.max_hold_amount().unwrap(), 100_000);
        assert!(matches!(
            ledger.set_max_hold_percent(101),
            Err(PropertyShareError::InvalidPercent)
        ));
        assert_eq!(ledger.max_hold_percent, 10);

        assert!(matches!(
            ledger.set_admin(Pubkey::default()),
            Err(PropertyShareError::InvalidPubkey)
        ));
        let next = Pubkey::new_unique();
        ledger.set_admin(next).unwrap();
        assert_eq!(ledger.admin, next);
    }
}
