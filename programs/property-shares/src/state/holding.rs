use anchor_lang::prelude::*;

use crate::error::PropertyShareError;

/// One balance row of a ledger (PDA `["holding", ledger, owner]`).
///
/// The escrow row of a vesting ledger lives at `["escrow", ledger]` and is its
/// own owner, so no external signer can move funds out of it.
#[account]
#[derive(Default)]
pub struct Holding {
    /// Ledger this row belongs to.
    pub ledger: Pubkey,
    /// Principal owning the balance.
    pub owner: Pubkey,
    /// Share balance.
    pub amount: u64,
    /// Excluded from the concentration cap.
    pub exempt: bool,
    /// Spender allowed to move shares on the owner's behalf (default key = none).
    pub delegate: Pubkey,
    /// Remaining allowance of `delegate`.
    pub delegated_amount: u64,
    pub bump: u8,
}

impl Holding {
    pub const SIZE: usize =
        32 + // ledger
        32 + // owner
        8 +  // amount
        1 +  // exempt
        32 + // delegate
        8 +  // delegated_amount
        1;   // bump

    pub fn open(&mut self, ledger: Pubkey, owner: Pubkey, bump: u8) {
        self.ledger = ledger;
        self.owner = owner;
        self.amount = 0;
        self.exempt = false;
        self.delegate = Pubkey::default();
        self.delegated_amount = 0;
        self.bump = bump;
    }

    pub fn is_open(&self) -> bool {
        self.ledger != Pubkey::default()
    }

    /// Debit `from` and credit `to` together. Both new balances are computed
    /// before either row is written.
    pub fn move_between(
        from: &mut Holding,
        to: &mut Holding,
        amount: u64,
    ) -> std::result::Result<(), PropertyShareError> {
        if from.ledger != to.ledger {
            return Err(PropertyShareError::HoldingMismatch);
        }
        let debited = from
            .amount
            .checked_sub(amount)
            .ok_or(PropertyShareError::InsufficientBalance)?;
        let credited = to
            .amount
            .checked_add(amount)
            .ok_or(PropertyShareError::MathOverflow)?;
        from.amount = debited;
        to.amount = credited;
        Ok(())
    }

    /// Replace the delegate. Approving zero clears it.
    pub fn approve(&mut self, delegate: Pubkey, amount: u64) {
        if amount == 0 {
            self.delegate = Pubkey::default();
            self.delegated_amount = 0;
        } else {
            self.delegate = delegate;
            self.delegated_amount = amount;
        }
    }

    pub fn check_allowance(&self, spender: &Pubkey, amount: u64) -> std::result::Result<(), PropertyShareError> {
        if self.delegate == Pubkey::default() || self.delegate != *spender {
            return Err(PropertyShareError::UnauthorizedDelegate);
        }
        if self.delegated_amount < amount {
            return Err(PropertyShareError::InsufficientAllowance);
        }
        Ok(())
    }

    pub fn spend_allowance(&mut self, spender: &Pubkey, amount: u64) -> std::result::Result<(), PropertyShareError> {
        self.check_allowance(spender, amount)?;
        self.delegated_amount -= amount;
        if self.delegated_amount == 0 {
            self.delegate = Pubkey::default();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ledger: Pubkey, amount: u64) -> Holding {
        let mut h = Holding::default();
        h.open(ledger, Pubkey::new_unique(), 255);
        h.amount = amount;
        h
    }

    #[test]
    fn move_is_all_or_nothing() {
        let ledger = Pubkey::new_unique();
        let mut from = row(ledger, 10);
        let mut to = row(ledger, 5);

        Holding::move_between(&mut from, &mut to, 4).unwrap();
        assert_eq!((from.amount, to.amount), (6, 9));

        assert!(matches!(
            Holding::move_between(&mut from, &mut to, 7),
            Err(PropertyShareError::InsufficientBalance)
        ));
        assert_eq!((from.amount, to.amount), (6, 9));

        let mut full = row(ledger, u64::MAX);
        assert!(matches!(
            Holding::move_between(&mut from, &mut full, 1),
            Err(PropertyShareError::MathOverflow)
        ));
        assert_eq!((from.amount, full.amount), (6, u64::MAX));
    }

    #[test]
    fn move_rejects_rows_of_different_ledgers() {
        let mut from = row(Pubkey::new_unique(), 10);
        let mut to = row(Pubkey::new_unique(), 0);
        assert!(matches!(
            Holding::move_between(&mut from, &mut to, 1),
            Err(PropertyShareError::HoldingMismatch)
        ));
        assert_eq!(from.amount, 10);
    }

    #[test]
    fn allowance_lifecycle() {
        let mut h = row(Pubkey::new_unique(), 100);
        let spender = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        assert!(matches!(
            h.check_allowance(&spender, 1),
            Err(PropertyShareError::UnauthorizedDelegate)
        ));

        h.approve(spender, 30);
        assert!(matches!(
            h.check_allowance(&stranger, 1),
            Err(PropertyShareError::UnauthorizedDelegate)
        ));
        assert!(matches!(
            h.spend_allowance(&spender, 31),
            Err(PropertyShareError::InsufficientAllowance)
        ));

        h.spend_allowance(&spender, 10).unwrap();
        assert_eq!(h.delegated_amount, 20);
        h.spend_allowance(&spender, 20).unwrap();
        assert_eq!(h.delegate, Pubkey::default());

        h.approve(spender, 5);
        h.approve(spender, 0);
        assert_eq!(h.delegate, Pubkey::default());
        assert_eq!(h.delegated_amount, 0);
    }
}
