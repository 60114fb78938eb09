//! Exact integer arithmetic for splits, caps and vesting.
//!
//! Every ratio is computed as `floor(value * numerator / denominator)` over a
//! `u128` intermediate; truncation is part of the contract and never rounds up.

use crate::constants::{BPS_DENOMINATOR, MAX_PERCENT};
use crate::error::PropertyShareError;

/// `floor(value * numerator / denominator)`.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64, PropertyShareError> {
    if denominator == 0 {
        return Err(PropertyShareError::MathOverflow);
    }
    let v = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(PropertyShareError::MathOverflow)?
        / denominator as u128;
    u64::try_from(v).map_err(|_| PropertyShareError::MathOverflow)
}

/// Genesis split of a fixed supply between company and issuer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisSplit {
    pub company: u64,
    pub issuer: u64,
}

/// Company takes `floor(supply * bps / 10000)`; issuer absorbs the remainder.
pub fn genesis_split(total_supply: u64, company_bps: u16) -> Result<GenesisSplit, PropertyShareError> {
    if company_bps as u64 > BPS_DENOMINATOR {
        return Err(PropertyShareError::InvalidCompanyShare);
    }
    let company = mul_div_floor(total_supply, company_bps as u64, BPS_DENOMINATOR)?;
    let issuer = total_supply
        .checked_sub(company)
        .ok_or(PropertyShareError::MathOverflow)?;
    Ok(GenesisSplit { company, issuer })
}

/// `floor(total_supply * percent / 100)`.
pub fn max_hold_amount(total_supply: u64, percent: u8) -> Result<u64, PropertyShareError> {
    if percent > MAX_PERCENT {
        return Err(PropertyShareError::InvalidPercent);
    }
    mul_div_floor(total_supply, percent as u64, MAX_PERCENT as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_25_percent() {
        let s = genesis_split(1_000_000, 2_500).unwrap();
        assert_eq!(s.company, 250_000);
        assert_eq!(s.issuer, 750_000);
    }

    #[test]
    fn split_has_no_dust_on_indivisible_supply() {
        for supply in [1u64, 3, 7, 9_999, 10_001, 1_000_003, u64::MAX] {
            for bps in [0u16, 1, 2_500, 3_333, 9_999, 10_000] {
                let s = genesis_split(supply, bps).unwrap();
                assert_eq!(s.company + s.issuer, supply, "supply={supply} bps={bps}");
            }
        }
        // floor: 7 * 2500 / 10000 = 1.75 -> 1, issuer absorbs the rest.
        let s = genesis_split(7, 2_500).unwrap();
        assert_eq!((s.company, s.issuer), (1, 6));
    }

    #[test]
    fn split_rejects_bps_over_denominator() {
        assert!(matches!(
            genesis_split(100, 10_001),
            Err(PropertyShareError::InvalidCompanyShare)
        ));
    }

    #[test]
    fn max_hold_truncates() {
        assert_eq!(max_hold_amount(1_000_000, 9).unwrap(), 90_000);
        assert_eq!(max_hold_amount(999, 10).unwrap(), 99);
        assert_eq!(max_hold_amount(1_000_000, 0).unwrap(), 0);
        assert_eq!(max_hold_amount(1_000_000, 100).unwrap(), 1_000_000);
        assert!(matches!(
            max_hold_amount(1_000_000, 101),
            Err(PropertyShareError::InvalidPercent)
        ));
    }

    #[test]
    fn mul_div_uses_wide_intermediate() {
        assert_eq!(mul_div_floor(u64::MAX, 2, 2).unwrap(), u64::MAX);
        assert!(matches!(
            mul_div_floor(u64::MAX, 2, 1),
            Err(PropertyShareError::MathOverflow)
        ));
        assert!(matches!(
            mul_div_floor(1, 1, 0),
            Err(PropertyShareError::MathOverflow)
        ));
    }
}
