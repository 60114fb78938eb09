use anchor_lang::prelude::*;

/// Custom error codes for the property shares program.
#[error_code]
pub enum PropertyShareError {
    // Validation
    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Total supply must be > 0")]
    InvalidSupply,

    #[msg("Percent must be within 0..=100")]
    InvalidPercent,

    #[msg("Company share must be within 0..=10000 basis points")]
    InvalidCompanyShare,

    #[msg("Amount must be > 0")]
    InvalidAmount,

    #[msg("Duration must be > 0")]
    InvalidDuration,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Name is empty or too long")]
    InvalidName,

    #[msg("Symbol is empty or too long")]
    InvalidSymbol,

    #[msg("Issuer and company must be distinct")]
    IssuerIsCompany,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Source and destination holdings must differ")]
    SelfTransfer,

    #[msg("Holding does not belong to this ledger")]
    HoldingMismatch,

    #[msg("Registry index out of range")]
    IndexOutOfRange,

    #[msg("Invalid asset mint")]
    InvalidAssetMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient asset vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Schedule exceeds the uncommitted escrow balance")]
    ExceedsEscrow,

    // State
    #[msg("Ledger is paused")]
    Paused,

    #[msg("Ledger is already initialized")]
    AlreadyInitialized,

    #[msg("Ledger is not initialized")]
    NotInitialized,

    #[msg("Ledger release policy is not linear vesting")]
    NotVestingInstance,

    #[msg("Vesting schedule does not belong to this ledger")]
    ScheduleMismatch,

    #[msg("Ledger has no underlying asset")]
    AssetNotConfigured,

    #[msg("Vesting ledger requires the company schedule account")]
    ScheduleRequired,

    // Policy
    #[msg("Transfer rejected: locked")]
    Locked,

    #[msg("Transfer rejected: cap exceeded")]
    CapExceeded,

    // Authorization
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Unauthorized: holder signature required")]
    UnauthorizedHolder,

    #[msg("Unauthorized: delegate signature required")]
    UnauthorizedDelegate,

    // External
    #[msg("Underlying asset transfer failed")]
    ExternalCallFailed,

    #[msg("Nothing to claim")]
    NothingToClaim,
}

/// Coarse failure classes callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    PolicyViolation,
    Authorization,
    ExternalCall,
    NothingToClaim,
}

impl PropertyShareError {
    pub fn kind(&self) -> ErrorKind {
        use PropertyShareError::*;
        match self {
            InvalidPubkey | InvalidSupply | InvalidPercent | InvalidCompanyShare | InvalidAmount
            | InvalidDuration | InvalidTimestamp | InvalidName | InvalidSymbol
            | IssuerIsCompany | InsufficientBalance | InsufficientAllowance | SelfTransfer
            | HoldingMismatch | IndexOutOfRange | InvalidAssetMint | InvalidTokenAccount
            | InsufficientVaultBalance | MathOverflow | ExceedsEscrow => ErrorKind::Validation,
            Paused | AlreadyInitialized | NotInitialized | NotVestingInstance
            | ScheduleMismatch | AssetNotConfigured | ScheduleRequired => ErrorKind::State,
            Locked | CapExceeded => ErrorKind::PolicyViolation,
            UnauthorizedAdmin | UnauthorizedBeneficiary | UnauthorizedHolder
            | UnauthorizedDelegate => ErrorKind::Authorization,
            ExternalCallFailed => ErrorKind::ExternalCall,
            NothingToClaim => ErrorKind::NothingToClaim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(PropertyShareError::Paused.kind(), ErrorKind::State);
        assert_eq!(PropertyShareError::Locked.kind(), ErrorKind::PolicyViolation);
        assert_eq!(PropertyShareError::CapExceeded.kind(), ErrorKind::PolicyViolation);
        assert_eq!(PropertyShareError::InvalidPercent.kind(), ErrorKind::Validation);
        assert_eq!(PropertyShareError::ExceedsEscrow.kind(), ErrorKind::Validation);
        assert_eq!(
            PropertyShareError::UnauthorizedBeneficiary.kind(),
            ErrorKind::Authorization
        );
        assert_eq!(
            PropertyShareError::ExternalCallFailed.kind(),
            ErrorKind::ExternalCall
        );
        assert_eq!(
            PropertyShareError::NothingToClaim.kind(),
            ErrorKind::NothingToClaim
        );
    }
}
