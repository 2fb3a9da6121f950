use anchor_lang::prelude::*;

#[error_code]
pub enum ClaimStakeLedgerError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,

    // Eligibility errors
    #[msg("Address is not eligible to claim")]
    NotEligible,
    #[msg("Address cannot be the zero address")]
    InvalidAddress,
    #[msg("Participant list is full")]
    ParticipantListFull,

    // Claim lifecycle errors
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Has not claimed yet")]
    NotClaimed,

    // Staking lifecycle errors
    #[msg("Already staked")]
    AlreadyStaked,
    #[msg("Already unstaked")]
    AlreadyUnstaked,
    #[msg("Has not staked")]
    NotStaked,
    #[msg("Participant opted out of staking at claim time")]
    DoesNotWantToStake,
    #[msg("Stake is still locked, cannot unstake now")]
    CanNotUnstakeNow,

    // Configuration errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid staking duration")]
    InvalidDuration,
    #[msg("Staking duration cannot exceed 365 days")]
    StakingDurationTooLong,

    // Amount validation errors
    #[msg("Insufficient vault balance for this payout")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match ledger's token mint")]
    TokenMintMismatch,
}
