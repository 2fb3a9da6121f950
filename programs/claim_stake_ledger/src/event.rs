use anchor_lang::prelude::*;

/// Event emitted when a new ledger is created
#[event]
pub struct LedgerCreated {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Owner of the ledger
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Fixed per-participant allocation
    pub airdrop_amount: u64,
    /// Lock interval applied when a participant stakes
    pub staking_duration: i64,
    /// Initial amount of tokens deposited into the vault
    pub deposit_amount: u64,
}

/// Event emitted when the owner grants claim eligibility
#[event]
pub struct EligibilityGranted {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Owner who granted eligibility
    pub owner: Pubkey,
    /// Number of addresses newly added by this call
    pub added: u64,
    /// Total number of eligible addresses after this call
    pub total_eligible: u64,
}

/// Event emitted when a participant claims the liquid half of their allocation
#[event]
pub struct Claimed {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Address of the participant
    pub participant: Pubkey,
    /// Amount paid out by this claim
    pub amount: u64,
    /// Stake preference captured at claim time
    pub wants_stake: bool,
}

/// Event emitted when a participant locks their reserved half
#[event]
pub struct Staked {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Address of the participant
    pub participant: Pubkey,
    /// Amount locked by this stake
    pub amount: u64,
    /// Earliest timestamp at which the stake may be withdrawn
    pub unlock_time: i64,
    /// Count of participants that ever staked, after this call
    pub total_participants_staked: u64,
    /// Cumulative amount staked across all participants, after this call
    pub total_amount_staked: u64,
}

/// Event emitted when a participant withdraws their matured stake
#[event]
pub struct Unstaked {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Address of the participant
    pub participant: Pubkey,
    /// Amount paid out by this unstake
    pub amount: u64,
}

/// Event emitted when the owner withdraws tokens from the vault
#[event]
pub struct TokensWithdrawn {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}
