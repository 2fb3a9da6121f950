use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the claim/stake
 * ledger program. These constants control payout splitting, participant list
 * capacity, PDA derivation, and staking duration limits.
 */

#[constant]
/// ===== PAYOUT CONSTANTS =====

/// Divisor applied to the per-participant allocation at claim time
/// - claim pays airdrop_amount / CLAIM_PORTION_DIVISOR immediately
/// - the remainder stays reserved in the vault and is paid out by unstake
///   once the lock has elapsed
/// - Lifetime payout per participant never exceeds airdrop_amount
pub const CLAIM_PORTION_DIVISOR: u64 = 2;

/// ===== CAPACITY CONSTANTS =====

/// Maximum number of participants a single ledger can track
/// - Bounds the eligible list and both reporting cohorts
/// - Space for all three lists is reserved when the ledger is initialized,
///   which must stay within the runtime's per-allocation account size limit
pub const MAX_PARTICIPANTS: usize = 100;

/// ===== TIMING CONSTANTS =====

/// Maximum allowed staking duration (365 days)
/// - Each campaign configures its own lock interval at creation
/// - Prevents configuring locks that could never realistically elapse
/// - Value: 365 days * 24 hours * 60 minutes * 60 seconds = 31,536,000 seconds
pub const MAX_STAKING_DURATION: i64 = 365 * 24 * 60 * 60; // 365 days in seconds

/// ===== PDA SEED CONSTANTS =====

/// Seed for ledger PDA derivation
/// - Used in: ["ledger", token_mint, owner]
/// - Creates one campaign ledger for each (token, owner) pair
/// - Ensures deterministic and collision-free PDA generation
pub const LEDGER_SEED: &str = "ledger";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", ledger_key]
/// - Creates a unique vault for each ledger
/// - Ensures the vault is controlled by the ledger PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for participant record PDA derivation
/// - Used in: ["participant", ledger_key, participant_key]
/// - Creates unique lifecycle tracking for each (ledger, participant) pair
/// - Prevents double-claiming and double-unstaking
pub const PARTICIPANT_SEED: &str = "participant";
