use anchor_lang::prelude::*;

use crate::error::ClaimStakeLedgerError;

/**
 * Individual participant record account
 *
 * This struct tracks the forward-only lifecycle for one participant:
 * uninitialized -> claimed -> (optionally) staked -> unstaked. No transition
 * ever reverses and every flag is set at most once.
 *
 * Derivation: ["participant", ledger_key, participant_key]
 *
 * Lifecycle:
 * 1. Created lazily on first interaction (using init_if_needed)
 * 2. Updated when the participant claims, stakes and unstakes
 * 3. Never closed; the claimed flag is what makes payouts exactly-once
 *
 * Design Notes:
 * - One ParticipantRecord account per (ledger, participant) pair
 * - Eligibility itself lives in the ledger's eligible list; the record only
 *   tracks the claim/stake lifecycle
 */
#[account]
#[derive(Default, Debug)]
pub struct ParticipantRecord {
    /// True once the claim payout has been issued (set at most once)
    pub claimed: bool,

    /// Stake preference captured at claim time
    /// - Only meaningful once claimed is true
    pub wants_stake: bool,

    /// True once the stake lock has been set up
    pub staked: bool,

    /// True once the post-lock payout has been issued (terminal state)
    pub unstaked: bool,

    /// Earliest timestamp at which the stake may be withdrawn
    /// - Set exactly once when staking begins, never altered afterwards
    pub unlock_time: Option<i64>,
}

impl ParticipantRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ParticipantRecord>();

    /// Validates the claim preconditions without mutating anything
    ///
    /// Eligibility is required before the first payout and irrelevant after
    /// it: once claimed is set, the AlreadyClaimed path is taken regardless
    /// of the eligibility flag passed in.
    pub fn validate_claim(
        &self,
        eligible: bool,
    ) -> std::result::Result<(), ClaimStakeLedgerError> {
        if self.claimed {
            return Err(ClaimStakeLedgerError::AlreadyClaimed);
        }
        if !eligible {
            return Err(ClaimStakeLedgerError::NotEligible);
        }
        Ok(())
    }

    /// Marks the claim as issued and captures the stake preference
    pub fn record_claim(&mut self, wants_stake: bool) {
        self.claimed = true;
        self.wants_stake = wants_stake;
    }

    /// Validates the stake preconditions without mutating anything
    ///
    /// Once unstaked, staking is permanently foreclosed, so the terminal
    /// state is checked before the staked flag.
    pub fn validate_stake(&self) -> std::result::Result<(), ClaimStakeLedgerError> {
        if !self.claimed {
            return Err(ClaimStakeLedgerError::NotClaimed);
        }
        if !self.wants_stake {
            return Err(ClaimStakeLedgerError::DoesNotWantToStake);
        }
        if self.unstaked {
            return Err(ClaimStakeLedgerError::AlreadyUnstaked);
        }
        if self.staked {
            return Err(ClaimStakeLedgerError::AlreadyStaked);
        }
        Ok(())
    }

    /// Marks the stake and pins the unlock time (write-once)
    pub fn record_stake(&mut self, unlock_time: i64) {
        self.staked = true;
        self.unlock_time = Some(unlock_time);
    }

    /// Validates the unstake preconditions without mutating anything
    ///
    /// The lock is considered elapsed at exactly unlock_time; one timestamp
    /// earlier still fails.
    pub fn validate_unstake(
        &self,
        current_time: i64,
    ) -> std::result::Result<(), ClaimStakeLedgerError> {
        if !self.staked {
            return Err(ClaimStakeLedgerError::NotStaked);
        }
        if self.unstaked {
            return Err(ClaimStakeLedgerError::AlreadyUnstaked);
        }
        match self.unlock_time {
            Some(unlock_time) if current_time >= unlock_time => Ok(()),
            _ => Err(ClaimStakeLedgerError::CanNotUnstakeNow),
        }
    }

    /// Marks the post-lock payout as issued (terminal transition)
    pub fn record_unstake(&mut self) {
        self.unstaked = true;
    }
}
