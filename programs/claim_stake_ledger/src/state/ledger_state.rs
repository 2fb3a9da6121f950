use anchor_lang::prelude::*;

use crate::constants::{CLAIM_PORTION_DIVISOR, MAX_PARTICIPANTS};
use crate::error::ClaimStakeLedgerError;

/**
 * Main ledger state account
 *
 * This struct represents the core state of a claim/stake campaign. It stores
 * the immutable campaign parameters, the owner-granted eligibility list, the
 * aggregate staking totals, and the two reporting cohorts.
 *
 * Derivation: ["ledger", token_mint, owner]
 *
 * Lifecycle:
 * 1. Created during create_ledger instruction
 * 2. Eligibility list grows through set_eligible (monotonic, idempotent)
 * 3. Cohorts and staking totals updated during claim/stake
 * 4. Parameters are immutable after creation; the account is never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStakeLedger {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during payout operations
    pub bump: u8,

    /// Owner of the ledger
    /// - Grants eligibility and can withdraw from the vault
    pub owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens backing the campaign
    /// - Controlled by the ledger PDA
    /// - Derived from: ["vault", ledger_key]
    pub token_vault: Pubkey,

    /// Fixed per-participant allocation
    /// - Half is paid at claim time, the other half at unstake
    pub airdrop_amount: u64,

    /// Lock interval in seconds applied when a participant stakes
    pub staking_duration: i64,

    /// Count of participants that ever staked
    /// - Monotonic, only incremented
    pub total_participants_staked: u64,

    /// Cumulative amount locked via staking
    /// - Not a live balance; never decremented
    pub total_amount_staked: u64,

    /// Addresses granted claim eligibility by the owner
    /// - Monotonic; addresses are never removed
    pub eligible: Vec<Pubkey>,

    /// Participants that locked their reserved half (reporting cohort)
    pub stakers: Vec<Pubkey>,

    /// Participants that claimed with the stake preference off (reporting cohort)
    pub non_stakers: Vec<Pubkey>,
}

impl ClaimStakeLedger {
    /// Calculate the space required for this account
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 3: owner, token_mint, token_vault
    /// - 8: airdrop_amount
    /// - 8: staking_duration
    /// - 8 * 2: staking totals
    /// - (4 + 32 * MAX_PARTICIPANTS) * 3: eligible list + both cohorts,
    ///   reserved at full capacity up front
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8 + 8 + 8 * 2 + (4 + 32 * MAX_PARTICIPANTS) * 3;

    /// Amount paid out at claim time; the remainder stays reserved in the
    /// vault and is paid out by unstake. For odd allocations the integer
    /// division remainder is never paid out.
    pub fn half_amount(&self) -> u64 {
        self.airdrop_amount / CLAIM_PORTION_DIVISOR
    }

    /// Whether an address has been granted claim eligibility
    pub fn is_eligible(&self, address: &Pubkey) -> bool {
        self.eligible.contains(address)
    }

    /// Number of participants in the staking cohort
    pub fn staker_count(&self) -> usize {
        self.stakers.len()
    }

    /// Number of participants in the non-staking cohort
    pub fn non_staker_count(&self) -> usize {
        self.non_stakers.len()
    }

    /// Grants eligibility to a batch of addresses (all-or-nothing)
    ///
    /// The entire batch is rejected if any address is the zero address or if
    /// the resulting list would exceed MAX_PARTICIPANTS; on rejection no
    /// address is added. Re-granting an already-eligible address is a no-op.
    /// Returns the number of addresses newly added.
    pub fn grant_eligibility(
        &mut self,
        addresses: &[Pubkey],
    ) -> std::result::Result<u64, ClaimStakeLedgerError> {
        // Validation pass: collect the genuinely new addresses, rejecting the
        // whole batch before any mutation if one of them is invalid
        let mut incoming: Vec<Pubkey> = Vec::with_capacity(addresses.len());
        for address in addresses {
            if *address == Pubkey::default() {
                return Err(ClaimStakeLedgerError::InvalidAddress);
            }
            if self.eligible.contains(address) || incoming.contains(address) {
                continue;
            }
            incoming.push(*address);
        }

        if self.eligible.len() + incoming.len() > MAX_PARTICIPANTS {
            return Err(ClaimStakeLedgerError::ParticipantListFull);
        }

        // Commit pass
        let added = incoming.len() as u64;
        self.eligible.extend(incoming);
        Ok(added)
    }

    /// Records a participant into the staking cohort and updates the totals
    ///
    /// Both totals are computed before either is written, so an overflow
    /// leaves the ledger untouched. Cohort membership is idempotent.
    pub fn record_staker(
        &mut self,
        participant: Pubkey,
        stake_amount: u64,
    ) -> std::result::Result<(), ClaimStakeLedgerError> {
        let new_participants = self
            .total_participants_staked
            .checked_add(1)
            .ok_or(ClaimStakeLedgerError::ArithmeticOverflow)?;
        let new_amount = self
            .total_amount_staked
            .checked_add(stake_amount)
            .ok_or(ClaimStakeLedgerError::ArithmeticOverflow)?;

        self.total_participants_staked = new_participants;
        self.total_amount_staked = new_amount;

        if !self.stakers.contains(&participant) {
            self.stakers.push(participant);
        }
        Ok(())
    }

    /// Records a participant into the non-staking cohort (idempotent)
    pub fn record_non_staker(&mut self, participant: Pubkey) {
        if !self.non_stakers.contains(&participant) {
            self.non_stakers.push(participant);
        }
    }
}
