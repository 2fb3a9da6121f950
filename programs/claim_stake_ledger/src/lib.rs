use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Claim/Stake Ledger Program
 *
 * A Solana program for distributing a fixed token allocation to an
 * owner-curated list of participants, with an optional time-locked staking
 * path for the second half of each allocation.
 *
 * Key Features:
 * - Owner-granted eligibility list, applied in all-or-nothing batches
 * - Exactly-once half claim with a staking preference captured at claim time
 * - Optional time-locked staking of the reserved half (bookkeeping only)
 * - One-time unstake payout once the lock elapses; lifetime receipt per
 *   participant never exceeds the configured allocation
 * - Owner withdrawal escape hatch for the vault balance
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Ledger PDA: Stores campaign parameters, eligibility list, staking totals
 *   and reporting cohorts
 * - Token Vault PDA: Holds the tokens backing the campaign
 * - Participant Record PDAs: Track each participant's forward-only lifecycle
 *   (claimed -> staked -> unstaked)
 *
 * Workflow:
 * 1. Owner creates the ledger and deposits tokens into the vault
 * 2. Owner feeds batches of addresses into the eligibility list
 * 3. Participants claim half of their allocation and record whether they
 *    intend to stake the rest
 * 4. Participants that opted in lock the reserved half; the unlock time is
 *    pinned once and never moves
 * 5. Once the lock elapses, participants withdraw the reserved half
 * 6. Owner can withdraw any remaining vault balance
 *
 * Every instruction validates before it mutates and mutates before it
 * transfers, so a failed call leaves no partial state behind.
 */
#[program]
pub mod claim_stake_ledger {
    use super::*;

    /**
     * Creates a new claim/stake ledger
     *
     * Initializes a new distribution campaign: the ledger PDA with its
     * immutable parameters, the token vault, and the initial deposit.
     *
     * @param ctx - Account context containing ledger, vault, and owner accounts
     * @param airdrop_amount - Fixed allocation per participant
     * @param staking_duration - Lock interval in seconds applied when staking
     * @param deposit_amount - Amount of tokens deposited into the vault
     *
     * Access Control: The signer becomes the ledger owner
     */
    pub fn create_ledger(
        ctx: Context<CreateLedger>,
        airdrop_amount: u64,
        staking_duration: i64,
        deposit_amount: u64,
    ) -> Result<()> {
        handle_create_ledger(ctx, airdrop_amount, staking_duration, deposit_amount)
    }

    /**
     * Grants claim eligibility to a batch of addresses
     *
     * The batch is applied all-or-nothing: one zero address rejects the whole
     * call and leaves every address' eligibility unchanged. Re-granting an
     * already-eligible address is a no-op.
     *
     * @param ctx - Account context containing ledger and owner accounts
     * @param addresses - Addresses to grant eligibility to
     *
     * Access Control: Owner only
     */
    pub fn set_eligible(ctx: Context<SetEligible>, addresses: Vec<Pubkey>) -> Result<()> {
        handle_set_eligible(ctx, addresses)
    }

    /**
     * Claims the liquid half of the caller's allocation
     *
     * Pays half of the fixed allocation immediately regardless of the
     * preference, and records whether the caller intends to stake the
     * reserved half.
     *
     * @param ctx - Account context containing ledger, participant record, and
     * token accounts
     * @param wants_stake - Whether the caller intends to stake later
     *
     * Access Control: Any eligible address, exactly once
     */
    pub fn claim(ctx: Context<Claim>, wants_stake: bool) -> Result<()> {
        handle_claim(ctx, wants_stake)
    }

    /**
     * Locks the reserved half for the configured staking duration
     *
     * Bookkeeping only: no tokens move. Pins the unlock time and updates the
     * campaign staking totals and the staker cohort.
     *
     * @param ctx - Account context containing ledger and participant record
     *
     * Access Control: Participants that claimed with the preference on
     */
    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        handle_stake(ctx)
    }

    /**
     * Withdraws a matured stake
     *
     * Pays out the reserved half once the lock has elapsed. Terminal and
     * non-repeatable: a second call fails, and staking is permanently
     * foreclosed afterwards.
     *
     * @param ctx - Account context containing ledger, participant record, and
     * token accounts
     *
     * Access Control: Participants with a matured stake
     */
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        handle_unstake(ctx)
    }

    /**
     * Withdraws tokens from the vault to the owner
     *
     * Escape-hatch transfer with no participant-state interaction. Carries no
     * reserve check against outstanding staked liabilities.
     *
     * @param ctx - Account context containing ledger, vault, and owner accounts
     * @param amount - Amount of tokens to withdraw
     *
     * Access Control: Owner only
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, amount)
    }
}
