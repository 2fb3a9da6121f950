use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for staking the reserved half of an allocation
 *
 * This instruction is pure bookkeeping: the liquid half already moved at
 * claim time and the reserved half stays in the vault until unstake. Staking
 * marks the record, pins the unlock time, and updates the campaign totals.
 *
 * Access Control: Any participant that claimed with the preference on
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The ledger account containing campaign parameters
    /// - Must be a valid existing ledger PDA
    /// - Will be modified to update staking totals and the staker cohort
    #[account(mut)]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// Individual lifecycle record for this claimant
    /// - Must have claimed with wants_stake set to pass validation
    /// - Derived from: ["participant", ledger_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ParticipantRecord::LEN,
        seeds = [PARTICIPANT_SEED.as_bytes(), ledger.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub participant: Account<'info, ParticipantRecord>,

    /// The participant attempting to stake
    /// - Must sign the transaction
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Locks the reserved half and starts the staking clock
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Process:
 * 1. Verify the participant claimed with the stake preference on
 * 2. Verify the participant has not already staked or unstaked
 * 3. Pin the unlock time and update the campaign totals
 *
 * No token transfer occurs here: only the record and the totals change.
 */
pub fn handle_stake(ctx: Context<Stake>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let participant = &mut ctx.accounts.participant;
    let claimant_key = ctx.accounts.claimant.key();

    // ===== VALIDATION PHASE =====

    participant.validate_stake()?;

    // Single authoritative time read for this operation
    let current_time = Clock::get()?.unix_timestamp;
    let unlock_time = current_time
        .checked_add(ledger.staking_duration)
        .ok_or(ClaimStakeLedgerError::ArithmeticOverflow)?;

    let stake_amount = ledger.half_amount();

    // ===== EFFECTS PHASE (State Updates) =====

    // Totals are validated before being written, so a failure here leaves
    // both the ledger and the participant record untouched
    ledger.record_staker(claimant_key, stake_amount)?;

    // Pin the unlock time; it is never altered afterwards
    participant.record_stake(unlock_time);

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(Staked {
        ledger: ledger.key(),
        participant: claimant_key,
        amount: stake_amount,
        unlock_time,
        total_participants_staked: ledger.total_participants_staked,
        total_amount_staked: ledger.total_amount_staked,
    });

    Ok(())
}
