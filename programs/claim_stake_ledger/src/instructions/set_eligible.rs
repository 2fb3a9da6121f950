use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for granting claim eligibility
 *
 * This instruction lets the owner feed a batch of addresses into the
 * eligibility list. The batch is applied all-or-nothing: one invalid address
 * rejects the whole call and leaves every address' eligibility unchanged.
 *
 * Access Control: Only the owner can grant eligibility
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetEligible<'info> {
    /// The ledger account to update
    /// - Must be a valid existing ledger PDA
    /// - Will be modified to extend the eligibility list
    #[account(mut)]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// The owner of the ledger
    /// - Must match the owner stored in the ledger state
    /// - Only this account can call this instruction
    #[account(constraint = owner.key() == ledger.owner @ ClaimStakeLedgerError::OnlyOwner)]
    pub owner: Signer<'info>,
}

/**
 * Grants claim eligibility to a batch of addresses
 *
 * @param ctx - The account context containing ledger and owner accounts
 * @param addresses - Addresses to grant eligibility to, applied verbatim
 *
 * Validation Rules:
 * - Any zero address rejects the entire batch (no partial application)
 * - The resulting list must fit within the reserved capacity
 * - Re-granting an already-eligible address is a no-op, not an error
 */
pub fn handle_set_eligible(ctx: Context<SetEligible>, addresses: Vec<Pubkey>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    // Validate-then-commit inside grant_eligibility: a rejected batch leaves
    // the eligibility list untouched
    let added = ledger.grant_eligibility(&addresses)?;
    let total_eligible = ledger.eligible.len() as u64;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(EligibilityGranted {
        ledger: ledger.key(),
        owner: ctx.accounts.owner.key(),
        added,
        total_eligible,
    });

    Ok(())
}
