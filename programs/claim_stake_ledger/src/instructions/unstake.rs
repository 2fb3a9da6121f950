use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for withdrawing a matured stake
 *
 * This instruction pays out the reserved half once the lock has elapsed.
 * It is the terminal transition for a participant: after it succeeds the
 * lifetime payout equals the full allocation and no further payout-issuing
 * call can succeed for this address.
 *
 * Access Control: Any participant with a matured stake
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The ledger account containing campaign parameters
    /// - Must be a valid existing ledger PDA
    #[account(mut)]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// Individual lifecycle record for this claimant
    /// - Must be staked and past the unlock time to pass validation
    /// - Derived from: ["participant", ledger_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ParticipantRecord::LEN,
        seeds = [PARTICIPANT_SEED.as_bytes(), ledger.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub participant: Account<'info, ParticipantRecord>,

    /// Token vault holding the tokens backing the campaign
    /// - Controlled by the ledger PDA
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = ledger.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the ledger's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == ledger.token_mint @ ClaimStakeLedgerError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The participant attempting to unstake
    /// - Must sign the transaction
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays out a matured stake
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Process:
 * 1. Verify the participant staked and has not already unstaked
 * 2. Verify the lock elapsed: succeeds at exactly the unlock time
 * 3. Check the vault can cover the payout
 * 4. Mark the record unstaked, then transfer
 */
pub fn handle_unstake(ctx: Context<Unstake>) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let participant = &mut ctx.accounts.participant;
    let claimant_key = ctx.accounts.claimant.key();

    // ===== VALIDATION PHASE =====

    // Single authoritative time read for this operation
    let current_time = Clock::get()?.unix_timestamp;
    participant.validate_unstake(current_time)?;

    // The payout is the reserved half: lifetime receipt across claim and
    // unstake equals the configured allocation, never more
    let payout_amount = ledger.half_amount();

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= payout_amount,
        ClaimStakeLedgerError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark the terminal transition before any token movement (CEI pattern -
    // effects before interactions)
    participant.record_unstake();

    // Prepare immutable references for PDA signing and the event
    let token_mint_key = ledger.token_mint;
    let owner_key = ledger.owner;
    let ledger_bump = ledger.bump;
    let ledger_key = ledger.key();

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for the vault payout
    let seeds = &[
        LEDGER_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        &[ledger_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer the reserved half from vault to claimant using PDA authority
    transfer_from_vault(
        ctx.accounts.ledger.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        payout_amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(Unstaked {
        ledger: ledger_key,
        participant: claimant_key,
        amount: payout_amount,
    });

    Ok(())
}
