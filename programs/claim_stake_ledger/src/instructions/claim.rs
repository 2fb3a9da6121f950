use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for claiming the liquid half of an allocation
 *
 * This instruction pays an eligible participant half of the fixed allocation
 * and records their staking preference. The other half stays reserved in the
 * vault: participants that claimed with the preference on can lock it via
 * stake and receive it via unstake once the lock elapses.
 *
 * Access Control: Any eligible address can claim exactly once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The ledger account containing campaign parameters
    /// - Must be a valid existing ledger PDA
    /// - Will be modified when the claimant opts out of staking (cohort)
    #[account(mut)]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// Individual lifecycle record for this claimant
    /// - Tracks the claimed/staked/unstaked flags and the unlock time
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

    /// The claimant attempting to claim
    /// - Must sign the transaction
    /// - Must have been granted eligibility by the owner
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim and records the staking preference
 *
 * @param ctx - The account context containing all required accounts
 * @param wants_stake - Whether the claimant intends to stake the reserved half
 *
 * Validation Process:
 * 1. Verify the claimant is eligible and has not already claimed
 * 2. Check the vault can cover the payout
 * 3. Mark the claim and record the preference, then transfer
 */
pub fn handle_claim(ctx: Context<Claim>, wants_stake: bool) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let participant = &mut ctx.accounts.participant;
    let claimant_key = ctx.accounts.claimant.key();

    // ===== VALIDATION PHASE =====

    // Eligibility and exactly-once checks; a rejected claim mutates nothing
    participant.validate_claim(ledger.is_eligible(&claimant_key))?;

    // Half is paid now, the other half stays reserved for unstake
    let claim_amount = ledger.half_amount();

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= claim_amount,
        ClaimStakeLedgerError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark the claim before any token movement (CEI pattern - effects before
    // interactions)
    participant.record_claim(wants_stake);

    // Opt-outs are tracked in the non-staking cohort for reporting
    if !wants_stake {
        ledger.record_non_staker(claimant_key);
    }

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

    // Transfer the liquid half from vault to claimant using PDA authority
    transfer_from_vault(
        ctx.accounts.ledger.to_account_info(), // Delayed AccountInfo acquisition
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claim_amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(Claimed {
        ledger: ledger_key,
        participant: claimant_key,
        amount: claim_amount,
        wants_stake,
    });

    Ok(())
}
