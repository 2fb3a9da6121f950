use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for the owner withdrawal escape hatch
 *
 * This instruction lets the owner pull an arbitrary amount out of the vault,
 * with no participant-state interaction.
 *
 * Access Control: Only the owner can withdraw
 *
 * Business Logic:
 * - The withdrawal is NOT protected by a reserve check: the vault may hold
 *   halves reserved for participants that staked and not yet unstaked, and
 *   this instruction can drain them. Operational procedure must account for
 *   outstanding staked liabilities before withdrawing.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The ledger account to withdraw from
    /// - Must be a valid existing ledger PDA
    #[account(mut)]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// Token vault containing the campaign tokens
    /// - Controlled by the ledger PDA
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the tokens
    /// - Must be owned by the owner
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = ledger.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the ledger's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == ledger.token_mint @ ClaimStakeLedgerError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the ledger
    /// - Must match the owner stored in the ledger state
    /// - Only this account can call this instruction
    #[account(
        mut,
        constraint = owner.key() == ledger.owner @ ClaimStakeLedgerError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws tokens from the vault to the owner
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to withdraw, must be non-zero
 *
 * Validation Rules:
 * - Amount must be greater than zero
 * - The vault must hold at least the requested amount
 * - Only the owner can call this function
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let ledger = &ctx.accounts.ledger;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, ClaimStakeLedgerError::InvalidAmount);
    require!(
        ctx.accounts.token_vault.amount >= amount,
        ClaimStakeLedgerError::InsufficientVaultBalance
    );

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for the vault transfer
    let seeds = &[
        LEDGER_SEED.as_bytes(),
        ledger.token_mint.as_ref(),
        ledger.owner.as_ref(),
        &[ledger.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_from_vault(
        ctx.accounts.ledger.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TokensWithdrawn {
        ledger: ctx.accounts.ledger.key(),
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}
