use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_into_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new claim/stake ledger
 *
 * This instruction initializes a new distribution campaign:
 * - Creates the ledger PDA holding the campaign parameters and state
 * - Creates a token vault PDA to hold the tokens backing the campaign
 * - Transfers the initial deposit from the owner into the vault
 *
 * Access Control: The signer becomes the owner of the ledger
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateLedger<'info> {
    /// The main ledger account (PDA)
    /// - Stores all campaign parameters and state
    /// - Derived from: ["ledger", token_mint, owner]
    /// - Space for the participant lists is reserved at full capacity
    #[account(
        init,
        payer = owner,
        space = ClaimStakeLedger::LEN,
        seeds = [
            LEDGER_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump
    )]
    pub ledger: Account<'info, ClaimStakeLedger>,

    /// Token vault account (PDA) that holds the tokens backing the campaign
    /// - Controlled by the ledger PDA as token authority
    /// - Derived from: ["vault", ledger_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = ledger,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the tokens to be deposited
    /// - Must be owned by the owner signer
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the ledger
    /// - Grants eligibility and can withdraw from the vault
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new claim/stake ledger and funds its vault
 *
 * @param ctx - The account context containing all required accounts
 * @param airdrop_amount - Fixed allocation per participant (half paid at
 *                         claim, half reserved for unstake)
 * @param staking_duration - Lock interval in seconds applied when staking
 * @param deposit_amount - Amount of tokens deposited into the vault
 */
pub fn handle_create_ledger(
    ctx: Context<CreateLedger>,
    airdrop_amount: u64,
    staking_duration: i64,
    deposit_amount: u64,
) -> Result<()> {
    // Validate the campaign parameters
    require!(airdrop_amount > 0, ClaimStakeLedgerError::InvalidAmount);
    require!(deposit_amount > 0, ClaimStakeLedgerError::InvalidAmount);
    require!(staking_duration > 0, ClaimStakeLedgerError::InvalidDuration);
    require!(
        staking_duration <= MAX_STAKING_DURATION,
        ClaimStakeLedgerError::StakingDurationTooLong
    );

    let ledger = &mut ctx.accounts.ledger;

    // Initialize the campaign parameters; they are immutable from here on
    ledger.bump = ctx.bumps.ledger;
    ledger.owner = ctx.accounts.owner.key();
    ledger.token_mint = ctx.accounts.token_mint.key();
    ledger.token_vault = ctx.accounts.token_vault.key();
    ledger.airdrop_amount = airdrop_amount;
    ledger.staking_duration = staking_duration;
    // Note: totals, eligibility list and cohorts use default values (0/empty)

    // Transfer the deposit from owner to vault so payouts are funded
    transfer_into_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        deposit_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(LedgerCreated {
        ledger: ctx.accounts.ledger.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        airdrop_amount,
        staking_duration,
        deposit_amount,
    });

    Ok(())
}
