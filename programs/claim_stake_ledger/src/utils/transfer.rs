use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Pays tokens out of the ledger vault with the ledger PDA as authority.
/// Supports both SPL Token and Token 2022 via transfer_checked.
pub fn transfer_from_vault<'a>(
    ledger: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: vault,
        mint,
        to,
        authority: ledger,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}

/// Deposits tokens into the ledger vault from an owner-signed token account.
pub fn transfer_into_vault<'a>(
    owner: AccountInfo<'a>,
    from: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to: vault,
        authority: owner,
    };

    transfer_checked(
        CpiContext::new(token_program, cpi_accounts),
        amount,
        decimals,
    )
}
