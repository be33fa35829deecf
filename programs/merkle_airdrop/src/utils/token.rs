use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TokenAccount, TransferChecked};
use crate::error::AirdropError;

/// Value source the ledger moves tokens with.
///
/// `pull_transfer` moves `amount` from `from` into pooled custody and returns
/// how much custody actually received, which is less than `amount` for mints
/// that withhold a transfer fee. `push_transfer` moves `amount` out of pooled
/// custody to `to`. Either may refuse; the caller aborts the whole operation
/// when it does.
pub trait TokenLedger {
    fn pull_transfer(&mut self, from: &Pubkey, amount: u64) -> Result<u64>;
    fn push_transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// [`TokenLedger`] backed by the token program.
///
/// `counterparty` is the outside token account: the creator's source account
/// when pulling, the recipient's destination account when pushing.
pub struct CpiTokenLedger<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub custody: &'a mut InterfaceAccount<'info, TokenAccount>,
    /// Registry PDA, authority of every custody account
    pub custody_authority: AccountInfo<'info>,
    pub custody_signer_seeds: &'a [&'a [&'a [u8]]],
    pub counterparty: &'a InterfaceAccount<'info, TokenAccount>,
    /// Signer authorizing pulls from `counterparty`; unused for pushes
    pub counterparty_authority: Option<AccountInfo<'info>>,
}

impl<'a, 'info> TokenLedger for CpiTokenLedger<'a, 'info> {
    fn pull_transfer(&mut self, from: &Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(*from, self.counterparty.owner, AirdropError::RecipientMismatch);
        require!(self.counterparty.amount >= amount, AirdropError::Underfunded);
        let authority = self
            .counterparty_authority
            .clone()
            .ok_or(AirdropError::Underfunded)?;

        let before = self.custody.amount;
        transfer_token(
            authority,
            self.counterparty.to_account_info(),
            self.custody.to_account_info(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            None, // creator signs the outer transaction
        )?;

        // Token-2022 transfer fees are withheld in the destination account
        self.custody.reload()?;
        self.custody
            .amount
            .checked_sub(before)
            .ok_or(error!(AirdropError::ArithmeticOverflow))
    }

    fn push_transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.counterparty.owner, AirdropError::RecipientMismatch);
        require!(self.custody.amount >= amount, AirdropError::TransferFailed);

        transfer_token(
            self.custody_authority.clone(),
            self.custody.to_account_info(),
            self.counterparty.to_account_info(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.custody_signer_seeds),
        )
    }
}
