use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{CpiTokenLedger, TokenLedger};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * Pays a recipient the exact amount committed to them in the distribution's
 * merkle tree. Anyone may submit the claim; tokens only ever reach a token
 * account owned by the recipient.
 *
 * Access Control: Any payer, for any recipient holding a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Claim<'info> {
    /// Global registry, signs for pooled custody
    #[account(
        seeds = [REGISTRY_SEED.as_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The distribution being claimed from
    /// - Derived from: ["distribution", id]
    /// - Loaded and written back by the handler, so an unknown id fails with
    ///   DistributionNotFound as in get_distribution
    /// CHECK: address pinned by seeds; contents checked by Distribution::load_for_claim
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes(), id.to_le_bytes().as_ref()],
        bump
    )]
    pub distribution: UncheckedAccount<'info>,

    /// Claim status for this (distribution, recipient) pair
    /// - Derived from: ["claim", distribution_key, recipient_key]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distribution.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Pooled custody for the distribution's mint
    /// - Derived from: ["custody", token_mint]
    #[account(
        mut,
        seeds = [CUSTODY_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub custody: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match distribution.token_mint (checked in the handler)
    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The wallet named in the merkle leaf
    /// CHECK: any address; entitlement is proven by the merkle proof
    pub recipient: UncheckedAccount<'info>,

    /// Pays rent for the claim status account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a token claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param id - Distribution id (selects the distribution PDA)
 * @param amount - Amount committed to the recipient in the merkle tree
 * @param proof - Sibling hashes from the recipient's leaf up to the root
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    _id: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let recipient = accounts.recipient.key();

    let distribution_info = accounts.distribution.to_account_info();
    let mut distribution =
        Distribution::load_for_claim(&distribution_info, &accounts.token_mint.key())?;

    // Prepare PDA signing seeds for the custody transfer
    let registry_bump = [accounts.registry.bump];
    let seeds: &[&[u8]] = &[REGISTRY_SEED.as_bytes(), &registry_bump];
    let signer = &[seeds];

    let mut ledger = CpiTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        mint: accounts.token_mint.to_account_info(),
        decimals: accounts.token_mint.decimals,
        custody: &mut accounts.custody,
        custody_authority: accounts.registry.to_account_info(),
        custody_signer_seeds: signer,
        counterparty: &accounts.recipient_token_account,
        counterparty_authority: None,
    };

    let claimed = process_claim(
        &mut distribution,
        &mut accounts.claim_status,
        &recipient,
        amount,
        &proof,
        &mut ledger,
    )?;
    distribution.store(&distribution_info)?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(claimed);

    Ok(())
}

/**
 * Ledger side of a claim
 *
 * Validation Process (first failure aborts, nothing is written):
 * 1. Recipient has not claimed from this distribution
 * 2. amount fits in the distribution's remaining balance
 * 3. proof folds hash(recipient, amount) up to the distribution root
 * 4. Custody pays the recipient
 *
 * Only after all four succeed are remaining_amount and the claimed flag
 * updated.
 */
pub fn process_claim<L: TokenLedger>(
    distribution: &mut Distribution,
    claim_status: &mut ClaimStatus,
    recipient: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    ledger: &mut L,
) -> Result<TokensClaimed> {
    // ===== VALIDATION PHASE =====

    distribution.check_claim(claim_status, recipient, amount, proof)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    if let Err(err) = ledger.push_transfer(recipient, amount) {
        msg!(
            "payout of {} to {} from distribution {} refused: {}",
            amount,
            recipient,
            distribution.id,
            err
        );
        return err!(AirdropError::TransferFailed);
    }

    // ===== EFFECTS PHASE (State Updates) =====

    let remaining_amount = distribution.settle_claim(claim_status, amount)?;

    msg!(
        "{} claimed {} from distribution {}, {} remaining",
        recipient,
        amount,
        distribution.id,
        remaining_amount
    );

    Ok(TokensClaimed {
        recipient: *recipient,
        id: distribution.id,
        amount,
        remaining_amount,
    })
}
