use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{CpiTokenLedger, TokenLedger};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new distribution
 *
 * This instruction registers a merkle root and funds it:
 * - Creates the registry PDA on first use and reads the next id from it
 * - Creates a distribution PDA keyed by that id
 * - Creates the pooled custody account for the mint on first use
 * - Pulls the funded amount from the creator into pooled custody
 *
 * Access Control: Anyone able to fund the transfer
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistribution<'info> {
    /// Global registry (PDA)
    /// - Tracks the last assigned distribution id
    /// - Authority over all pooled custody accounts
    /// - Derived from: ["registry"]
    #[account(
        init_if_needed,
        payer = creator,
        space = Registry::LEN,
        seeds = [REGISTRY_SEED.as_bytes()],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The new distribution account (PDA)
    /// - Derived from: ["distribution", registry.last_id + 1]
    #[account(
        init,
        payer = creator,
        space = Distribution::LEN,
        seeds = [
            DISTRIBUTION_SEED.as_bytes(),
            registry.pending_id().to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distribution: Account<'info, Distribution>,

    /// Pooled custody for this mint (PDA)
    /// - Shared by every distribution of the same mint
    /// - Derived from: ["custody", token_mint]
    #[account(
        init_if_needed,
        payer = creator,
        token::mint = token_mint,
        token::authority = registry,
        token::token_program = token_program,
        seeds = [CUSTODY_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub custody: InterfaceAccount<'info, TokenAccount>,

    /// The token mint the distribution pays out in
    /// - Supports both SPL Token and Token 2022 programs
    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the distribution
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Creator, pays rent and signs the funding transfer
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates and funds a new distribution
 *
 * @param ctx - The account context containing all required accounts
 * @param root - Merkle root over hash(recipient, amount) leaves
 * @param amount - Amount pulled from the creator into pooled custody
 *
 * @returns the new distribution id (also set as return data)
 */
pub fn handle_create_distribution(
    ctx: Context<CreateDistribution>,
    root: [u8; 32],
    amount: u64,
) -> Result<u64> {
    let accounts = &mut *ctx.accounts;
    accounts.registry.bump = ctx.bumps.registry;
    accounts.distribution.bump = ctx.bumps.distribution;

    let creator = accounts.creator.key();
    let token_mint = accounts.token_mint.key();

    let mut ledger = CpiTokenLedger {
        token_program: accounts.token_program.to_account_info(),
        mint: accounts.token_mint.to_account_info(),
        decimals: accounts.token_mint.decimals,
        custody: &mut accounts.custody,
        custody_authority: accounts.registry.to_account_info(),
        custody_signer_seeds: &[],
        counterparty: &accounts.creator_token_account,
        counterparty_authority: Some(accounts.creator.to_account_info()),
    };

    let created = process_create_distribution(
        &mut accounts.registry,
        &mut accounts.distribution,
        &creator,
        root,
        amount,
        token_mint,
        &mut ledger,
    )?;

    let id = created.id;
    // Emit event for off-chain indexing and monitoring
    emit_cpi!(created);

    Ok(id)
}

/**
 * Registry side of distribution creation
 *
 * Validation Rules:
 * - amount must be non-zero
 * - root must not be all zeros
 *
 * The distribution is booked with the amount custody actually received, so
 * a transfer-fee mint can never leave it backed by another distribution's
 * share of the pool.
 *
 * Ordering: the id is computed first without writing it, the creator's funds
 * are pulled next, and only then are registry and distribution written. A
 * refused pull therefore leaves the registry counter untouched.
 */
pub fn process_create_distribution<L: TokenLedger>(
    registry: &mut Registry,
    distribution: &mut Distribution,
    creator: &Pubkey,
    root: [u8; 32],
    amount: u64,
    token_mint: Pubkey,
    ledger: &mut L,
) -> Result<DistributionCreated> {
    // ===== VALIDATION PHASE =====

    require!(amount > 0, AirdropError::InvalidAmount);
    require!(root != [0; 32], AirdropError::InvalidRoot);

    let id = registry.next_id()?;

    // ===== INTERACTIONS PHASE (Funding) =====

    let received = match ledger.pull_transfer(creator, amount) {
        Ok(received) => received,
        Err(err) => {
            msg!("funding pull of {} from {} refused: {}", amount, creator, err);
            return err!(AirdropError::Underfunded);
        }
    };
    // Only what reached custody backs this distribution's claims
    require!(received > 0, AirdropError::Underfunded);

    // ===== EFFECTS PHASE (State Updates) =====

    registry.last_id = id;
    distribution.id = id;
    distribution.root = root;
    distribution.token_mint = token_mint;
    distribution.initial_amount = received;
    distribution.remaining_amount = received;

    msg!(
        "distribution {} created with {} of mint {} ({} requested)",
        id,
        received,
        token_mint,
        amount
    );

    Ok(DistributionCreated {
        id,
        root,
        amount: received,
        token_mint,
    })
}
