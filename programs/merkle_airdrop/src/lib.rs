use anchor_lang::prelude::*;

declare_id!("7v3mQkB7yT1kQfGkq8Mb2rQ4pXJx8fH1w5oZ6sXnYc2D");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::DistributionView;

/**
 * Merkle Airdrop Program
 *
 * Permissionless token distributions committed to by a single merkle root.
 * An issuer funds a distribution once; each recipient named in the tree
 * claims their committed amount once, without the issuer doing anything else.
 *
 * Key Features:
 * - Merkle root over hash(recipient, amount) leaves, sorted-pair parents
 * - Exactly one claim per (distribution, recipient), for the exact committed amount
 * - Claims never exceed what the distribution was funded with
 * - Pooled custody: one token account per mint shared by all its distributions
 * - Cross-program call event emission for indexers
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Registry PDA: Assigns distribution ids (1, 2, 3, ...) and owns custody
 * - Distribution PDA: Root, mint and remaining balance of one distribution
 * - Custody PDA: Per-mint token account holding the pooled funds
 * - Claim Status PDAs: Whether a recipient has claimed from a distribution
 *
 * Workflow:
 * 1. Issuer builds the tree off-chain and creates a distribution with its root
 * 2. Recipients (or anyone on their behalf) claim with their merkle proof
 * 3. Indexers follow DistributionCreated / TokensClaimed events
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates and funds a new distribution
     *
     * Pulls `amount` from the creator's token account into pooled custody and
     * records `root` under the next distribution id.
     *
     * @param ctx - Account context containing registry, distribution, custody and creator accounts
     * @param root - 32-byte merkle root over the entitlement set
     * @param amount - Total amount of tokens to distribute
     *
     * @returns the new distribution id
     *
     * Access Control: Anyone
     */
    pub fn create_distribution(
        ctx: Context<CreateDistribution>,
        root: [u8; 32],
        amount: u64,
    ) -> Result<u64> {
        handle_create_distribution(ctx, root, amount)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * @param ctx - Account context containing distribution, claim status and token accounts
     * @param id - Distribution id
     * @param amount - Exact amount committed to the recipient
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any payer; tokens go to the recipient's own token account
     */
    pub fn claim(ctx: Context<Claim>, id: u64, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, id, amount, proof)
    }

    /**
     * Returns whether a recipient has already claimed from a distribution
     *
     * Access Control: Anyone (read-only)
     */
    pub fn check_claimed(ctx: Context<CheckClaimed>, id: u64) -> Result<bool> {
        handle_check_claimed(ctx, id)
    }

    /**
     * Returns the state of a distribution
     *
     * Access Control: Anyone (read-only)
     * Note: Fails with DistributionNotFound for ids that were never created
     */
    pub fn get_distribution(ctx: Context<GetDistribution>, id: u64) -> Result<DistributionView> {
        handle_get_distribution(ctx, id)
    }
}
