use anchor_lang::prelude::*;
use crate::error::AirdropError;
use crate::state::ClaimStatus;
use crate::utils::{hash_leaf, verify};

/**
 * Distribution state account
 *
 * One funded, root-committed allocation. Its `remaining_amount` is the only
 * authority on how much of the pooled custody balance this distribution may
 * still pay out.
 *
 * Derivation: ["distribution", id]
 *
 * Lifecycle:
 * 1. Created during create_distribution with remaining_amount = initial_amount
 * 2. remaining_amount decremented by each successful claim
 * 3. Never closed; root is never rewritten
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Distribution {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Identifier assigned by the registry (starts at 1)
    pub id: u64,

    /// Merkle root over hash(recipient, amount) leaves
    /// - Written once at creation
    pub root: [u8; 32],

    /// Token mint this distribution pays out in
    /// - Selects the pooled custody account
    pub token_mint: Pubkey,

    /// Amount funded at creation
    pub initial_amount: u64,

    /// Amount still claimable
    /// - initial_amount minus every successful claim so far
    pub remaining_amount: u64,
}

impl Distribution {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distribution>();

    /// Runs the claim checks in order without touching any state:
    /// already claimed, then remaining balance, then the merkle proof.
    pub fn check_claim(
        &self,
        claim_status: &ClaimStatus,
        recipient: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(!claim_status.claimed, AirdropError::AlreadyClaimed);
        require!(
            amount <= self.remaining_amount,
            AirdropError::InsufficientRemaining
        );

        let leaf = hash_leaf(recipient, amount);
        require!(verify(proof, self.root, leaf), AirdropError::BadProof);

        Ok(())
    }

    /// Books a paid-out claim. Returns the remaining balance afterwards.
    pub fn settle_claim(&mut self, claim_status: &mut ClaimStatus, amount: u64) -> Result<u64> {
        self.remaining_amount = self
            .remaining_amount
            .checked_sub(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        claim_status.claimed = true;
        Ok(self.remaining_amount)
    }

    /// Amount paid out so far.
    pub fn claimed_amount(&self) -> u64 {
        self.initial_amount.saturating_sub(self.remaining_amount)
    }

    /// Reads a distribution from an account that may not exist.
    ///
    /// Missing, empty or foreign accounts are `DistributionNotFound` rather
    /// than a zeroed distribution.
    pub fn load(info: &AccountInfo) -> Result<Distribution> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(AirdropError::DistributionNotFound);
        }
        let data = info.try_borrow_data()?;
        Distribution::try_deserialize(&mut &data[..])
            .map_err(|_| error!(AirdropError::DistributionNotFound))
    }

    /// Loads the distribution a claim pays out of and checks it pays in `mint`.
    pub fn load_for_claim(info: &AccountInfo, mint: &Pubkey) -> Result<Distribution> {
        let distribution = Distribution::load(info)?;
        require_keys_eq!(
            distribution.token_mint,
            *mint,
            AirdropError::TokenMintMismatch
        );
        Ok(distribution)
    }

    /// Writes the distribution back into its account.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        require!(info.owner == &crate::ID, AirdropError::DistributionNotFound);
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }
}

/// Read-only snapshot returned by get_distribution
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct DistributionView {
    pub id: u64,
    pub root: [u8; 32],
    pub token_mint: Pubkey,
    pub initial_amount: u64,
    pub remaining_amount: u64,
    pub claimed_amount: u64,
}

impl From<&Distribution> for DistributionView {
    fn from(distribution: &Distribution) -> Self {
        Self {
            id: distribution.id,
            root: distribution.root,
            token_mint: distribution.token_mint,
            initial_amount: distribution.initial_amount,
            remaining_amount: distribution.remaining_amount,
            claimed_amount: distribution.claimed_amount(),
        }
    }
}
