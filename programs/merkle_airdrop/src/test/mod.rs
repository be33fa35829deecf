
mod test_queries;

use std::collections::{BTreeMap, HashMap};

use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::event::{DistributionCreated, TokensClaimed};
use crate::instructions::{process_claim, process_create_distribution};
use crate::state::{ClaimStatus, Distribution, Registry};
use merkle_tree::{Entitlement, EntitlementTree};
use mock_token::MockToken;

pub fn wallet(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

pub fn assert_error(err: anchor_lang::error::Error, expected: AirdropError) {
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}

/// Program state held in memory: the registry, every distribution by id,
/// claim statuses by (id, recipient) and a mock token.
#[derive(Debug, Clone, PartialEq)]
pub struct Harness {
    pub registry: Registry,
    pub distributions: BTreeMap<u64, Distribution>,
    pub claims: HashMap<(u64, Pubkey), ClaimStatus>,
    pub token: MockToken,
    pub mint: Pubkey,
}

impl Harness {
    pub fn new(issuer: Pubkey, balance: u64) -> Self {
        Self {
            registry: Registry::default(),
            distributions: BTreeMap::new(),
            claims: HashMap::new(),
            token: MockToken::with_balance(issuer, balance),
            mint: wallet(0xAA),
        }
    }

    pub fn create(
        &mut self,
        issuer: Pubkey,
        root: [u8; 32],
        amount: u64,
    ) -> Result<DistributionCreated> {
        let mut distribution = Distribution::default();
        let created = process_create_distribution(
            &mut self.registry,
            &mut distribution,
            &issuer,
            root,
            amount,
            self.mint,
            &mut self.token,
        )?;
        self.distributions.insert(created.id, distribution);
        Ok(created)
    }

    /// Claim against distribution `id`. The status account is only stored
    /// once a claim succeeds, as with an init_if_needed account in a
    /// reverted transaction.
    pub fn claim(
        &mut self,
        id: u64,
        recipient: Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<TokensClaimed> {
        let distribution = self
            .distributions
            .get_mut(&id)
            .ok_or(AirdropError::DistributionNotFound)?;
        let mut status = self
            .claims
            .get(&(id, recipient))
            .cloned()
            .unwrap_or_default();

        let claimed = process_claim(
            distribution,
            &mut status,
            &recipient,
            amount,
            proof,
            &mut self.token,
        )?;
        self.claims.insert((id, recipient), status);
        Ok(claimed)
    }

    pub fn is_claimed(&self, id: u64, recipient: &Pubkey) -> bool {
        self.claims
            .get(&(id, *recipient))
            .map(|status| status.claimed)
            .unwrap_or(false)
    }

    pub fn remaining(&self, id: u64) -> u64 {
        self.distributions[&id].remaining_amount
    }
}

/// Issuer `wallet(0xA0)` with `balance`, one distribution over `entitlements`
/// funded with `funded`. Returns the harness, tree and distribution id.
pub fn funded_distribution(
    entitlements: &[Entitlement],
    funded: u64,
) -> (Harness, EntitlementTree, u64) {
    let issuer = wallet(0xA0);
    let tree = EntitlementTree::new(entitlements);
    let mut harness = Harness::new(issuer, funded);
    let created = harness.create(issuer, tree.root(), funded).unwrap();
    (harness, tree, created.id)
}
