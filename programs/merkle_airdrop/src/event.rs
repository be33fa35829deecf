use anchor_lang::prelude::*;

/// Event emitted when a new distribution is created and funded
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionCreated {
    /// Identifier assigned by the registry
    pub id: u64,
    /// Merkle root committing to the entitlement set
    pub root: [u8; 32],
    /// Amount pulled into pooled custody
    pub amount: u64,
    /// Token mint the distribution pays out in
    pub token_mint: Pubkey,
}

/// Event emitted when a recipient's claim is paid out
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct TokensClaimed {
    /// Wallet that received the tokens
    pub recipient: Pubkey,
    /// Distribution the claim was made against
    pub id: u64,
    /// Amount transferred in this claim
    pub amount: u64,
    /// Distribution balance left after this claim
    pub remaining_amount: u64,
}
