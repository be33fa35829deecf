use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and verification limits shared by every instruction.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the global registry PDA
/// - Used in: ["registry"]
/// - Holds the distribution id counter
/// - Signs every transfer out of pooled custody
#[constant]
pub const REGISTRY_SEED: &str = "registry";

/// Seed for distribution PDA derivation
/// - Used in: ["distribution", id (u64 little-endian)]
/// - One account per created distribution, never closed
#[constant]
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for the pooled custody token account
/// - Used in: ["custody", token_mint]
/// - One account per mint, shared by every distribution of that mint
#[constant]
pub const CUSTODY_SEED: &str = "custody";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distribution_key, recipient_key]
/// - Its existence with `claimed == true` is what blocks a second claim
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== VERIFICATION LIMITS =====

/// Longest accepted membership proof
/// - 32 levels covers 2^32 leaves
/// - Longer proofs are rejected before any hashing
pub const MAX_PROOF_LEN: usize = 32;
