use anchor_lang::prelude::*;
use crate::error::AirdropError;

/**
 * Global registry account
 *
 * Hands out distribution ids and owns every pooled custody account.
 *
 * Derivation: ["registry"]
 *
 * Lifecycle:
 * 1. Created on the first distribution creation (using init_if_needed)
 * 2. `last_id` advanced by each successful creation
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Registry {
    /// Bump seed for PDA derivation
    /// - Needed to sign transfers out of pooled custody
    pub bump: u8,

    /// Id of the most recently created distribution
    /// - 0 until the first creation
    pub last_id: u64,
}

impl Registry {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Registry>();

    /// Id the next successful creation will receive.
    ///
    /// Does not mutate the registry, so a creation that fails after this
    /// call consumes nothing.
    pub fn next_id(&self) -> Result<u64> {
        self.last_id
            .checked_add(1)
            .ok_or(error!(AirdropError::ArithmeticOverflow))
    }

    /// Id used to derive the new distribution's address during account
    /// validation.
    ///
    /// Wraps instead of panicking so an exhausted counter reaches
    /// `next_id` and fails there with `ArithmeticOverflow`.
    pub fn pending_id(&self) -> u64 {
        self.last_id.wrapping_add(1)
    }
}
