use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * Records whether a recipient has claimed from one distribution. A recipient
 * claims at most once per distribution; the flag is never cleared.
 *
 * Derivation: ["claim", distribution_key, recipient_key]
 *
 * Lifecycle:
 * 1. Created on the first claim (using init_if_needed)
 * 2. Flipped to claimed by that same claim
 * 3. Never closed, so the flag survives for the life of the distribution
 */
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct ClaimStatus {
    /// Set by the recipient's successful claim
    pub claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Claimed flag of a status account that may not exist yet.
    ///
    /// Never fails: uninitialized, foreign or unreadable accounts read as
    /// not claimed.
    pub fn is_claimed(info: &AccountInfo) -> bool {
        if info.owner != &crate::ID || info.data_is_empty() {
            return false;
        }
        let Ok(data) = info.try_borrow_data() else {
            return false;
        };
        ClaimStatus::try_deserialize(&mut &data[..])
            .map(|status| status.claimed)
            .unwrap_or(false)
    }
}
