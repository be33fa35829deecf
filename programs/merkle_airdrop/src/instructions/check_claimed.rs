use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for querying a recipient's claim status
 *
 * Read-only. Neither account needs to exist: an unknown distribution or a
 * recipient who never claimed both read as not claimed.
 */
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct CheckClaimed<'info> {
    /// Distribution PDA for `id`
    /// CHECK: address is pinned by the seeds; the account may not exist
    #[account(seeds = [DISTRIBUTION_SEED.as_bytes(), id.to_le_bytes().as_ref()], bump)]
    pub distribution: UncheckedAccount<'info>,

    /// Claim status PDA for (distribution, recipient)
    /// CHECK: address is pinned by the seeds; read with ClaimStatus::is_claimed
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), distribution.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,

    /// CHECK: only its address is used
    pub recipient: UncheckedAccount<'info>,
}

/**
 * Returns whether the recipient has claimed from distribution `id`
 *
 * @returns true once the recipient's claim succeeded, false otherwise
 */
pub fn handle_check_claimed(ctx: Context<CheckClaimed>, _id: u64) -> Result<bool> {
    Ok(ClaimStatus::is_claimed(&ctx.accounts.claim_status.to_account_info()))
}
