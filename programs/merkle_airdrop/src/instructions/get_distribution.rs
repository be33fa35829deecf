use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct GetDistribution<'info> {
    /// CHECK: address is pinned by the seeds; loaded with Distribution::load
    #[account(seeds = [DISTRIBUTION_SEED.as_bytes(), id.to_le_bytes().as_ref()], bump)]
    pub distribution: UncheckedAccount<'info>,
}

/// Looks up distribution `id`; fails with `DistributionNotFound` if it was never created.
pub fn handle_get_distribution(ctx: Context<GetDistribution>, _id: u64) -> Result<DistributionView> {
    let distribution = Distribution::load(&ctx.accounts.distribution.to_account_info())?;
    Ok(DistributionView::from(&distribution))
}
