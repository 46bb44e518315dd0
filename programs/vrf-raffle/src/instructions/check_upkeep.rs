use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED},
    state::{Config, Raffle, UpkeepStatus},
};

/// Read-only poll for the automation network. Writes nothing, so it can be
/// simulated as often as the keeper likes.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    let status = ctx
        .accounts
        .raffle
        .check_draw_ready(now, ctx.accounts.config.interval);

    msg!(
        "Upkeep needed: {} (reasons {:#06b})",
        status.ready,
        status.reasons
    );

    Ok(status)
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}
