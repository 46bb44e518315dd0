use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED, TREASURY_SEED},
    state::{Config, Raffle, RaffleState, Treasury},
};

/// Snapshot of the live round together with its fixed parameters
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleInfo {
    /// Deployer that created the raffle
    pub authority: Pubkey,
    pub state: RaffleState,
    pub entrance_fee: u64,
    pub interval: u64,
    pub last_draw_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    pub player_count: u64,
    pub pool: u64,
    pub pending_request_id: Option<u64>,
    pub round_index: u64,
    /// Lamports paid to winners across all rounds
    pub total_paid_out: u64,
}

impl RaffleInfo {
    pub fn new(raffle: &Raffle, config: &Config, treasury: &Treasury) -> Self {
        Self {
            authority: config.authority,
            state: raffle.state,
            entrance_fee: config.entrance_fee,
            interval: config.interval,
            last_draw_timestamp: raffle.last_draw_timestamp,
            recent_winner: raffle.recent_winner,
            player_count: raffle.player_count(),
            pool: raffle.pool(),
            pending_request_id: raffle.pending_request_id,
            round_index: raffle.round_index,
            total_paid_out: treasury.total_paid_out,
        }
    }
}

/// Returns the participant at `index` in entry order.
/// Fails with `IndexOutOfRange` past the end of the current round.
pub fn get_player(ctx: Context<QueryRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player_at(index)
}

pub fn get_raffle_info(ctx: Context<QueryRaffle>) -> Result<RaffleInfo> {
    Ok(RaffleInfo::new(
        &ctx.accounts.raffle,
        &ctx.accounts.config,
        &ctx.accounts.treasury,
    ))
}

/// Read-only accounts shared by the query instructions
#[derive(Accounts)]
pub struct QueryRaffle<'info> {
    #[account(seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [TREASURY_SEED, raffle.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
