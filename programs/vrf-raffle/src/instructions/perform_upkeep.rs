use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED},
    error::RaffleError,
    ports::RandomnessPort,
    state::{Config, Raffle},
};

/// Request log picked up by the off-chain VRF service
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub raffle: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Event emitted when a draw begins
#[event]
pub struct DrawStarted {
    pub request_id: u64,
    pub round_index: u64,
    pub player_count: u64,
    pub pool: u64,
}

/// Oracle adapter that mints request ids from the config counter and
/// publishes them as `RandomnessRequested`.
pub struct VrfRequest<'a> {
    pub config: &'a mut Config,
    pub raffle: Pubkey,
}

impl RandomnessPort for VrfRequest<'_> {
    fn request(&mut self) -> Result<u64> {
        let request_id = self
            .config
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.config.request_counter = request_id;

        emit!(RandomnessRequested {
            request_id,
            raffle: self.raffle,
            key_hash: self.config.key_hash,
            subscription_id: self.config.subscription_id,
            request_confirmations: self.config.request_confirmations,
            callback_gas_limit: self.config.callback_gas_limit,
            num_words: self.config.num_words,
        });

        Ok(request_id)
    }
}

/// Starts a draw once the interval has elapsed and the pool is funded.
///
/// Permissionless: any caller may nudge the raffle forward, the readiness
/// check in `Raffle::begin_draw` is the only gate. Returns the request id.
///
/// After execution:
/// - The raffle is in Drawing state and rejects entries
/// - `pending_request_id` holds the id the oracle must answer
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let accounts = &mut *ctx.accounts;
    let interval = accounts.config.interval;

    let mut oracle = VrfRequest {
        config: &mut accounts.config,
        raffle: raffle_key,
    };
    let request_id = accounts.raffle.begin_draw(now, interval, &mut oracle)?;

    msg!("Draw started: request {}", request_id);

    emit!(DrawStarted {
        request_id,
        round_index: accounts.raffle.round_index,
        player_count: accounts.raffle.player_count(),
        pool: accounts.raffle.pool(),
    });

    Ok(request_id)
}

/// Accounts required for the perform_upkeep instruction
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Carries the request counter
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}
