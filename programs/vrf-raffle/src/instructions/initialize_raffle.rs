use anchor_lang::prelude::*;

use crate::{
    constants::{
        CONFIG_SEED, DEFAULT_REQUEST_CONFIRMATIONS, FIRST_REQUEST_ID, NUM_WORDS, RAFFLE_SEED,
        TREASURY_SEED,
    },
    error::RaffleError,
    state::{
        Config, Raffle, Treasury, CONFIG_ACCOUNT_SIZE, RAFFLE_ACCOUNT_SIZE,
        TREASURY_ACCOUNT_SIZE,
    },
};

/// Deployment-time parameters, fixed for the lifetime of the raffle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct InitializeParams {
    /// Minimum entry payment in lamports
    pub entrance_fee: u64,
    /// Seconds that must pass between draws
    pub interval: u64,
    /// VRF gas lane
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Falls back to `DEFAULT_REQUEST_CONFIRMATIONS`
    pub request_confirmations: Option<u16>,
}

impl InitializeParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(self.interval > 0, RaffleError::InvalidInterval);
        require!(self.callback_gas_limit > 0, RaffleError::InvalidOracleConfig);
        require!(
            self.request_confirmations != Some(0),
            RaffleError::InvalidOracleConfig
        );
        Ok(())
    }
}

/// Event emitted once the raffle is live
#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub entrance_fee: u64,
    pub interval: u64,
    pub start_time: i64,
}

/// Creates the config, the raffle round and its treasury.
///
/// # Security Considerations
/// - All three accounts are PDAs with fixed seeds, so the program hosts
///   exactly one raffle and this instruction can only succeed once
/// - Parameters are validated before anything is written
/// - The first round starts OPEN with `last_draw_timestamp` set to now
pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: InitializeParams) -> Result<()> {
    params.validate()?;

    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.entrance_fee = params.entrance_fee;
    config.interval = params.interval;
    config.key_hash = params.key_hash;
    config.subscription_id = params.subscription_id;
    config.callback_gas_limit = params.callback_gas_limit;
    config.request_confirmations = params
        .request_confirmations
        .unwrap_or(DEFAULT_REQUEST_CONFIRMATIONS);
    config.num_words = NUM_WORDS;
    config.request_counter = FIRST_REQUEST_ID - 1;
    config.bump = ctx.bumps.config;

    ctx.accounts
        .raffle
        .set_inner(Raffle::new(now, ctx.bumps.raffle));

    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.total_paid_out = 0;
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    msg!(
        "Raffle initialized: fee={} interval={}s",
        params.entrance_fee,
        params.interval
    );

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        start_time: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Holds the pool. PDA with seeds ["treasury", raffle_key]
    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
