use anchor_lang::prelude::*;
use instructions::*;
use state::{RandomValue, UpkeepStatus};

pub mod clock_gate;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ports;
pub mod state;

declare_id!("8VkffqE19bgeCouBYVx2Cjru9gyHLorXZ8HrSS7B1qMp");

#[program]
pub mod vrf_raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        params: InitializeParams,
    ) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        random_value: RandomValue,
    ) -> Result<()> {
        instructions::fulfill_randomness::fulfill_randomness(ctx, request_id, random_value)
    }

    pub fn get_player(ctx: Context<QueryRaffle>, index: u64) -> Result<Pubkey> {
        instructions::query::get_player(ctx, index)
    }

    pub fn get_raffle_info(ctx: Context<QueryRaffle>) -> Result<RaffleInfo> {
        instructions::query::get_raffle_info(ctx)
    }
}
