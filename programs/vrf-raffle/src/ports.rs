use anchor_lang::prelude::*;

use crate::state::{RandomValue, Raffle, UpkeepStatus};

/// Outbound half of the oracle integration.
///
/// Accepting a request is synchronous; the random value arrives later
/// through [`RandomnessConsumer::deliver`].
pub trait RandomnessPort {
    fn request(&mut self) -> Result<u64>;
}

/// Inbound half of the oracle integration.
pub trait RandomnessConsumer {
    fn deliver<T: PrizeTransfer>(
        &mut self,
        request_id: u64,
        random_value: &RandomValue,
        now: i64,
        payout: &mut T,
    ) -> Result<DrawOutcome>;
}

/// Moves the pool to the winner. An `Err` must mean no lamports moved.
pub trait PrizeTransfer {
    fn transfer(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Surface polled and driven by the automation network.
pub trait UpkeepPort {
    fn is_draw_ready(&self, now: i64, interval: u64) -> bool;

    fn begin_draw<R: RandomnessPort>(
        &mut self,
        now: i64,
        interval: u64,
        oracle: &mut R,
    ) -> Result<u64>;
}

/// Result of a completed draw, reported through `WinnerPicked`.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub amount: u64,
    pub round_index: u64,
}

impl UpkeepPort for Raffle {
    fn is_draw_ready(&self, now: i64, interval: u64) -> bool {
        let status: UpkeepStatus = self.check_draw_ready(now, interval);
        status.ready
    }

    fn begin_draw<R: RandomnessPort>(
        &mut self,
        now: i64,
        interval: u64,
        oracle: &mut R,
    ) -> Result<u64> {
        Raffle::begin_draw(self, now, interval, oracle)
    }
}

impl RandomnessConsumer for Raffle {
    fn deliver<T: PrizeTransfer>(
        &mut self,
        request_id: u64,
        random_value: &RandomValue,
        now: i64,
        payout: &mut T,
    ) -> Result<DrawOutcome> {
        self.fulfill_randomness(request_id, random_value, now, payout)
    }
}
