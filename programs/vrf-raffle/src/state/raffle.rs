use anchor_lang::prelude::*;

use crate::{
    clock_gate,
    constants::{UPKEEP_EMPTY_POOL, UPKEEP_NOT_DUE, UPKEEP_NOT_OPEN, UPKEEP_NO_PLAYERS},
    error::RaffleError,
    ports::{DrawOutcome, PrizeTransfer, RandomnessPort},
    state::{EntryLedger, ENTRY_LEDGER_SIZE},
};

// Space calculation:
// 8 (discriminator) +
// 1 (state) +
// ENTRY_LEDGER_SIZE (players + pool) +
// 8 (last_draw_timestamp) +
// 9 (pending_request_id: Option<u64>) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (round_index) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 1 + ENTRY_LEDGER_SIZE + 8 + 9 + 33 + 8 + 1;

/// 256-bit random word delivered by the oracle, little-endian.
pub type RandomValue = [u8; 32];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Drawing,
}

/// Answer to an upkeep poll. `reasons` is empty exactly when `ready`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub ready: bool,
    pub reasons: u8,
}

/// The single live round. Reset in place after every payout.
#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub state: RaffleState,
    pub ledger: EntryLedger,
    pub last_draw_timestamp: i64,
    /// Set exactly while `state == Drawing`
    pub pending_request_id: Option<u64>,
    pub recent_winner: Option<Pubkey>,
    /// Completed rounds so far
    pub round_index: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(now: i64, bump: u8) -> Self {
        Self {
            state: RaffleState::Open,
            ledger: EntryLedger::default(),
            last_draw_timestamp: now,
            pending_request_id: None,
            recent_winner: None,
            round_index: 0,
            bump,
        }
    }

    /// Records a paid entry and returns the new pool size.
    ///
    /// Under-payment is reported before the state check so that it wins in
    /// every state.
    pub fn enter(&mut self, entrance_fee: u64, participant: Pubkey, amount: u64) -> Result<u64> {
        require!(amount >= entrance_fee, RaffleError::InsufficientFunds);
        require!(self.state == RaffleState::Open, RaffleError::NotOpen);

        self.ledger.record(participant, amount)
    }

    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        self.ledger.player_at(index)
    }

    pub fn player_count(&self) -> u64 {
        self.ledger.player_count()
    }

    pub fn pool(&self) -> u64 {
        self.ledger.pool
    }

    pub fn check_draw_ready(&self, now: i64, interval: u64) -> UpkeepStatus {
        let mut reasons = 0;
        if self.state != RaffleState::Open {
            reasons |= UPKEEP_NOT_OPEN;
        }
        if self.ledger.is_empty() {
            reasons |= UPKEEP_NO_PLAYERS;
        }
        if self.ledger.pool == 0 {
            reasons |= UPKEEP_EMPTY_POOL;
        }
        if !clock_gate::is_due(now, self.last_draw_timestamp, interval) {
            reasons |= UPKEEP_NOT_DUE;
        }

        UpkeepStatus {
            ready: reasons == 0,
            reasons,
        }
    }

    /// Starts a draw and returns the oracle request id.
    ///
    /// Once the raffle is `Drawing` the readiness check fails, so this is
    /// the only gate against overlapping draws.
    pub fn begin_draw<R: RandomnessPort>(
        &mut self,
        now: i64,
        interval: u64,
        oracle: &mut R,
    ) -> Result<u64> {
        let status = self.check_draw_ready(now, interval);
        if !status.ready {
            msg!(
                "Upkeep not needed: pool={} players={} state={:?} elapsed={}s reasons={:#06b}",
                self.ledger.pool,
                self.ledger.player_count(),
                self.state,
                clock_gate::elapsed_since(now, self.last_draw_timestamp),
                status.reasons,
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = oracle.request()?;

        self.pending_request_id = Some(request_id);
        self.state = RaffleState::Drawing;

        Ok(request_id)
    }

    /// Consumes the oracle answer for the outstanding request: picks the
    /// winner, pays the whole pool and opens the next round.
    ///
    /// Every check and the transfer run before any field is written, so a
    /// failed payout leaves the raffle `Drawing` on the same request.
    pub fn fulfill_randomness<T: PrizeTransfer>(
        &mut self,
        request_id: u64,
        random_value: &RandomValue,
        now: i64,
        payout: &mut T,
    ) -> Result<DrawOutcome> {
        require!(
            self.state == RaffleState::Drawing && self.pending_request_id == Some(request_id),
            RaffleError::UnknownRequest
        );

        let winner_index = winner_index(random_value, self.ledger.player_count())?;
        let winner = self.ledger.player_at(winner_index)?;
        let amount = self.ledger.pool;
        let round_index = self.round_index;
        let next_round_index = round_index.checked_add(1).ok_or(RaffleError::Overflow)?;

        if let Err(e) = payout.transfer(&winner, amount) {
            msg!("Payout of {} lamports to {} failed: {}", amount, winner, e);
            return err!(RaffleError::PayoutFailed);
        }

        self.recent_winner = Some(winner);
        self.ledger.reset();
        self.last_draw_timestamp = now;
        self.pending_request_id = None;
        self.state = RaffleState::Open;
        self.round_index = next_round_index;

        Ok(DrawOutcome {
            winner,
            winner_index,
            amount,
            round_index,
        })
    }
}

/// `random_value mod player_count`, taken over the full 256-bit word.
pub fn winner_index(random_value: &RandomValue, player_count: u64) -> Result<u64> {
    require!(player_count > 0, RaffleError::IndexOutOfRange);

    let modulus = player_count as u128;
    let index = random_value
        .iter()
        .rev()
        .fold(0u128, |acc, byte| (acc * 256 + *byte as u128) % modulus);

    Ok(index as u64)
}
