use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    ports::{PrizeTransfer, RandomnessConsumer},
    state::{RandomValue, Raffle, Treasury},
};

/// Event emitted when a winner has been paid
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Lamports paid out, the entire pool
    pub amount: u64,
    /// Index of the round that just completed
    pub round_index: u64,
    pub request_id: u64,
}

/// Pays the pool out of the treasury PDA by moving lamports directly.
/// This only works because the treasury is owned by this program.
pub struct LamportPayout<'a, 'info> {
    pub treasury: &'a AccountInfo<'info>,
    pub recipient: &'a AccountInfo<'info>,
}

impl PrizeTransfer for LamportPayout<'_, '_> {
    fn transfer(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.recipient.key, *winner, RaffleError::PayoutFailed);
        require!(self.recipient.is_writable, RaffleError::PayoutFailed);

        // Both sides are checked before either balance moves
        self.treasury
            .lamports()
            .checked_sub(amount)
            .ok_or(RaffleError::PayoutFailed)?;
        self.recipient
            .lamports()
            .checked_add(amount)
            .ok_or(RaffleError::PayoutFailed)?;

        self.treasury.sub_lamports(amount)?;
        self.recipient.add_lamports(amount)?;
        Ok(())
    }
}

/// Oracle callback: consumes the random word for the outstanding request,
/// pays the whole pool to the drawn player and opens the next round.
///
/// # Arguments
/// * `ctx` - The context object containing the raffle, treasury and winner
/// * `request_id` - Must equal the raffle's pending request
/// * `random_value` - 256-bit little-endian random word
///
/// # Security Considerations
/// Anyone may relay the callback. The only authorization is data
/// validation:
/// 1. `request_id` must match the pending request while Drawing, which
///    rejects stale, duplicate and forged callbacks
/// 2. The `winner` account must be the player at
///    `random_value mod player_count`, otherwise the payout fails
///
/// # Errors
/// - `UnknownRequest` if no matching request is outstanding
/// - `PayoutFailed` if the lamports could not reach the winner; the raffle
///   stays Drawing on the same request so the callback can be resent
///
/// A winner account holding 0 lamports cannot be credited a pool below the
/// rent-exempt minimum. The runtime rejects the whole transaction, every
/// resend fails the same way and the raffle stays Drawing. This is the same
/// liveness gap as an oracle that never answers.
pub fn fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    random_value: RandomValue,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();

    let mut payout = LamportPayout {
        treasury: &treasury_info,
        recipient: &winner_info,
    };
    let outcome = ctx
        .accounts
        .raffle
        .deliver(request_id, &random_value, now, &mut payout)?;

    ctx.accounts.treasury.record_payout(outcome.amount);

    msg!(
        "Winner {} (index {}) paid {} lamports",
        outcome.winner,
        outcome.winner_index,
        outcome.amount
    );

    emit!(WinnerPicked {
        winner: outcome.winner,
        amount: outcome.amount,
        round_index: outcome.round_index,
        request_id,
    });

    Ok(())
}

/// Accounts required for the fulfill_randomness instruction
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// PDA with seeds ["treasury", raffle_key]
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The drawn player receiving the pool
    /// CHECK: compared against the drawn winner by `LamportPayout`, which
    /// also requires it to be writable.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
