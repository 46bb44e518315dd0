use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Config, Raffle, Treasury},
};

/// Event emitted when a participant enters the live round
#[event]
pub struct Entered {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    /// Lamports paid by this entry
    pub amount: u64,
    /// Pool size after this entry
    pub pool: u64,
    pub player_count: u64,
}

/// Instruction to enter the live round by paying at least the entrance fee
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay; the whole amount joins the pool
///
/// # Security Considerations
/// 1. Rejects payments below the configured entrance fee
/// 2. Rejects entries while a draw is in flight
/// 3. Rejects entries once the round holds `MAX_PLAYERS` entries
/// 4. Verifies the treasury balance grew by exactly `amount`
///
/// # Implementation Notes
/// - The raffle state is validated inside `Raffle::enter`, after the fee,
///   rather than as an account constraint
/// - Uses checked arithmetic for the pool and the treasury balance
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let participant = ctx.accounts.participant.key();
    let entrance_fee = ctx.accounts.config.entrance_fee;

    let pool = ctx.accounts.raffle.enter(entrance_fee, participant, amount)?;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.participant.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(Entered {
        raffle: ctx.accounts.raffle.key(),
        participant,
        amount,
        pool,
        player_count: ctx.accounts.raffle.player_count(),
    });

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Treasury that receives the entry payment
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

    /// The entrant, paying `amount` lamports
    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}
