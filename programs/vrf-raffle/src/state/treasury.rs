use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 8 total_paid_out, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 1;

/// Program-owned vault holding the pool on top of its rent reserve.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    /// Lamports paid to winners over the lifetime of the raffle
    pub total_paid_out: u64,
    pub bump: u8,
}

impl Treasury {
    pub fn record_payout(&mut self, amount: u64) {
        self.total_paid_out = self.total_paid_out.saturating_add(amount);
    }
}
