use anchor_lang::prelude::*;

// 8 discriminator + 32 authority + 8 entrance_fee + 8 interval + 32 key_hash
// + 8 subscription_id + 4 callback_gas_limit + 2 request_confirmations
// + 4 num_words + 8 request_counter + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 32 + 8 + 4 + 2 + 4 + 8 + 1;

/// Deployment-time parameters. Only `request_counter` changes after
/// initialization.
#[account]
#[derive(Debug)]
pub struct Config {
    pub authority: Pubkey,
    /// Minimum lamports accepted by `enter_raffle`
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: u64,
    /// Gas lane of the VRF service
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub request_confirmations: u16,
    pub num_words: u32,
    /// Last randomness request id handed out
    pub request_counter: u64,
    pub bump: u8,
}
