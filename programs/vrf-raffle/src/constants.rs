// PDA seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Upper bound on entries per round. Keeps the raffle account size fixed
/// and well under the 10 KiB limit for accounts created through CPI.
pub const MAX_PLAYERS: usize = 250;

/// Block confirmations the oracle waits for before answering.
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;

/// Only one random word is consumed per draw.
pub const NUM_WORDS: u32 = 1;

/// Request ids handed out by the oracle adapter start from this value.
pub const FIRST_REQUEST_ID: u64 = 1;

// Reason bits reported by `check_upkeep` when a draw cannot start.
pub const UPKEEP_NOT_OPEN: u8 = 1 << 0;
pub const UPKEEP_NO_PLAYERS: u8 = 1 << 1;
pub const UPKEEP_EMPTY_POOL: u8 = 1 << 2;
pub const UPKEEP_NOT_DUE: u8 = 1 << 3;
