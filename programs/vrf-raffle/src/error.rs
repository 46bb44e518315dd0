use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entry amount is below the entrance fee")]
    InsufficientFunds,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Draw conditions are not met")]
    UpkeepNotNeeded,
    #[msg("Randomness does not match the outstanding request")]
    UnknownRequest,
    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,
    #[msg("No player at the requested index")]
    IndexOutOfRange,
    #[msg("Maximum number of entries reached for this round")]
    RaffleFull,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Draw interval must be greater than zero")]
    InvalidInterval,
    #[msg("Oracle parameters are invalid")]
    InvalidOracleConfig,
    #[msg("Entry payment did not reach the treasury")]
    TransferFailed,
}
