use anchor_lang::prelude::*;

use crate::{constants::MAX_PLAYERS, error::RaffleError};

// 4 (vec length) + 32 * MAX_PLAYERS (players) + 8 (pool)
pub const ENTRY_LEDGER_SIZE: usize = 4 + 32 * MAX_PLAYERS + 8;

/// Participants and lamports collected for the live round.
///
/// Insertion order is the index space used for winner selection, so a
/// participant who enters twice occupies two slots.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct EntryLedger {
    pub players: Vec<Pubkey>,
    pub pool: u64,
}

impl EntryLedger {
    /// Appends `participant` and adds `amount` to the pool. Returns the
    /// new pool size. Nothing is written unless both steps can succeed.
    pub fn record(&mut self, participant: Pubkey, amount: u64) -> Result<u64> {
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        let pool = self.pool.checked_add(amount).ok_or(RaffleError::Overflow)?;

        self.players.push(participant);
        self.pool = pool;
        Ok(pool)
    }

    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.players.get(i))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn player_count(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn reset(&mut self) {
        self.players.clear();
        self.pool = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order_and_accumulates_pool() {
        let mut ledger = EntryLedger::default();
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(ledger.record(a, 100).unwrap(), 100);
        assert_eq!(ledger.record(b, 150).unwrap(), 250);
        assert_eq!(ledger.record(a, 100).unwrap(), 350);

        assert_eq!(ledger.players, vec![a, b, a]);
        assert_eq!(ledger.player_count(), 3);
        assert_eq!(ledger.player_at(2).unwrap(), a);
    }

    #[test]
    fn player_at_out_of_range() {
        let mut ledger = EntryLedger::default();
        assert_eq!(ledger.player_at(0).unwrap_err(), RaffleError::IndexOutOfRange.into());

        ledger.record(Pubkey::new_unique(), 1).unwrap();
        assert_eq!(ledger.player_at(1).unwrap_err(), RaffleError::IndexOutOfRange.into());
        assert_eq!(ledger.player_at(u64::MAX).unwrap_err(), RaffleError::IndexOutOfRange.into());
    }

    #[test]
    fn reset_drains_players_and_pool() {
        let mut ledger = EntryLedger::default();
        let player = Pubkey::new_unique();
        ledger.record(player, 42).unwrap();

        ledger.reset();

        assert!(ledger.is_empty());
        assert_eq!(ledger.pool, 0);
        assert_eq!(ledger.player_at(0).unwrap_err(), RaffleError::IndexOutOfRange.into());
    }

    #[test]
    fn full_ledger_rejects_without_mutation() {
        let mut ledger = EntryLedger::default();
        for _ in 0..MAX_PLAYERS {
            ledger.record(Pubkey::new_unique(), 1).unwrap();
        }
        let before = ledger.clone();

        let err = ledger.record(Pubkey::new_unique(), 1).unwrap_err();

        assert_eq!(err, RaffleError::RaffleFull.into());
        assert_eq!(ledger, before);
    }

    #[test]
    fn pool_overflow_rejects_without_mutation() {
        let mut ledger = EntryLedger::default();
        ledger.record(Pubkey::new_unique(), u64::MAX).unwrap();
        let before = ledger.clone();

        let err = ledger.record(Pubkey::new_unique(), 1).unwrap_err();

        assert_eq!(err, RaffleError::Overflow.into());
        assert_eq!(ledger, before);
    }
}
