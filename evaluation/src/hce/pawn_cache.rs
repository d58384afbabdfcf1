use std::sync::atomic::{AtomicU64, Ordering};

use cozy_chess::Color;
use log::debug;
use utils::{Bitboard, ScorePair};

pub const DEFAULT_PAWN_CACHE_ENTRIES: usize = 1 << 14;

/// Pawn-only part of the evaluation for both colours. Depends on nothing but
/// the pawn placement, so it is shared by every position with the same pawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnStructure {
    pub score: [ScorePair; 2],
    pub passed: [Bitboard; 2],
}

#[derive(Default)]
struct Slot {
    check: AtomicU64,
    score: AtomicU64,
    passed_white: AtomicU64,
    passed_black: AtomicU64,
}

// Pawn structures change very little between sibling nodes, so a small table
// shared across workers catches most lookups. Slots are written without
// locking; `check` holds the key folded with the payload, so a slot torn by
// racing writers simply reads back as a miss.
pub struct PawnCache {
    slots: Box<[Slot]>,
    mask: usize,
}

impl PawnCache {
    /// `entries` is rounded up to a power of two.
    pub fn new(entries: usize) -> Self {
        let len = entries.max(1).next_power_of_two();
        let slots: Box<[Slot]> = (0..len).map(|_| Slot::default()).collect();

        debug!(
            "Pawn cache: {} entries ({} KiB)",
            len,
            len * std::mem::size_of::<Slot>() / 1024
        );

        Self {
            slots,
            mask: len - 1,
        }
    }

    #[inline(always)]
    fn slot(&self, key: u64) -> &Slot {
        &self.slots[(key as usize) & self.mask]
    }

    pub fn probe(&self, key: u64) -> Option<PawnStructure> {
        let slot = self.slot(key);
        let check = slot.check.load(Ordering::Relaxed);
        let score = slot.score.load(Ordering::Relaxed);
        let passed_white = slot.passed_white.load(Ordering::Relaxed);
        let passed_black = slot.passed_black.load(Ordering::Relaxed);

        if check ^ score ^ passed_white ^ passed_black != key {
            return None;
        }

        Some(PawnStructure {
            score: [
                ScorePair::from_bits(score as u32),
                ScorePair::from_bits((score >> 32) as u32),
            ],
            passed: [Bitboard(passed_white), Bitboard(passed_black)],
        })
    }

    /// Always replaces the slot.
    pub fn store(&self, key: u64, entry: &PawnStructure) {
        let score = entry.score[Color::White as usize].to_bits() as u64
            | (entry.score[Color::Black as usize].to_bits() as u64) << 32;
        let passed_white = entry.passed[Color::White as usize].0;
        let passed_black = entry.passed[Color::Black as usize].0;

        let slot = self.slot(key);
        slot.check
            .store(key ^ score ^ passed_white ^ passed_black, Ordering::Relaxed);
        slot.score.store(score, Ordering::Relaxed);
        slot.passed_white.store(passed_white, Ordering::Relaxed);
        slot.passed_black.store(passed_black, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for PawnCache {
    fn default() -> Self {
        Self::new(DEFAULT_PAWN_CACHE_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> PawnStructure {
        PawnStructure {
            score: [ScorePair::new(-12, 40), ScorePair::new(7, -3)],
            passed: [Bitboard(0x0010_0000_0000_0000), Bitboard(0x0000_0000_0000_0200)],
        }
    }

    #[test]
    fn test_store_then_probe() {
        let cache = PawnCache::new(1024);
        let key = 0xDEAD_BEEF_1234_5678;

        assert_eq!(cache.probe(key), None);
        cache.store(key, &entry());
        assert_eq!(cache.probe(key), Some(entry()));
    }

    #[test]
    fn test_colliding_key_misses() {
        let cache = PawnCache::new(16);
        let key = 0x0000_0000_0000_0003;
        let other = 0x1000_0000_0000_0003;

        cache.store(key, &entry());
        assert_eq!(cache.probe(other), None);

        cache.store(other, &entry());
        assert_eq!(cache.probe(key), None);
        assert_eq!(cache.probe(other), Some(entry()));
    }

    #[test]
    fn test_rounds_to_power_of_two() {
        assert_eq!(PawnCache::new(1000).len(), 1024);
        assert_eq!(PawnCache::new(0).len(), 1);
    }

    #[test]
    fn test_empty_slot_reads_as_pawnless_structure() {
        let cache = PawnCache::new(8);
        let empty = cache.probe(0).unwrap();
        assert_eq!(empty.score, [ScorePair::ZERO; 2]);
        assert!(empty.passed[0].is_empty());
    }
}
