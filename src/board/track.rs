//! The linear track.
//!
//! Cells are numbered `0..size`. Every move is clamped into that range, so a
//! player overshooting the finish stops on the last cell and a hole near the
//! start cannot push anyone below cell 0.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::special::{Special, SpecialEffect};

/// A fixed linear track with optional special cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of cells.
    pub size: usize,
    /// Special cells by position. At most one per position.
    #[serde(default)]
    pub special: FxHashMap<usize, Special>,
}

impl Board {
    /// Create a board with no special cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            special: FxHashMap::default(),
        }
    }

    /// Place a special cell, replacing any existing one at `position`.
    #[must_use]
    pub fn with_special(mut self, position: usize, special: Special) -> Self {
        self.special.insert(position, special);
        self
    }

    /// Last cell index.
    #[must_use]
    pub fn last_cell(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Position reached by moving `delta` cells from `from`, clamped to the board.
    #[must_use]
    pub fn offset(&self, from: usize, delta: i64) -> usize {
        let target = (from as i64).saturating_add(delta);
        target.clamp(0, self.last_cell() as i64) as usize
    }

    /// Special cell at `position`, if any.
    #[must_use]
    pub fn special_at(&self, position: usize) -> Option<&Special> {
        self.special.get(&position)
    }

    /// Special cell positions in ascending order.
    #[must_use]
    pub fn special_positions(&self) -> Vec<usize> {
        let mut positions: Vec<_> = self.special.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Find a cycle made only of `Move` cells.
    ///
    /// Such a cycle would bounce a player forever, independent of dice or
    /// cards. Returns the cells on the first cycle found (ascending start).
    #[must_use]
    pub fn find_move_cycle(&self) -> Option<Vec<usize>> {
        let mut cleared: FxHashSet<usize> = FxHashSet::default();

        for start in self.special_positions() {
            let mut path = Vec::new();
            let mut on_path: FxHashSet<usize> = FxHashSet::default();
            let mut current = start;

            loop {
                if cleared.contains(&current) {
                    break;
                }
                if on_path.contains(&current) {
                    let begin = path.iter().position(|&p| p == current).unwrap_or(0);
                    return Some(path[begin..].to_vec());
                }
                let Some(SpecialEffect::Move { value }) = self.special_at(current).map(|s| s.effect)
                else {
                    break;
                };
                on_path.insert(current);
                path.push(current);
                current = self.offset(current, value);
            }

            cleared.extend(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamps_high() {
        let board = Board::new(100);
        assert_eq!(board.offset(95, 6), 99);
        assert_eq!(board.offset(99, 1), 99);
        assert_eq!(board.offset(10, 5), 15);
    }

    #[test]
    fn test_offset_clamps_low() {
        let board = Board::new(100);
        assert_eq!(board.offset(3, -12), 0);
        assert_eq!(board.offset(0, -1), 0);
        assert_eq!(board.offset(16, -12), 4);
    }

    #[test]
    fn test_offset_single_cell_board() {
        let board = Board::new(1);
        assert_eq!(board.offset(0, 6), 0);
        assert_eq!(board.last_cell(), 0);
    }

    #[test]
    fn test_special_lookup() {
        let board = Board::new(100)
            .with_special(3, Special::shift("Ladder: +10", 10))
            .with_special(99, Special::goal("Finish!"));

        assert_eq!(board.special_at(3).unwrap().text, "Ladder: +10");
        assert!(board.special_at(4).is_none());
        assert_eq!(board.special_positions(), vec![3, 99]);
    }

    #[test]
    fn test_no_cycle_in_chain() {
        let board = Board::new(100)
            .with_special(3, Special::shift("Ladder", 10))
            .with_special(13, Special::shift("Ladder", 10))
            .with_special(23, Special::shift("Hole", -5));

        assert_eq!(board.find_move_cycle(), None);
    }

    #[test]
    fn test_two_cell_cycle() {
        let board = Board::new(100)
            .with_special(5, Special::shift("Up", 5))
            .with_special(10, Special::shift("Down", -5));

        assert_eq!(board.find_move_cycle(), Some(vec![5, 10]));
    }

    #[test]
    fn test_cycle_through_clamp() {
        // 99 clamps onto itself
        let board = Board::new(100).with_special(99, Special::shift("Bounce", 3));
        assert_eq!(board.find_move_cycle(), Some(vec![99]));
    }

    #[test]
    fn test_zero_move_is_a_cycle() {
        let board = Board::new(10).with_special(4, Special::shift("Stay", 0));
        assert_eq!(board.find_move_cycle(), Some(vec![4]));
    }

    #[test]
    fn test_json_integer_keys() {
        let board: Board = serde_json::from_str(
            r#"{ "size": 10, "special": { "3": { "text": "Goal", "effect": { "type": "goal" } } } }"#,
        )
        .unwrap();
        assert_eq!(board.special_at(3).unwrap().effect, SpecialEffect::Goal);
    }
}
