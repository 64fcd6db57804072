//! Per-player queue of active pieces, oldest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of pieces a player may have on the board.
pub const MAX_PIECES: usize = 3;

/// Cells occupied by one player, in placement order (oldest first).
///
/// Never holds more than [`MAX_PIECES`] cells: pushing onto a full queue
/// evicts the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveQueue {
    cells: VecDeque<usize>,
}

impl MoveQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell, returning the evicted oldest cell if the queue overflowed.
    pub fn push(&mut self, cell: usize) -> Option<usize> {
        self.cells.push_back(cell);
        if self.cells.len() > MAX_PIECES {
            self.cells.pop_front()
        } else {
            None
        }
    }

    /// Returns true if the cell is one of this player's active pieces.
    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }

    /// Oldest active piece.
    pub fn oldest(&self) -> Option<usize> {
        self.cells.front().copied()
    }

    /// Number of active pieces.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the player has no pieces on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the next push will evict a piece.
    pub fn is_full(&self) -> bool {
        self.cells.len() == MAX_PIECES
    }

    /// Iterates cells oldest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    /// Cells oldest first, as a vector.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for MoveQueue {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut queue = Self::new();
        for cell in iter {
            queue.push(cell);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_under_capacity_keeps_everything() {
        let mut queue = MoveQueue::new();
        assert_eq!(queue.push(4), None);
        assert_eq!(queue.push(0), None);
        assert_eq!(queue.push(8), None);
        assert!(queue.is_full());
        assert_eq!(queue.to_vec(), vec![4, 0, 8]);
    }

    #[test]
    fn test_fourth_push_evicts_oldest() {
        let mut queue: MoveQueue = [4, 0, 8].into_iter().collect();
        assert_eq!(queue.push(2), Some(4));
        assert_eq!(queue.to_vec(), vec![0, 8, 2]);
        assert!(!queue.contains(4));
        assert_eq!(queue.oldest(), Some(0));
    }

    #[test]
    fn test_empty_queue() {
        let queue = MoveQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.oldest(), None);
        assert!(!queue.is_full());
    }
}
