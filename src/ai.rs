//! Hunt/target shot selection for the computer player.
//!
//! In hunt mode the strategy samples the checkerboard subset of untried
//! coordinates, which is sufficient to intersect any ship of length >= 2
//! with the fewest probes. A hit switches to target mode, which works
//! through a FIFO queue of orthogonal neighbors until the ship is finished,
//! then falls back to hunting.

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMode {
    Hunt,
    Target,
}

/// Targeting memory. Holds no RNG of its own; the caller passes one in so
/// games can be replayed from a seed. The whole struct serializes with the
/// saved game, so a reloaded computer player never re-shoots a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntTargetAi {
    size: u8,
    mode: AiMode,
    available: BTreeSet<Coordinate>,
    queue: VecDeque<Coordinate>,
}

impl HuntTargetAi {
    /// Fresh strategy over a `size`×`size` board: every coordinate
    /// available, hunt mode, empty follow-up queue.
    pub fn new(size: u8) -> Self {
        let mut ai = HuntTargetAi {
            size,
            mode: AiMode::Hunt,
            available: BTreeSet::new(),
            queue: VecDeque::new(),
        };
        ai.reset();
        ai
    }

    /// Reinitialize to the fresh-game state.
    pub fn reset(&mut self) {
        self.mode = AiMode::Hunt;
        self.queue.clear();
        self.available = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| Coordinate::new(x, y)))
            .collect();
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    /// Number of coordinates not yet tried.
    pub fn remaining_targets(&self) -> usize {
        self.available.len()
    }

    /// Pick the next shot, or `None` when nothing is left to try.
    ///
    /// Target mode pops queued follow-ups until one is still untried;
    /// exhausting the queue drops back to hunt mode. Hunt mode samples
    /// uniformly from the checkerboard subset of untried coordinates,
    /// falling back to the full untried set once the subset is empty.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.available.is_empty() && self.queue.is_empty() {
            return None;
        }
        if self.mode == AiMode::Target {
            while let Some(candidate) = self.queue.pop_front() {
                if self.available.contains(&candidate) {
                    return Some(candidate);
                }
            }
            self.mode = AiMode::Hunt;
        }
        if self.available.is_empty() {
            return None;
        }
        let checkerboard: Vec<Coordinate> = self
            .available
            .iter()
            .copied()
            .filter(|c| (c.x as usize + c.y as usize) % 2 == 0)
            .collect();
        if !checkerboard.is_empty() {
            return Some(checkerboard[rng.random_range(0..checkerboard.len())]);
        }
        let all: Vec<Coordinate> = self.available.iter().copied().collect();
        Some(all[rng.random_range(0..all.len())])
    }

    /// Record the outcome of the last shot. The shot is always retired from
    /// the untried set. A hit enters target mode and enqueues the in-bounds
    /// orthogonal neighbors (up, down, left, right) not already queued; a
    /// miss with an empty queue returns to hunt mode.
    ///
    /// Stale queue entries next to a ship sunk in the meantime are kept;
    /// they resolve as ordinary misses (or hits on another ship) and cost
    /// at most a few extra shots.
    pub fn update_strategy(&mut self, last_shot: Coordinate, was_hit: bool) {
        self.available.remove(&last_shot);
        if was_hit {
            self.mode = AiMode::Target;
            for neighbor in last_shot.orthogonal_neighbors(self.size) {
                if !self.queue.contains(&neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
        } else if self.queue.is_empty() {
            self.mode = AiMode::Hunt;
        }
    }
}
