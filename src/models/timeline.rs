//! Timeline (execution history) model.
//!
//! A timeline is the ordered sequence of execution blocks produced by one
//! run: block starts never decrease and no two blocks overlap, since there
//! is a single CPU. Under preemption an algorithm may emit several
//! time-adjacent blocks for the same process; [`Timeline::merged`]
//! coalesces those into one block per contiguous stretch. Merging is a
//! normalization for presentation and metrics — it never changes total
//! elapsed time or any process's total execution time.

use serde::{Deserialize, Serialize};

use super::{QueueLevel, Tick};

/// One contiguous slice of time a specific process holds the CPU.
///
/// `queue_level` and `quantum_used` are populated by MLFQ and `None`
/// for every other discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Process holding the CPU.
    pub process_id: String,
    /// Slice start.
    pub start: Tick,
    /// Slice end. Always greater than `start`.
    pub end: Tick,
    /// MLFQ tier the slice ran at.
    pub queue_level: Option<QueueLevel>,
    /// Amount actually executed within the slice (at most the tier's quantum).
    pub quantum_used: Option<Tick>,
}

impl Block {
    /// Creates an unannotated block.
    pub fn new(process_id: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
            queue_level: None,
            quantum_used: None,
        }
    }

    /// Attaches MLFQ annotations.
    pub fn with_queue(mut self, level: QueueLevel, quantum_used: Tick) -> Self {
        self.queue_level = Some(level);
        self.quantum_used = Some(quantum_used);
        self
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// The ordered block sequence for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Blocks in execution order.
    pub blocks: Vec<Block>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Coalesces time-adjacent blocks of the same process.
    ///
    /// A block extends the running merged block when its process id
    /// matches and its start equals the running block's end. A merged
    /// block keeps the `queue_level` it started at and accumulates
    /// `quantum_used` across the stretch. Idempotent.
    pub fn merged(&self) -> Timeline {
        let mut merged: Vec<Block> = Vec::with_capacity(self.blocks.len());

        for block in &self.blocks {
            match merged.last_mut() {
                Some(last) if last.process_id == block.process_id && last.end == block.start => {
                    last.end = block.end;
                    if let (Some(total), Some(used)) = (last.quantum_used, block.quantum_used) {
                        last.quantum_used = Some(total + used);
                    }
                }
                _ => merged.push(block.clone()),
            }
        }

        Timeline { blocks: merged }
    }

    /// End of the last block, or 0 for an empty timeline.
    pub fn total_time(&self) -> Tick {
        self.blocks.last().map(|block| block.end).unwrap_or(0)
    }

    /// Total CPU time the given process held across all blocks.
    pub fn execution_time(&self, process_id: &str) -> Tick {
        self.blocks
            .iter()
            .filter(|block| block.process_id == process_id)
            .map(Block::duration)
            .sum()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the timeline has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
