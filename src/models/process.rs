//! Process model.
//!
//! A process is the unit of scheduling: it arrives at a fixed instant,
//! needs a fixed amount of CPU time, and is finished once that amount has
//! been executed. The caller describes processes with [`ProcessSpec`];
//! each run works on its own [`Process`] records built from those specs,
//! so no state leaks between runs.
//!
//! # Time Representation
//! All times are whole units of a discrete simulated clock starting at
//! t=0. There is no fractional time and no negative time.

use serde::{Deserialize, Serialize};

/// One unit of simulated time.
pub type Tick = u64;

/// MLFQ priority tier. `High` is queue 1 (highest), `Low` is queue 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueLevel {
    /// Queue 1, highest priority.
    #[default]
    High,
    /// Queue 2.
    Medium,
    /// Queue 3, lowest priority.
    Low,
}

impl QueueLevel {
    /// Queue number, 1..=3 (1 = highest priority).
    pub fn number(self) -> u8 {
        match self {
            QueueLevel::High => 1,
            QueueLevel::Medium => 2,
            QueueLevel::Low => 3,
        }
    }

    /// Zero-based index, 0..=2.
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Level for a queue number (1..=3).
    pub fn from_number(number: u8) -> Option<QueueLevel> {
        match number {
            1 => Some(QueueLevel::High),
            2 => Some(QueueLevel::Medium),
            3 => Some(QueueLevel::Low),
            _ => None,
        }
    }

    /// Level for a zero-based index (0..=2).
    pub fn from_index(index: usize) -> Option<QueueLevel> {
        match index {
            0 => Some(QueueLevel::High),
            1 => Some(QueueLevel::Medium),
            2 => Some(QueueLevel::Low),
            _ => None,
        }
    }

    /// The next lower tier. `Low` stays `Low`.
    pub fn demoted(self) -> QueueLevel {
        match self {
            QueueLevel::High => QueueLevel::Medium,
            QueueLevel::Medium => QueueLevel::Low,
            QueueLevel::Low => QueueLevel::Low,
        }
    }
}

/// Caller-supplied description of one schedulable process.
///
/// `initial_queue` is only consulted by MLFQ and defaults to [`QueueLevel::High`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Stable label, e.g. "P1".
    pub id: String,
    /// Instant at which the process becomes schedulable.
    pub arrival: Tick,
    /// Total CPU time required. Must be at least 1.
    pub burst: Tick,
    /// MLFQ priority tier at arrival.
    pub initial_queue: QueueLevel,
}

impl ProcessSpec {
    /// Creates a spec with the default (highest) initial queue.
    pub fn new(id: impl Into<String>, arrival: Tick, burst: Tick) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            initial_queue: QueueLevel::High,
        }
    }

    /// Sets the MLFQ queue the process enters on arrival.
    pub fn with_initial_queue(mut self, level: QueueLevel) -> Self {
        self.initial_queue = level;
        self
    }
}

/// Per-run process record.
///
/// Built fresh from a [`ProcessSpec`] at the start of every run;
/// `remaining` counts down as the process executes, and `finish` is set
/// exactly once, at the instant `remaining` reaches zero. `final_queue`
/// is populated by MLFQ only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Stable label, e.g. "P1".
    pub id: String,
    /// Instant at which the process becomes schedulable.
    pub arrival: Tick,
    /// Total CPU time required.
    pub burst: Tick,
    /// CPU time still owed. Zero means finished.
    pub remaining: Tick,
    /// MLFQ priority tier at arrival.
    pub initial_queue: QueueLevel,
    /// Instant the process completed. `None` until then.
    pub finish: Option<Tick>,
    /// MLFQ tier the process was running at when it completed.
    pub final_queue: Option<QueueLevel>,
}

impl Process {
    /// Builds a fresh record for one run. Never shares state with records
    /// built from the same spec for other runs.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            remaining: spec.burst,
            initial_queue: spec.initial_queue,
            finish: None,
            final_queue: None,
        }
    }

    /// Whether the process has executed its full burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Finish time minus arrival time. `None` until the process finishes.
    pub fn turnaround(&self) -> Option<Tick> {
        self.finish.map(|finish| finish - self.arrival)
    }

    /// Turnaround time minus burst time. `None` until the process finishes.
    pub fn waiting(&self) -> Option<Tick> {
        self.turnaround().map(|turnaround| turnaround - self.burst)
    }

    /// Consumes `amount` units of the remaining burst.
    pub(crate) fn execute(&mut self, amount: Tick) {
        debug_assert!(amount <= self.remaining);
        self.remaining -= amount;
    }

    /// Records the completion instant. Set exactly once, when the last
    /// unit of the burst has executed.
    pub(crate) fn complete(&mut self, at: Tick) {
        debug_assert!(self.remaining == 0 && self.finish.is_none());
        self.finish = Some(at);
    }
}
