//! The scheduling engine.
//!
//! Five interchangeable disciplines over a discrete integer clock:
//!
//! | Discipline | Selector | Preemptive | Parameter |
//! |-----------|----------|------------|-----------|
//! | First-come-first-served | `FCFS` | no | — |
//! | Shortest-job-first | `SJF` | no | — |
//! | Shortest-remaining-time | `SRT` | yes (1-unit) | — |
//! | Round robin | `RR` | yes | quantum |
//! | Multi-level feedback queue | `MLFQ` | yes | per-level quantums |
//!
//! Every discipline guarantees that the clock only advances, that at most
//! one process runs at any instant, and that every process finishes for
//! finite well-formed input. When no process is ready, the clock jumps
//! straight to the next pending arrival instead of polling unit by unit —
//! observably equivalent, just cheaper.
//!
//! # Preconditions
//!
//! The engine performs no input validation. Every burst time must be at
//! least 1: a zero-burst process makes behavior undefined (some
//! disciplines never terminate, others leave the process unfinished).
//! Gate untrusted input through [`crate::validation::validate_specs`].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3:
//! Scheduling Algorithms

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessSpec, Tick, Timeline};

mod fcfs;
mod mlfq;
mod rr;
mod sjf;
mod srt;

/// Round-robin quantum used when the caller supplies none (or zero).
pub const DEFAULT_QUANTUM: Tick = 2;

/// MLFQ per-level quantums used when the caller supplies none (or zeros).
pub const DEFAULT_QUEUE_QUANTUMS: [Tick; 3] = [2, 4, 8];

/// Discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Shortest-remaining-time, preemptive at 1-unit resolution.
    Srt,
    /// Round robin with a fixed quantum.
    RoundRobin,
    /// Three-level feedback queue with per-level quantums.
    Mlfq,
}

impl Algorithm {
    /// Canonical selector name (e.g. "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srt => "SRT",
            Algorithm::RoundRobin => "RR",
            Algorithm::Mlfq => "MLFQ",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection of an unrecognized discipline selector. No run is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithmError {
    /// The selector that failed to parse.
    pub selector: String,
}

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm: '{}'", self.selector)
    }
}

impl std::error::Error for UnknownAlgorithmError {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRT" => Ok(Algorithm::Srt),
            "RR" => Ok(Algorithm::RoundRobin),
            "MLFQ" => Ok(Algorithm::Mlfq),
            _ => Err(UnknownAlgorithmError {
                selector: s.to_string(),
            }),
        }
    }
}

/// Engine parameters.
///
/// Invalid values fall back to the defaults rather than erroring: a zero
/// round-robin quantum becomes [`DEFAULT_QUANTUM`], and a zero MLFQ entry
/// becomes that entry's [`DEFAULT_QUEUE_QUANTUMS`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    quantum: Tick,
    queue_quantums: [Tick; 3],
}

impl SimConfig {
    /// Creates a config with the default parameters.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            queue_quantums: DEFAULT_QUEUE_QUANTUMS,
        }
    }

    /// Sets the round-robin quantum. Zero falls back to the default.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = if quantum == 0 { DEFAULT_QUANTUM } else { quantum };
        self
    }

    /// Sets the MLFQ per-level quantums, highest-priority level first.
    /// Zero entries fall back to their defaults.
    pub fn with_queue_quantums(mut self, quantums: [Tick; 3]) -> Self {
        for (level, quantum) in quantums.into_iter().enumerate() {
            self.queue_quantums[level] = if quantum == 0 {
                DEFAULT_QUEUE_QUANTUMS[level]
            } else {
                quantum
            };
        }
        self
    }

    /// The round-robin quantum.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }

    /// The MLFQ per-level quantums.
    pub fn queue_quantums(&self) -> [Tick; 3] {
        self.queue_quantums
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one run: the process records with finish times populated,
/// plus the raw (unmerged) timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Process records in input order, with `finish` (and for MLFQ
    /// `final_queue`) set.
    pub processes: Vec<Process>,
    /// Raw block sequence. Call [`Timeline::merged`] to coalesce
    /// preemption fragments.
    pub timeline: Timeline,
}

/// Runs one discipline over the given process descriptors.
///
/// Builds a fresh [`Process`] record per spec, so the caller's specs are
/// untouched and repeated runs are independent of each other.
///
/// # Preconditions
/// Every burst must be at least 1 — see the module docs.
pub fn run(algorithm: Algorithm, specs: &[ProcessSpec], config: &SimConfig) -> RunOutcome {
    let mut processes: Vec<Process> = specs.iter().map(Process::from_spec).collect();
    debug!(
        "starting {} run over {} processes",
        algorithm.name(),
        processes.len()
    );

    let timeline = match algorithm {
        Algorithm::Fcfs => fcfs::run(&mut processes),
        Algorithm::Sjf => sjf::run(&mut processes),
        Algorithm::Srt => srt::run(&mut processes),
        Algorithm::RoundRobin => rr::run(&mut processes, config.quantum),
        Algorithm::Mlfq => mlfq::run(&mut processes, config.queue_quantums),
    };

    debug!(
        "{} run finished: {} blocks, total time {}",
        algorithm.name(),
        timeline.block_count(),
        timeline.total_time()
    );
    RunOutcome {
        processes,
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueueLevel;

    const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srt,
        Algorithm::RoundRobin,
        Algorithm::Mlfq,
    ];

    fn sample_specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 5),
            ProcessSpec::new("P2", 1, 3).with_initial_queue(QueueLevel::Medium),
            ProcessSpec::new("P3", 4, 2),
            ProcessSpec::new("P4", 9, 1),
        ]
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("Srt".parse::<Algorithm>().unwrap(), Algorithm::Srt);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("mlfq".parse::<Algorithm>().unwrap(), Algorithm::Mlfq);
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = "HRRN".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.selector, "HRRN");
        assert!(err.to_string().contains("HRRN"));
    }

    #[test]
    fn test_config_defaults_and_fallbacks() {
        let config = SimConfig::default();
        assert_eq!(config.quantum(), 2);
        assert_eq!(config.queue_quantums(), [2, 4, 8]);

        let config = SimConfig::new().with_quantum(0);
        assert_eq!(config.quantum(), DEFAULT_QUANTUM);

        let config = SimConfig::new().with_quantum(3).with_queue_quantums([1, 0, 6]);
        assert_eq!(config.quantum(), 3);
        assert_eq!(config.queue_quantums(), [1, 4, 6]);
    }

    #[test]
    fn test_every_process_finishes_with_nonnegative_waiting() {
        let specs = sample_specs();
        for algorithm in ALL {
            let outcome = run(algorithm, &specs, &SimConfig::default());
            for process in &outcome.processes {
                let finish = process
                    .finish
                    .unwrap_or_else(|| panic!("{} left {} unfinished", algorithm, process.id));
                assert!(finish >= process.arrival + process.burst);
                // turnaround >= burst, i.e. waiting >= 0, holds by type;
                // check the derived accessors agree.
                assert_eq!(
                    process.waiting().unwrap(),
                    finish - process.arrival - process.burst
                );
            }
        }
    }

    #[test]
    fn test_block_durations_sum_to_burst() {
        let specs = sample_specs();
        for algorithm in ALL {
            let outcome = run(algorithm, &specs, &SimConfig::default());
            for spec in &specs {
                assert_eq!(
                    outcome.timeline.execution_time(&spec.id),
                    spec.burst,
                    "{} executed wrong total for {}",
                    algorithm,
                    spec.id
                );
            }
        }
    }

    #[test]
    fn test_blocks_ordered_and_disjoint() {
        let specs = sample_specs();
        for algorithm in ALL {
            let outcome = run(algorithm, &specs, &SimConfig::default());
            for pair in outcome.timeline.blocks.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{} overlaps blocks", algorithm);
            }
            for block in &outcome.timeline.blocks {
                assert!(block.end > block.start);
            }
        }
    }

    #[test]
    fn test_empty_process_set() {
        for algorithm in ALL {
            let outcome = run(algorithm, &[], &SimConfig::default());
            assert!(outcome.processes.is_empty());
            assert!(outcome.timeline.is_empty());
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let specs = sample_specs();
        let first = run(Algorithm::Srt, &specs, &SimConfig::default());
        let second = run(Algorithm::Srt, &specs, &SimConfig::default());
        assert_eq!(first, second);
        // Specs keep their original, unexecuted state.
        assert_eq!(specs[0].burst, 5);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let specs = sample_specs();
        for algorithm in ALL {
            let outcome = run(algorithm, &specs, &SimConfig::default());
            let ids: Vec<&str> = outcome.processes.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["P1", "P2", "P3", "P4"]);
        }
    }
}
